//! Failure kinds reported by the synthesizer.

use crate::domain::IntegralDomain;

/// Why no new flag value could be produced.
///
/// None of these are fatal: a refactoring provider receiving one simply
/// declines to offer the transformation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SynthesisError {
    /// The underlying type is not one of the eight integral domains.
    #[error("unsupported underlying type: {0}")]
    UnsupportedDomain(String),

    /// Every positive power of two in the domain is already used.
    #[error("every power-of-two value in {domain} is already used")]
    Exhausted {
        /// Domain that ran out of slots.
        domain: IntegralDomain,
    },

    /// Doubling the highest explicit power of two leaves the domain.
    #[error("doubling {highest} overflows {domain}")]
    Overflow {
        /// The highest power-of-two explicit value.
        highest: i128,
        /// Domain the doubled value does not fit in.
        domain: IntegralDomain,
    },

    /// No explicit value is a non-negative power of two, so there is no
    /// highest value to start from.
    #[error("no explicit value is a power of two in {domain}")]
    NoPowerOfTwo {
        /// Domain the values were narrowed to.
        domain: IntegralDomain,
    },
}
