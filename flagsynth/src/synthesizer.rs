//! Next-value synthesis for flags enumerations.
//!
//! The algorithm is written once, generically over [`FlagBits`], and the
//! caller's [`IntegralDomain`] picks the native integer type to run it on.
//! Explicit values arrive as `i128` and are narrowed to that type first;
//! anything that does not fit cannot collide with a domain value and is
//! skipped.

use crate::domain::{FlagBits, IntegralDomain};
use crate::error::SynthesisError;
use crate::policy::SelectionPolicy;
use crate::value::FlagValue;
use rustc_hash::FxHashSet;
use std::hash::Hash;
use tracing::debug;

/// Chooses values for new members of a flags enumeration.
///
/// Stateless apart from the policy; calls with identical inputs always
/// return identical results.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FlagsValueSynthesizer {
    policy: SelectionPolicy,
}

impl FlagsValueSynthesizer {
    /// Creates a synthesizer using `policy`.
    #[must_use]
    pub const fn new(policy: SelectionPolicy) -> Self {
        Self { policy }
    }

    /// The selection policy in use.
    #[must_use]
    pub const fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    /// Computes the value for a new member, given the values of the
    /// existing members.
    ///
    /// An empty `values` slice always yields zero, whatever the domain or
    /// policy.
    pub fn try_get_new_value(
        &self,
        values: &[i128],
        domain: IntegralDomain,
    ) -> Result<FlagValue, SynthesisError> {
        if values.is_empty() {
            return Ok(FlagValue::zero(domain));
        }

        let value = match domain {
            IntegralDomain::Int8 => synthesize::<i8>(values, self.policy),
            IntegralDomain::UInt8 => synthesize::<u8>(values, self.policy),
            IntegralDomain::Int16 => synthesize::<i16>(values, self.policy),
            IntegralDomain::UInt16 => synthesize::<u16>(values, self.policy),
            IntegralDomain::Int32 => synthesize::<i32>(values, self.policy),
            IntegralDomain::UInt32 => synthesize::<u32>(values, self.policy),
            IntegralDomain::Int64 => synthesize::<i64>(values, self.policy),
            IntegralDomain::UInt64 => synthesize::<u64>(values, self.policy),
        }?;

        debug!(%domain, policy = %self.policy, value, "synthesized flag value");
        Ok(FlagValue::new(domain, value))
    }

    /// Same as [`Self::try_get_new_value`], resolving the domain from an
    /// underlying type name such as `int` or `System.UInt16`.
    ///
    /// The empty-values rule is applied before the type is resolved, so an
    /// enum with no explicit values gets zero even for an unsupported type.
    pub fn try_get_new_value_for_type(
        &self,
        values: &[i128],
        type_name: &str,
    ) -> Result<i128, SynthesisError> {
        if values.is_empty() {
            return Ok(0);
        }
        let domain: IntegralDomain = type_name.parse()?;
        self.try_get_new_value(values, domain).map(|flag| flag.value)
    }
}

/// Returns the new value, or `None` when no value can be offered.
///
/// Convenience wrapper for callers that only care about success.
pub fn try_get_new_value(
    values: &[i128],
    domain: IntegralDomain,
    policy: SelectionPolicy,
) -> Option<FlagValue> {
    FlagsValueSynthesizer::new(policy)
        .try_get_new_value(values, domain)
        .ok()
}

/// Every positive power of two in `domain` that no explicit value uses,
/// ascending. These are the values `UseAllAvailableValues` would offer one
/// after another.
pub fn available_values(values: &[i128], domain: IntegralDomain) -> Vec<FlagValue> {
    let free = match domain {
        IntegralDomain::Int8 => free_slots::<i8>(values),
        IntegralDomain::UInt8 => free_slots::<u8>(values),
        IntegralDomain::Int16 => free_slots::<i16>(values),
        IntegralDomain::UInt16 => free_slots::<u16>(values),
        IntegralDomain::Int32 => free_slots::<i32>(values),
        IntegralDomain::UInt32 => free_slots::<u32>(values),
        IntegralDomain::Int64 => free_slots::<i64>(values),
        IntegralDomain::UInt64 => free_slots::<u64>(values),
    };
    free.into_iter()
        .map(|value| FlagValue::new(domain, value))
        .collect()
}

fn synthesize<T: FlagBits + Hash>(
    values: &[i128],
    policy: SelectionPolicy,
) -> Result<i128, SynthesisError> {
    let used = narrow_values::<T>(values);
    match policy {
        SelectionPolicy::UseAllAvailableValues => first_unused(&used)
            .map(T::widen)
            .ok_or(SynthesisError::Exhausted { domain: T::DOMAIN }),
        SelectionPolicy::StartFromHighestExplicitValue => {
            double_highest(&used).map(T::widen)
        }
    }
}

fn narrow_values<T: FlagBits>(values: &[i128]) -> Vec<T> {
    values
        .iter()
        .filter_map(|&value| {
            let narrowed = T::narrow(value);
            if narrowed.is_none() {
                debug!(value, domain = %T::DOMAIN, "skipping value outside domain");
            }
            narrowed
        })
        .collect()
}

/// Walks 1, 2, 4, ... and returns the first candidate with no exact match.
/// Stops once doubling wraps to zero or a negative value.
fn first_unused<T: FlagBits + Hash>(used: &[T]) -> Option<T> {
    let used: FxHashSet<T> = used.iter().copied().collect();
    let mut candidate = T::ONE;
    while candidate.is_positive() {
        if !used.contains(&candidate) {
            return Some(candidate);
        }
        candidate = candidate.wrapping_double();
    }
    None
}

/// Doubles the largest positive single-bit value.
///
/// Zero passes the `v & (v - 1) == 0` test but is left out: doubling it
/// cannot produce a new flag, so `[0]` alone is `NoPowerOfTwo`.
///
/// The doubled value must be strictly positive. In a signed domain the top
/// positive bit doubles into the sign bit; in an unsigned domain the top
/// bit (128 in `byte`) wraps to zero. Both are reported as `Overflow`
/// rather than offering 0 or a negative value as a new flag.
fn double_highest<T: FlagBits>(used: &[T]) -> Result<T, SynthesisError> {
    let highest = used
        .iter()
        .copied()
        .filter(|&value| value.is_non_negative() && value.has_at_most_one_bit())
        .filter(|&value| value != T::ZERO)
        .max()
        .ok_or(SynthesisError::NoPowerOfTwo { domain: T::DOMAIN })?;

    let doubled = highest.wrapping_double();
    if doubled.is_positive() {
        Ok(doubled)
    } else {
        Err(SynthesisError::Overflow {
            highest: highest.widen(),
            domain: T::DOMAIN,
        })
    }
}

fn free_slots<T: FlagBits + Hash>(values: &[i128]) -> Vec<i128> {
    let used: FxHashSet<T> = narrow_values::<T>(values).into_iter().collect();
    let mut free = Vec::new();
    let mut candidate = T::ONE;
    while candidate.is_positive() {
        if !used.contains(&candidate) {
            free.push(candidate.widen());
        }
        candidate = candidate.wrapping_double();
    }
    free
}
