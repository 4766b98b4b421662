use crate::domain::IntegralDomain;
use serde::Serialize;
use std::fmt;

/// A synthesized flag value together with the domain it was computed in.
///
/// The value is always representable in `domain`. It is zero only when it
/// was produced for an enum with no explicit values; otherwise it has
/// exactly one bit set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FlagValue {
    /// Domain the value belongs to.
    pub domain: IntegralDomain,
    /// The value, widened to `i128`.
    pub value: i128,
}

impl FlagValue {
    pub(crate) const fn new(domain: IntegralDomain, value: i128) -> Self {
        Self { domain, value }
    }

    /// The starting value of an enum that has no explicit values yet.
    #[must_use]
    pub const fn zero(domain: IntegralDomain) -> Self {
        Self::new(domain, 0)
    }

    /// Index of the set bit, `None` for zero.
    #[must_use]
    pub const fn bit_index(&self) -> Option<u32> {
        if self.value == 0 {
            None
        } else {
            Some(self.value.trailing_zeros())
        }
    }

    /// Zero-padded hexadecimal literal sized to the domain, e.g. `0x0010`
    /// for 16 in a 16-bit domain.
    #[must_use]
    pub fn to_hex(&self) -> String {
        let width = (self.domain.bits() / 4) as usize;
        format!("0x{:0width$X}", self.value)
    }

    /// Shift-expression form, e.g. `1 << 4`. Zero is rendered as `0`.
    #[must_use]
    pub fn to_shift_expr(&self) -> String {
        match self.bit_index() {
            Some(index) => format!("1 << {index}"),
            None => "0".to_owned(),
        }
    }
}

impl fmt::Display for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
