//! Fixed-width integer domains backing an enumeration.
//!
//! `IntegralDomain` names one of the eight integral underlying types an
//! enum can have. The arithmetic itself lives in the [`FlagBits`] trait,
//! implemented once per native Rust integer type, so the synthesizer can be
//! written as a single generic algorithm and dispatched per domain.

use crate::error::SynthesisError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the eight fixed-width signed/unsigned integer domains.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntegralDomain {
    /// 8-bit signed (`sbyte`).
    #[serde(rename = "sbyte")]
    Int8,
    /// 8-bit unsigned (`byte`).
    #[serde(rename = "byte")]
    UInt8,
    /// 16-bit signed (`short`).
    #[serde(rename = "short")]
    Int16,
    /// 16-bit unsigned (`ushort`).
    #[serde(rename = "ushort")]
    UInt16,
    /// 32-bit signed (`int`), the default underlying type.
    #[default]
    #[serde(rename = "int")]
    Int32,
    /// 32-bit unsigned (`uint`).
    #[serde(rename = "uint")]
    UInt32,
    /// 64-bit signed (`long`).
    #[serde(rename = "long")]
    Int64,
    /// 64-bit unsigned (`ulong`).
    #[serde(rename = "ulong")]
    UInt64,
}

impl IntegralDomain {
    /// All domains, narrowest first.
    pub const ALL: [Self; 8] = [
        Self::Int8,
        Self::UInt8,
        Self::Int16,
        Self::UInt16,
        Self::Int32,
        Self::UInt32,
        Self::Int64,
        Self::UInt64,
    ];

    /// Width of the domain in bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            Self::Int8 | Self::UInt8 => 8,
            Self::Int16 | Self::UInt16 => 16,
            Self::Int32 | Self::UInt32 => 32,
            Self::Int64 | Self::UInt64 => 64,
        }
    }

    /// Whether the domain uses two's-complement signed values.
    #[must_use]
    pub const fn is_signed(self) -> bool {
        matches!(self, Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64)
    }

    /// Smallest representable value.
    #[must_use]
    pub const fn min_value(self) -> i128 {
        if self.is_signed() {
            -(1i128 << (self.bits() - 1))
        } else {
            0
        }
    }

    /// Largest representable value.
    #[must_use]
    pub const fn max_value(self) -> i128 {
        if self.is_signed() {
            (1i128 << (self.bits() - 1)) - 1
        } else {
            (1i128 << self.bits()) - 1
        }
    }

    /// Returns `true` if `value` fits in this domain without truncation.
    #[must_use]
    pub const fn contains(self, value: i128) -> bool {
        value >= self.min_value() && value <= self.max_value()
    }

    /// Number of strictly positive powers of two the domain can hold.
    ///
    /// This is the number of candidates the "use all available values"
    /// scan walks through before it wraps.
    #[must_use]
    pub const fn positive_flag_slots(self) -> u32 {
        if self.is_signed() {
            self.bits() - 1
        } else {
            self.bits()
        }
    }

    /// The C# keyword for this domain, used when printing.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Int8 => "sbyte",
            Self::UInt8 => "byte",
            Self::Int16 => "short",
            Self::UInt16 => "ushort",
            Self::Int32 => "int",
            Self::UInt32 => "uint",
            Self::Int64 => "long",
            Self::UInt64 => "ulong",
        }
    }

    /// Resolves an underlying type name to a domain.
    ///
    /// Accepts C# keywords, CLR type names (with or without the `System.`
    /// prefix) and Rust primitive names. Matching is case-sensitive for
    /// keywords, as it is in source code.
    #[must_use]
    pub fn from_type_name(name: &str) -> Option<Self> {
        let name = name.trim();
        let name = name.strip_prefix("System.").unwrap_or(name);
        let domain = match name {
            "sbyte" | "SByte" | "i8" => Self::Int8,
            "byte" | "Byte" | "u8" => Self::UInt8,
            "short" | "Int16" | "i16" => Self::Int16,
            "ushort" | "UInt16" | "u16" => Self::UInt16,
            "int" | "Int32" | "i32" => Self::Int32,
            "uint" | "UInt32" | "u32" => Self::UInt32,
            "long" | "Int64" | "i64" => Self::Int64,
            "ulong" | "UInt64" | "u64" => Self::UInt64,
            _ => return None,
        };
        Some(domain)
    }
}

impl fmt::Display for IntegralDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for IntegralDomain {
    type Err = SynthesisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_type_name(s).ok_or_else(|| SynthesisError::UnsupportedDomain(s.to_owned()))
    }
}

/// Fixed-width integer arithmetic needed by the synthesizer.
///
/// Every operation works on the native bit pattern of the implementing type:
/// doubling silently drops the overflow bit, exactly like unchecked
/// arithmetic in the host language.
pub trait FlagBits: Copy + Ord + fmt::Debug + Send + Sync + 'static {
    /// The domain this native type represents.
    const DOMAIN: IntegralDomain;
    /// Zero.
    const ZERO: Self;
    /// The smallest strictly positive power of two.
    const ONE: Self;

    /// Multiplies by two, discarding bits shifted past the width.
    #[must_use]
    fn wrapping_double(self) -> Self;

    /// `self & (self - 1) == 0` on the native bit pattern. True for zero.
    fn has_at_most_one_bit(self) -> bool;

    /// Narrows an arbitrary-precision value, `None` if it does not fit.
    fn narrow(value: i128) -> Option<Self>;

    /// Widens back to `i128`. Never loses information.
    fn widen(self) -> i128;

    /// Strictly greater than zero.
    fn is_positive(self) -> bool {
        self > Self::ZERO
    }

    /// Greater than or equal to zero. Always true for unsigned types.
    fn is_non_negative(self) -> bool {
        self >= Self::ZERO
    }
}

macro_rules! impl_flag_bits {
    ($($ty:ty => $domain:ident),* $(,)?) => {
        $(
            impl FlagBits for $ty {
                const DOMAIN: IntegralDomain = IntegralDomain::$domain;
                const ZERO: Self = 0;
                const ONE: Self = 1;

                fn wrapping_double(self) -> Self {
                    self.wrapping_mul(2)
                }

                fn has_at_most_one_bit(self) -> bool {
                    self & self.wrapping_sub(1) == 0
                }

                fn narrow(value: i128) -> Option<Self> {
                    <$ty>::try_from(value).ok()
                }

                fn widen(self) -> i128 {
                    i128::from(self)
                }
            }
        )*
    };
}

impl_flag_bits! {
    i8 => Int8,
    u8 => UInt8,
    i16 => Int16,
    u16 => UInt16,
    i32 => Int32,
    u32 => UInt32,
    i64 => Int64,
    u64 => UInt64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges_match_native_types() {
        assert_eq!(IntegralDomain::Int8.min_value(), i128::from(i8::MIN));
        assert_eq!(IntegralDomain::Int8.max_value(), i128::from(i8::MAX));
        assert_eq!(IntegralDomain::UInt16.max_value(), i128::from(u16::MAX));
        assert_eq!(IntegralDomain::Int64.min_value(), i128::from(i64::MIN));
        assert_eq!(IntegralDomain::UInt64.max_value(), i128::from(u64::MAX));
        assert_eq!(IntegralDomain::UInt64.min_value(), 0);
    }

    #[test]
    fn test_wrapping_double_flips_sign_bit() {
        assert_eq!(64i8.wrapping_double(), -128);
        assert_eq!(128u8.wrapping_double(), 0);
        assert_eq!((1i64 << 62).wrapping_double(), i64::MIN);
    }

    #[test]
    fn test_has_at_most_one_bit() {
        assert!(0i32.has_at_most_one_bit());
        assert!(1i32.has_at_most_one_bit());
        assert!(1024i32.has_at_most_one_bit());
        assert!(!3i32.has_at_most_one_bit());
        assert!(i8::MIN.has_at_most_one_bit());
        assert!(!(-1i8).has_at_most_one_bit());
    }

    #[test]
    fn test_from_type_name_aliases() {
        assert_eq!(
            IntegralDomain::from_type_name("System.UInt16"),
            Some(IntegralDomain::UInt16)
        );
        assert_eq!(
            IntegralDomain::from_type_name("sbyte"),
            Some(IntegralDomain::Int8)
        );
        assert_eq!(
            IntegralDomain::from_type_name("u64"),
            Some(IntegralDomain::UInt64)
        );
        assert_eq!(IntegralDomain::from_type_name("decimal"), None);
        assert!("string".parse::<IntegralDomain>().is_err());
    }

    #[test]
    fn test_positive_flag_slots() {
        assert_eq!(IntegralDomain::Int8.positive_flag_slots(), 7);
        assert_eq!(IntegralDomain::UInt8.positive_flag_slots(), 8);
        assert_eq!(IntegralDomain::UInt64.positive_flag_slots(), 64);
    }

    #[test]
    fn test_serialized_name_parses_back() {
        for domain in IntegralDomain::ALL {
            let json = serde_json::to_value(domain).unwrap();
            let name = json.as_str().unwrap();
            assert_eq!(name, domain.to_string());
            assert_eq!(name.parse::<IntegralDomain>().unwrap(), domain);
            let back: IntegralDomain = serde_json::from_value(json).unwrap();
            assert_eq!(back, domain);
        }
        assert_eq!(
            serde_json::to_string(&IntegralDomain::Int32).unwrap(),
            "\"int\""
        );
    }
}
