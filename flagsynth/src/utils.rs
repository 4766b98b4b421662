/// Parses an integer literal as written on the command line.
///
/// Accepts decimal, `0x` hexadecimal, `0b` binary and `0o` octal forms,
/// `_` digit separators, and a leading `-` or `+`.
///
/// # Errors
///
/// Returns a message naming the offending literal if it cannot be parsed
/// or does not fit in 128 bits.
pub fn parse_int_literal(literal: &str) -> Result<i128, String> {
    let trimmed = literal.trim();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let lower = unsigned.to_ascii_lowercase();
    let (radix, digits) = if let Some(rest) = lower.strip_prefix("0x") {
        (16, rest)
    } else if let Some(rest) = lower.strip_prefix("0b") {
        (2, rest)
    } else if let Some(rest) = lower.strip_prefix("0o") {
        (8, rest)
    } else {
        (10, lower.as_str())
    };

    let digits: String = digits.chars().filter(|&c| c != '_').collect();
    if digits.is_empty() || digits.starts_with(['-', '+']) {
        return Err(format!("invalid integer literal: {literal}"));
    }

    let magnitude = i128::from_str_radix(&digits, radix)
        .map_err(|err| format!("invalid integer literal {literal}: {err}"))?;
    Ok(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_forms() {
        assert_eq!(parse_int_literal("42"), Ok(42));
        assert_eq!(parse_int_literal("0x10"), Ok(16));
        assert_eq!(parse_int_literal("0X1F"), Ok(31));
        assert_eq!(parse_int_literal("0b1000"), Ok(8));
        assert_eq!(parse_int_literal("0o17"), Ok(15));
        assert_eq!(parse_int_literal("1_024"), Ok(1024));
        assert_eq!(parse_int_literal("-128"), Ok(-128));
        assert_eq!(parse_int_literal("-0x80"), Ok(-128));
        assert_eq!(parse_int_literal("+7"), Ok(7));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_int_literal("").is_err());
        assert!(parse_int_literal("0x").is_err());
        assert!(parse_int_literal("--1").is_err());
        assert!(parse_int_literal("ten").is_err());
        assert!(parse_int_literal("1.5").is_err());
    }
}
