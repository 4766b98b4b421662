//! Tests for next-value synthesis across domains and policies.
#![allow(clippy::unwrap_used)]

use flagsynth::{
    try_get_new_value, FlagsValueSynthesizer, IntegralDomain, SelectionPolicy, SynthesisError,
};

const ALL: SelectionPolicy = SelectionPolicy::UseAllAvailableValues;
const HIGHEST: SelectionPolicy = SelectionPolicy::StartFromHighestExplicitValue;

fn next(values: &[i128], domain: IntegralDomain, policy: SelectionPolicy) -> Option<i128> {
    try_get_new_value(values, domain, policy).map(|flag| flag.value)
}

/// Every strictly positive power of two representable in `domain`.
fn every_positive_flag(domain: IntegralDomain) -> Vec<i128> {
    (0..domain.positive_flag_slots())
        .map(|shift| 1i128 << shift)
        .collect()
}

#[test]
fn test_empty_values_yield_zero_for_every_domain_and_policy() {
    for domain in IntegralDomain::ALL {
        for policy in [ALL, HIGHEST] {
            let value = try_get_new_value(&[], domain, policy).unwrap();
            assert_eq!(value.value, 0, "{domain} / {policy}");
            assert_eq!(value.domain, domain);
        }
    }
}

#[test]
fn test_exhausted_domain_fails_for_every_domain() {
    for domain in IntegralDomain::ALL {
        let values = every_positive_flag(domain);
        let result = FlagsValueSynthesizer::new(ALL).try_get_new_value(&values, domain);
        assert_eq!(result, Err(SynthesisError::Exhausted { domain }), "{domain}");
    }
}

#[test]
fn test_one_slot_left_is_found_for_every_domain() {
    for domain in IntegralDomain::ALL {
        let mut values = every_positive_flag(domain);
        let last = values.pop().unwrap();
        assert_eq!(next(&values, domain, ALL), Some(last), "{domain}");
    }
}

#[test]
fn test_use_all_next_after_contiguous_run() {
    assert_eq!(next(&[1, 2, 4], IntegralDomain::Int32, ALL), Some(8));
}

#[test]
fn test_use_all_fills_lowest_gap() {
    assert_eq!(next(&[1, 2, 8, 16], IntegralDomain::Int32, ALL), Some(4));
}

#[test]
fn test_use_all_only_skips_exact_matches() {
    // 3 overlaps bits 1 and 2 but is not an exact match for either.
    assert_eq!(next(&[3], IntegralDomain::Int32, ALL), Some(1));
    assert_eq!(next(&[1, 3], IntegralDomain::Int32, ALL), Some(2));
}

#[test]
fn test_use_all_ignores_zero_negative_and_duplicates() {
    assert_eq!(
        next(&[0, -1, -128, 1, 1, 2, 2], IntegralDomain::Int8, ALL),
        Some(4)
    );
}

#[test]
fn test_use_all_int8_every_flag_used_fails() {
    assert_eq!(
        next(&[1, 2, 4, 8, 16, 32, 64], IntegralDomain::Int8, ALL),
        None
    );
}

#[test]
fn test_use_all_uint8_can_use_top_bit() {
    assert_eq!(
        next(&[1, 2, 4, 8, 16, 32, 64], IntegralDomain::UInt8, ALL),
        Some(128)
    );
}

#[test]
fn test_highest_skips_non_power_of_two() {
    assert_eq!(next(&[1, 4, 3], IntegralDomain::Int32, HIGHEST), Some(8));
}

#[test]
fn test_highest_does_not_fill_gaps() {
    assert_eq!(next(&[1, 16], IntegralDomain::Int32, HIGHEST), Some(32));
}

#[test]
fn test_highest_duplicates_count_once() {
    assert_eq!(next(&[4, 4, 2], IntegralDomain::Int16, HIGHEST), Some(8));
}

#[test]
fn test_highest_int8_64_wraps_negative() {
    assert_eq!(
        FlagsValueSynthesizer::new(HIGHEST).try_get_new_value(&[64], IntegralDomain::Int8),
        Err(SynthesisError::Overflow {
            highest: 64,
            domain: IntegralDomain::Int8
        })
    );
}

#[test]
fn test_highest_wider_domain_does_not_overflow() {
    assert_eq!(next(&[64], IntegralDomain::Int16, HIGHEST), Some(128));
    assert_eq!(next(&[64], IntegralDomain::UInt8, HIGHEST), Some(128));
}

#[test]
fn test_highest_int64_top_positive_bit_overflows() {
    assert_eq!(next(&[1i128 << 62], IntegralDomain::Int64, HIGHEST), None);
    assert_eq!(
        next(&[1i128 << 62], IntegralDomain::UInt64, HIGHEST),
        Some(1i128 << 63)
    );
}

#[test]
fn test_highest_without_power_of_two_is_a_failure_not_a_panic() {
    let result =
        FlagsValueSynthesizer::new(HIGHEST).try_get_new_value(&[3, 5, -4], IntegralDomain::Int32);
    assert_eq!(
        result,
        Err(SynthesisError::NoPowerOfTwo {
            domain: IntegralDomain::Int32
        })
    );
}

#[test]
fn test_highest_ignores_negative_powers() {
    // -128 is a single set bit in an sbyte but it is negative.
    assert_eq!(next(&[-128, 2], IntegralDomain::Int8, HIGHEST), Some(4));
}

#[test]
fn test_results_are_single_bits_within_domain() {
    let inputs: [&[i128]; 4] = [&[1], &[1, 2, 4, 8], &[5, 6, 7], &[2, 32]];
    for domain in IntegralDomain::ALL {
        for values in inputs {
            for policy in [ALL, HIGHEST] {
                if let Some(value) = next(values, domain, policy) {
                    assert!(domain.contains(value), "{value} outside {domain}");
                    assert_eq!(value.count_ones(), 1, "{value} is not a single bit");
                    if policy == ALL {
                        assert!(!values.contains(&value));
                    }
                }
            }
        }
    }
}

#[test]
fn test_calls_are_idempotent() {
    let synthesizer = FlagsValueSynthesizer::new(HIGHEST);
    let values = [1, 2, 8, 9];
    let first = synthesizer.try_get_new_value(&values, IntegralDomain::UInt32);
    let second = synthesizer.try_get_new_value(&values, IntegralDomain::UInt32);
    assert_eq!(first, second);
    assert_eq!(first.unwrap().value, 16);
}

#[test]
fn test_type_name_entry_point() {
    let synthesizer = FlagsValueSynthesizer::new(ALL);
    assert_eq!(
        synthesizer.try_get_new_value_for_type(&[1, 2], "System.Int64"),
        Ok(4)
    );
    assert!(matches!(
        synthesizer.try_get_new_value_for_type(&[1], "bool"),
        Err(SynthesisError::UnsupportedDomain(_))
    ));
}
