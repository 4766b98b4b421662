//! Refactorings offered on flags enumerations.
//!
//! Both refactorings are built on [`FlagsValueSynthesizer`]. They never
//! report an error to the user: when no value can be produced they return
//! `None` and the host simply does not offer the action.

use crate::domain::IntegralDomain;
use crate::error::SynthesisError;
use crate::members::{collect_explicit_values, ConstantLookup, EnumDeclaration, EnumMember};
use crate::policy::SelectionPolicy;
use crate::synthesizer::FlagsValueSynthesizer;
use crate::value::FlagValue;
use serde::Serialize;
use tracing::debug;

/// Base name for generated members.
pub const NEW_MEMBER_NAME: &str = "EnumMember";

/// A member to be added to an enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberSuggestion {
    /// Unique member name.
    pub name: String,
    /// Value to assign.
    pub value: FlagValue,
}

/// A value generated for an existing member that had none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignedValue {
    /// Member name.
    pub name: String,
    /// Generated value.
    pub value: FlagValue,
}

/// Suggests a new member for a flags enum.
///
/// Declines when the enum is not a flags enum, its underlying type is not
/// integral, or the synthesizer cannot find a value.
pub fn generate_flags_member(
    decl: &EnumDeclaration,
    lookup: &impl ConstantLookup,
    policy: SelectionPolicy,
) -> Option<MemberSuggestion> {
    let domain = offered_domain(decl)?;
    let values = collect_explicit_values(decl, lookup);
    let value = match FlagsValueSynthesizer::new(policy).try_get_new_value(&values, domain) {
        Ok(value) => value,
        Err(err) => {
            debug!(enum_name = %decl.name, %err, "declining to generate member");
            return None;
        }
    };

    Some(MemberSuggestion {
        name: unique_member_name(decl, NEW_MEMBER_NAME),
        value,
    })
}

/// Generates values for every member whose constant is not known.
///
/// Members are processed in declaration order and each generated value is
/// treated as explicit for the members after it. Either every such member
/// gets a value or the refactoring is declined. Returns an empty list when
/// all members already have values.
///
/// An enum with no values yet starts at zero under either policy. Under
/// [`SelectionPolicy::StartFromHighestExplicitValue`] the member after a
/// lone zero gets 1, since there is no power of two to double yet.
pub fn generate_enum_values(
    decl: &EnumDeclaration,
    lookup: &impl ConstantLookup,
    policy: SelectionPolicy,
) -> Option<Vec<AssignedValue>> {
    let domain = offered_domain(decl)?;
    let synthesizer = FlagsValueSynthesizer::new(policy);
    let mut values = collect_explicit_values(decl, lookup);
    let mut assigned = Vec::new();

    for member in &decl.members {
        if lookup.constant_value(member).is_some() {
            continue;
        }
        match next_value(&synthesizer, &values, domain) {
            Ok(value) => {
                values.push(value.value);
                assigned.push(AssignedValue {
                    name: member.name.clone(),
                    value,
                });
            }
            Err(err) => {
                debug!(enum_name = %decl.name, member = %member.name, %err, "declining to generate values");
                return None;
            }
        }
    }

    Some(assigned)
}

fn next_value(
    synthesizer: &FlagsValueSynthesizer,
    values: &[i128],
    domain: IntegralDomain,
) -> Result<FlagValue, SynthesisError> {
    match synthesizer.try_get_new_value(values, domain) {
        Err(SynthesisError::NoPowerOfTwo { .. }) if values.iter().all(|&value| value == 0) => {
            Ok(FlagValue::new(domain, 1))
        }
        result => result,
    }
}

/// Returns a copy of `decl` with the generated values written into its
/// members.
#[must_use]
pub fn apply_assigned_values(decl: &EnumDeclaration, assigned: &[AssignedValue]) -> EnumDeclaration {
    let mut updated = decl.clone();
    for member in &mut updated.members {
        if let Some(entry) = assigned.iter().find(|entry| entry.name == member.name) {
            member.value = Some(entry.value.value);
        }
    }
    updated
}

/// Returns a copy of `decl` with `suggestion` appended.
#[must_use]
pub fn apply_member(decl: &EnumDeclaration, suggestion: &MemberSuggestion) -> EnumDeclaration {
    decl.clone()
        .with_member(EnumMember::with_value(&suggestion.name, suggestion.value.value))
}

/// `base`, or `base2`, `base3`, ... whichever is not yet declared.
#[must_use]
pub fn unique_member_name(decl: &EnumDeclaration, base: &str) -> String {
    if !decl.has_member(base) {
        return base.to_owned();
    }
    (2u32..)
        .map(|suffix| format!("{base}{suffix}"))
        .find(|candidate| !decl.has_member(candidate))
        .unwrap_or_else(|| base.to_owned())
}

fn offered_domain(decl: &EnumDeclaration) -> Option<IntegralDomain> {
    if !decl.is_flags {
        debug!(enum_name = %decl.name, "not a flags enum");
        return None;
    }
    match decl.domain() {
        Ok(domain) => Some(domain),
        Err(err) => {
            debug!(enum_name = %decl.name, %err, "unsupported underlying type");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::members::DeclaredValues;

    fn permissions() -> EnumDeclaration {
        EnumDeclaration::new("Permissions", true)
            .with_member(EnumMember::with_value("None", 0))
            .with_member(EnumMember::with_value("Read", 1))
            .with_member(EnumMember::with_value("Execute", 4))
    }

    #[test]
    fn test_member_fills_gap() {
        let suggestion = generate_flags_member(
            &permissions(),
            &DeclaredValues,
            SelectionPolicy::UseAllAvailableValues,
        )
        .unwrap();
        assert_eq!(suggestion.name, "EnumMember");
        assert_eq!(suggestion.value.value, 2);
    }

    #[test]
    fn test_member_from_highest() {
        let suggestion = generate_flags_member(
            &permissions(),
            &DeclaredValues,
            SelectionPolicy::StartFromHighestExplicitValue,
        )
        .unwrap();
        assert_eq!(suggestion.value.value, 8);
    }

    #[test]
    fn test_declines_non_flags_enum() {
        let mut decl = permissions();
        decl.is_flags = false;
        assert!(generate_flags_member(
            &decl,
            &DeclaredValues,
            SelectionPolicy::UseAllAvailableValues
        )
        .is_none());
    }

    #[test]
    fn test_declines_unsupported_type() {
        let decl = permissions().with_underlying_type("char");
        assert!(generate_flags_member(
            &decl,
            &DeclaredValues,
            SelectionPolicy::UseAllAvailableValues
        )
        .is_none());
    }

    #[test]
    fn test_unique_name_skips_taken() {
        let decl = permissions()
            .with_member(EnumMember::with_value("EnumMember", 8))
            .with_member(EnumMember::with_value("EnumMember2", 16));
        assert_eq!(unique_member_name(&decl, NEW_MEMBER_NAME), "EnumMember3");
    }

    #[test]
    fn test_generate_values_in_order() {
        let decl = EnumDeclaration::new("Style", true)
            .with_member(EnumMember::implicit("None"))
            .with_member(EnumMember::implicit("Bold"))
            .with_member(EnumMember::with_value("Italic", 2))
            .with_member(EnumMember::implicit("Underline"));
        let assigned =
            generate_enum_values(&decl, &DeclaredValues, SelectionPolicy::UseAllAvailableValues)
                .unwrap();
        let pairs: Vec<(&str, i128)> = assigned
            .iter()
            .map(|entry| (entry.name.as_str(), entry.value.value))
            .collect();
        assert_eq!(pairs, vec![("None", 1), ("Bold", 4), ("Underline", 8)]);
    }

    #[test]
    fn test_generate_values_for_all_implicit_enum() {
        let decl = EnumDeclaration::new("Style", true)
            .with_member(EnumMember::implicit("None"))
            .with_member(EnumMember::implicit("Bold"))
            .with_member(EnumMember::implicit("Italic"));
        for policy in [
            SelectionPolicy::UseAllAvailableValues,
            SelectionPolicy::StartFromHighestExplicitValue,
        ] {
            let assigned = generate_enum_values(&decl, &DeclaredValues, policy).unwrap();
            let values: Vec<i128> = assigned.iter().map(|entry| entry.value.value).collect();
            assert_eq!(values, vec![0, 1, 2], "{policy}");
        }
    }

    #[test]
    fn test_generate_values_declines_on_exhaustion() {
        let mut decl = EnumDeclaration::new("Tiny", true).with_underlying_type("sbyte");
        for shift in 0..7 {
            decl = decl.with_member(EnumMember::with_value(format!("B{shift}"), 1 << shift));
        }
        decl = decl.with_member(EnumMember::implicit("Overflow"));
        assert!(
            generate_enum_values(&decl, &DeclaredValues, SelectionPolicy::UseAllAvailableValues)
                .is_none()
        );
    }
}
