//! Enumeration declarations as seen by the refactorings.
//!
//! The host compiler owns the real syntax tree and semantic model. Here an
//! enum is a plain description of its members, and constant evaluation is
//! delegated to a [`ConstantLookup`] supplied by the caller.

use crate::domain::IntegralDomain;
use crate::error::SynthesisError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

fn default_underlying_type() -> String {
    "int".to_owned()
}

/// One declared enumeration member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumMember {
    /// Member identifier.
    pub name: String,
    /// Explicitly assigned constant, if it is statically known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<i128>,
}

impl EnumMember {
    /// A member with an explicit value.
    #[must_use]
    pub fn with_value(name: impl Into<String>, value: i128) -> Self {
        Self {
            name: name.into(),
            value: Some(value),
        }
    }

    /// A member without an initializer.
    #[must_use]
    pub fn implicit(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }
}

/// An enumeration declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDeclaration {
    /// Enum identifier.
    pub name: String,
    /// Underlying type as written, e.g. `int` or `System.Byte`.
    #[serde(default = "default_underlying_type")]
    pub underlying_type: String,
    /// Whether the enum carries the flags attribute.
    #[serde(default)]
    pub is_flags: bool,
    /// Members in declaration order.
    #[serde(default)]
    pub members: Vec<EnumMember>,
}

impl EnumDeclaration {
    /// Creates an `int`-backed declaration with no members.
    #[must_use]
    pub fn new(name: impl Into<String>, is_flags: bool) -> Self {
        Self {
            name: name.into(),
            underlying_type: default_underlying_type(),
            is_flags,
            members: Vec::new(),
        }
    }

    /// Sets the underlying type.
    #[must_use]
    pub fn with_underlying_type(mut self, underlying_type: impl Into<String>) -> Self {
        self.underlying_type = underlying_type.into();
        self
    }

    /// Appends a member.
    #[must_use]
    pub fn with_member(mut self, member: EnumMember) -> Self {
        self.members.push(member);
        self
    }

    /// Maps the underlying type to an integral domain.
    pub fn domain(&self) -> Result<IntegralDomain, SynthesisError> {
        self.underlying_type.parse()
    }

    /// Returns `true` if a member called `name` is declared.
    #[must_use]
    pub fn has_member(&self, name: &str) -> bool {
        self.members.iter().any(|member| member.name == name)
    }

    /// Reads a declaration from a JSON file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let decl: Self = serde_json::from_str(&content)?;
        debug!(
            path = %path.display(),
            name = %decl.name,
            members = decl.members.len(),
            "loaded enum declaration"
        );
        Ok(decl)
    }
}

/// Evaluates the constant value of a declared member.
///
/// Returns `None` when the value is not statically known; such members do
/// not contribute to the explicit value set.
pub trait ConstantLookup {
    /// The member's constant value, if known.
    fn constant_value(&self, member: &EnumMember) -> Option<i128>;
}

impl<F> ConstantLookup for F
where
    F: Fn(&EnumMember) -> Option<i128>,
{
    fn constant_value(&self, member: &EnumMember) -> Option<i128> {
        self(member)
    }
}

/// Uses the value recorded on the member itself.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeclaredValues;

impl ConstantLookup for DeclaredValues {
    fn constant_value(&self, member: &EnumMember) -> Option<i128> {
        member.value
    }
}

/// Collects the known constant values of `decl`'s members, in declaration
/// order. Duplicates are kept.
pub fn collect_explicit_values(decl: &EnumDeclaration, lookup: &impl ConstantLookup) -> Vec<i128> {
    decl.members
        .iter()
        .filter_map(|member| lookup.constant_value(member))
        .collect()
}
