use crate::domain::IntegralDomain;
use crate::error::SynthesisError;
use crate::members::EnumDeclaration;
use crate::policy::SelectionPolicy;
use crate::value::FlagValue;
use colored::Colorize;
use serde::Serialize;
use std::io::Write;

/// Why a command could not produce a value, in a serializable form.
#[derive(Debug, Serialize)]
pub struct FailureReport {
    /// Always `false`.
    pub success: bool,
    /// Domain the synthesis ran in.
    pub domain: IntegralDomain,
    /// Policy in use.
    pub policy: SelectionPolicy,
    /// Human-readable reason.
    pub error: String,
}

impl FailureReport {
    /// Builds a report for `err`.
    #[must_use]
    pub fn new(err: &SynthesisError, domain: IntegralDomain, policy: SelectionPolicy) -> Self {
        Self {
            success: false,
            domain,
            policy,
            error: err.to_string(),
        }
    }
}

/// Formats a value as decimal or as a domain-width hex literal.
#[must_use]
pub fn render_value(value: &FlagValue, hex: bool) -> String {
    if hex {
        value.to_hex()
    } else {
        value.to_string()
    }
}

/// Reports a synthesis failure.
///
/// JSON goes to `writer` so scripts can parse it; the plain message goes to
/// stderr.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_failure(
    writer: &mut impl Write,
    report: &FailureReport,
    json: bool,
) -> anyhow::Result<()> {
    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(report)?)?;
    } else {
        eprintln!("{} {}", "No value available:".red().bold(), report.error);
    }
    Ok(())
}

/// Reports that a refactoring was not offered for `decl`.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_declined(
    writer: &mut impl Write,
    decl: &EnumDeclaration,
    json: bool,
) -> anyhow::Result<()> {
    let reason = declined_reason(decl);
    if json {
        let report = serde_json::json!({
            "success": false,
            "enum": decl.name,
            "error": reason,
        });
        writeln!(writer, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        eprintln!("{} {}", "Not offered:".yellow().bold(), reason);
    }
    Ok(())
}

fn declined_reason(decl: &EnumDeclaration) -> String {
    if !decl.is_flags {
        return format!("{} is not a flags enum", decl.name);
    }
    match decl.domain() {
        Err(err) => err.to_string(),
        Ok(domain) => format!("no free flag value left in {} ({domain})", decl.name),
    }
}
