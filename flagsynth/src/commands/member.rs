use crate::members::{DeclaredValues, EnumDeclaration};
use crate::output::{print_declined, render_value};
use crate::policy::SelectionPolicy;
use crate::refactor::{apply_member, generate_flags_member};

use anyhow::Result;
use colored::Colorize;
use std::io::Write;

/// Suggests a new member for the enum in `decl`.
pub fn run_member<W: Write>(
    decl: &EnumDeclaration,
    policy: SelectionPolicy,
    json: bool,
    hex: bool,
    writer: &mut W,
) -> Result<bool> {
    let Some(suggestion) = generate_flags_member(decl, &DeclaredValues, policy) else {
        print_declined(writer, decl, json)?;
        return Ok(false);
    };

    if json {
        let updated = apply_member(decl, &suggestion);
        let report = serde_json::json!({
            "success": true,
            "member": suggestion,
            "declaration": updated,
        });
        writeln!(writer, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        writeln!(
            writer,
            "{} = {}",
            suggestion.name.green().bold(),
            render_value(&suggestion.value, hex)
        )?;
    }
    Ok(true)
}
