use crate::members::{DeclaredValues, EnumDeclaration};
use crate::output::print_declined;
use crate::policy::SelectionPolicy;
use crate::refactor::{apply_assigned_values, generate_enum_values};
use crate::value::FlagValue;

use anyhow::Result;
use colored::Colorize;
use comfy_table::Table;
use std::io::Write;

/// Generates values for the members of `decl` that have none.
pub fn run_assign<W: Write>(
    decl: &EnumDeclaration,
    policy: SelectionPolicy,
    json: bool,
    hex: bool,
    writer: &mut W,
) -> Result<bool> {
    let Some(assigned) = generate_enum_values(decl, &DeclaredValues, policy) else {
        print_declined(writer, decl, json)?;
        return Ok(false);
    };
    let updated = apply_assigned_values(decl, &assigned);

    if json {
        let report = serde_json::json!({
            "success": true,
            "assigned": assigned,
            "declaration": updated,
        });
        writeln!(writer, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(true);
    }

    // Domain is known to be valid once values were generated.
    let domain = updated.domain()?;
    let mut table = Table::new();
    table.set_header(vec!["Member", "Value", ""]);
    for member in &updated.members {
        let generated = assigned.iter().any(|entry| entry.name == member.name);
        let shown = match member.value {
            Some(value) if hex => FlagValue { domain, value }.to_hex(),
            Some(value) => value.to_string(),
            None => "?".to_owned(),
        };
        let marker = if generated {
            "generated".green().to_string()
        } else {
            String::new()
        };
        table.add_row(vec![member.name.clone(), shown, marker]);
    }
    writeln!(writer, "{table}")?;
    writeln!(
        writer,
        "Assigned {} value(s) in {}",
        assigned.len().to_string().green().bold(),
        updated.name
    )?;
    Ok(true)
}
