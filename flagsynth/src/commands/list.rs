use crate::domain::IntegralDomain;
use crate::synthesizer::available_values;

use anyhow::Result;
use colored::Colorize;
use comfy_table::Table;
use std::io::Write;

/// Prints every power of two the given values leave free.
///
/// Returns `Ok(false)` when the domain has no free slot left.
pub fn run_list<W: Write>(
    values: &[i128],
    domain: IntegralDomain,
    json: bool,
    hex: bool,
    writer: &mut W,
) -> Result<bool> {
    let free = available_values(values, domain);

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&free)?)?;
        return Ok(!free.is_empty());
    }

    if free.is_empty() {
        writeln!(
            writer,
            "{}",
            format!("No free power-of-two values in {domain}.").yellow()
        )?;
        return Ok(false);
    }

    let mut table = Table::new();
    table.set_header(vec!["Bit", "Value", "Shift"]);
    for value in &free {
        let shown = if hex {
            value.to_hex()
        } else {
            value.value.to_string()
        };
        table.add_row(vec![
            value.bit_index().unwrap_or_default().to_string(),
            shown,
            value.to_shift_expr(),
        ]);
    }
    writeln!(writer, "{table}")?;
    writeln!(
        writer,
        "{} of {} slots free in {}",
        free.len().to_string().green().bold(),
        domain.positive_flag_slots(),
        domain
    )?;
    Ok(true)
}
