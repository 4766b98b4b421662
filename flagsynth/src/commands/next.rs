use crate::domain::IntegralDomain;
use crate::output::{print_failure, render_value, FailureReport};
use crate::policy::SelectionPolicy;
use crate::synthesizer::FlagsValueSynthesizer;
use crate::value::FlagValue;

use anyhow::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct NextResult {
    success: bool,
    domain: IntegralDomain,
    policy: SelectionPolicy,
    value: i128,
    hex: String,
    shift: String,
}

impl NextResult {
    fn new(value: &FlagValue, policy: SelectionPolicy) -> Self {
        Self {
            success: true,
            domain: value.domain,
            policy,
            value: value.value,
            hex: value.to_hex(),
            shift: value.to_shift_expr(),
        }
    }
}

/// Prints the value a new member would get.
///
/// Returns `Ok(false)` when no value is available; the reason has already
/// been reported.
pub fn run_next<W: Write>(
    values: &[i128],
    domain: IntegralDomain,
    policy: SelectionPolicy,
    json: bool,
    hex: bool,
    writer: &mut W,
) -> Result<bool> {
    let synthesizer = FlagsValueSynthesizer::new(policy);
    match synthesizer.try_get_new_value(values, domain) {
        Ok(value) => {
            if json {
                let result = NextResult::new(&value, policy);
                writeln!(writer, "{}", serde_json::to_string_pretty(&result)?)?;
            } else {
                writeln!(writer, "{}", render_value(&value, hex))?;
            }
            Ok(true)
        }
        Err(err) => {
            print_failure(writer, &FailureReport::new(&err, domain, policy), json)?;
            Ok(false)
        }
    }
}
