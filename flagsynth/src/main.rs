//! Main binary entry point for flagsynth.
//!
//! Delegates to the shared `entry_point::run_with_args()` so the library and
//! `flagsynth-cli` binaries behave identically.

use anyhow::Result;

fn main() -> Result<()> {
    let code = flagsynth::entry_point::run_with_args(std::env::args().skip(1).collect())?;
    std::process::exit(code);
}
