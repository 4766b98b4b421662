use crate::cli::{Cli, Commands, OutputOptions, PolicyArgs};
use crate::config::{Config, FlagSynthConfig};
use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR, VERBOSE_LOG_FILTER};
use crate::domain::IntegralDomain;
use crate::members::EnumDeclaration;
use crate::policy::SelectionPolicy;
use anyhow::Result;
use clap::Parser;
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Installs the stderr `tracing` subscriber.
///
/// The filter comes from `FLAGSYNTH_LOG` when set, otherwise from the
/// verbosity flag. Calling this more than once keeps the first subscriber.
pub fn init_logging(verbose: bool) {
    let fallback = if verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Run flagsynth with the given arguments (without the program name).
///
/// # Errors
///
/// Returns an error if reading an input file or writing output fails.
pub fn run_with_args(args: Vec<String>) -> Result<i32> {
    run_with_args_to(args, &mut std::io::stdout())
}

/// Run flagsynth with the given arguments, writing output to the specified writer.
///
/// This is the testable version of `run_with_args` that allows output capture.
/// Returns 0 when a value was produced, 1 when none could be (or the
/// arguments were invalid).
///
/// # Errors
///
/// Returns an error if reading an input file or writing output fails.
pub fn run_with_args_to<W: std::io::Write>(args: Vec<String>, writer: &mut W) -> Result<i32> {
    let mut program_args = vec!["flagsynth".to_owned()];
    program_args.extend(args);
    let cli_var = match Cli::try_parse_from(program_args) {
        Ok(c) => c,
        Err(e) => match e.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                write!(writer, "{e}")?;
                writer.flush()?;
                return Ok(0);
            }
            _ => {
                eprint!("{e}");
                return Ok(1);
            }
        },
    };

    init_logging(cli_var.verbose);
    debug!(command = ?cli_var.command, "flagsynth v{}", env!("CARGO_PKG_VERSION"));

    let produced = match cli_var.command {
        Commands::Next {
            values,
            domain,
            policy,
            output,
        } => {
            let config = Config::load().flagsynth;
            let Some(domain) = resolve_domain(domain, &config) else {
                return Ok(1);
            };
            crate::commands::run_next(
                &values,
                domain,
                resolve_policy(&policy, &config),
                output.json,
                resolve_hex(&output, &config),
                writer,
            )?
        }
        Commands::List {
            values,
            domain,
            output,
        } => {
            let config = Config::load().flagsynth;
            let Some(domain) = resolve_domain(domain, &config) else {
                return Ok(1);
            };
            crate::commands::run_list(
                &values,
                domain,
                output.json,
                resolve_hex(&output, &config),
                writer,
            )?
        }
        Commands::Member {
            file,
            policy,
            output,
        } => {
            let (decl, config) = load_declaration(&file)?;
            crate::commands::run_member(
                &decl,
                resolve_policy(&policy, &config),
                output.json,
                resolve_hex(&output, &config),
                writer,
            )?
        }
        Commands::Assign {
            file,
            policy,
            output,
        } => {
            let (decl, config) = load_declaration(&file)?;
            crate::commands::run_assign(
                &decl,
                resolve_policy(&policy, &config),
                output.json,
                resolve_hex(&output, &config),
                writer,
            )?
        }
    };

    writer.flush()?;
    Ok(i32::from(!produced))
}

fn load_declaration(file: &Path) -> Result<(EnumDeclaration, FlagSynthConfig)> {
    let decl = EnumDeclaration::load(file)
        .map_err(|err| anyhow::anyhow!("failed to read {}: {err}", file.display()))?;
    Ok((decl, Config::load_from_path(file).flagsynth))
}

fn resolve_policy(args: &PolicyArgs, config: &FlagSynthConfig) -> SelectionPolicy {
    args.policy.unwrap_or_else(|| config.policy_or_default())
}

fn resolve_hex(output: &OutputOptions, config: &FlagSynthConfig) -> bool {
    output.hex || config.hex.unwrap_or(false)
}

/// CLI flag first, then config. Reports an unsupported configured type and
/// returns `None`.
fn resolve_domain(cli: Option<IntegralDomain>, config: &FlagSynthConfig) -> Option<IntegralDomain> {
    if let Some(domain) = cli {
        return Some(domain);
    }
    match config.domain_or_default() {
        Ok(domain) => Some(domain),
        Err(err) => {
            eprintln!("Error: {err} (from config)");
            None
        }
    }
}
