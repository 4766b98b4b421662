use crate::domain::IntegralDomain;
use crate::policy::SelectionPolicy;
use crate::utils::parse_int_literal;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Help text for configuration file options, shown at the bottom of --help.
const CONFIG_HELP: &str = "\
CONFIGURATION FILE (.flagsynth.toml):
  Create this file in your project root to set defaults.

  [flagsynth]
  policy = \"use-all-available-values\"  # or \"start-from-highest-explicit-value\"
  domain = \"int\"                       # underlying type: sbyte, byte, short, ushort,
                                       # int, uint, long, ulong
  hex = false                          # print values as hex literals

ENUM FILES (member, assign):
  {\"name\": \"Access\", \"underlying_type\": \"byte\", \"is_flags\": true,
   \"members\": [{\"name\": \"None\", \"value\": 0}, {\"name\": \"Read\"}]}

LOGGING:
  Set FLAGSYNTH_LOG to a tracing filter (e.g. \"flagsynth=debug\"), or pass --verbose.
";

/// Policy selection shared by the subcommands.
#[derive(Args, Debug, Default, Clone)]
pub struct PolicyArgs {
    /// How to pick the new value (overrides config).
    #[arg(long, short = 'p', value_enum)]
    pub policy: Option<SelectionPolicy>,
}

/// Options for output formatting.
#[derive(Args, Debug, Default, Clone)]
pub struct OutputOptions {
    /// Output raw JSON.
    #[arg(long)]
    pub json: bool,

    /// Print values as hexadecimal literals (overrides config).
    #[arg(long)]
    pub hex: bool,
}

/// Command line interface configuration using `clap`.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "flagsynth - next power-of-two values for flags enumerations",
    long_about = None,
    after_help = CONFIG_HELP
)]
pub struct Cli {
    #[command(subcommand)]
    /// The subcommand to execute.
    pub command: Commands,

    /// Enable debug logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
/// Available subcommands.
pub enum Commands {
    /// Print the value for a new member, given the values already in use.
    #[command(allow_negative_numbers = true)]
    Next {
        /// Values of the existing members (decimal, 0x, 0b or 0o).
        #[arg(value_parser = parse_int_literal)]
        values: Vec<i128>,

        /// Underlying type of the enum (overrides config).
        #[arg(long, short = 't')]
        domain: Option<IntegralDomain>,

        /// Policy options.
        #[command(flatten)]
        policy: PolicyArgs,

        /// Output options.
        #[command(flatten)]
        output: OutputOptions,
    },
    /// List every power of two not used by the given values.
    #[command(allow_negative_numbers = true)]
    List {
        /// Values of the existing members (decimal, 0x, 0b or 0o).
        #[arg(value_parser = parse_int_literal)]
        values: Vec<i128>,

        /// Underlying type of the enum (overrides config).
        #[arg(long, short = 't')]
        domain: Option<IntegralDomain>,

        /// Output options.
        #[command(flatten)]
        output: OutputOptions,
    },
    /// Suggest a new member for the flags enum described in a JSON file.
    Member {
        /// Path to the enum declaration (JSON).
        file: PathBuf,

        /// Policy options.
        #[command(flatten)]
        policy: PolicyArgs,

        /// Output options.
        #[command(flatten)]
        output: OutputOptions,
    },
    /// Generate values for the members of a flags enum that have none.
    Assign {
        /// Path to the enum declaration (JSON).
        file: PathBuf,

        /// Policy options.
        #[command(flatten)]
        policy: PolicyArgs,

        /// Output options.
        #[command(flatten)]
        output: OutputOptions,
    },
}
