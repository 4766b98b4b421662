/// Project configuration file, looked up from the working path upwards.
pub const CONFIG_FILENAME: &str = ".flagsynth.toml";

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV_VAR: &str = "FLAGSYNTH_LOG";

/// Filter used by `--verbose` when no directive is set in the environment.
pub const VERBOSE_LOG_FILTER: &str = "flagsynth=debug";

/// Filter used otherwise.
pub const DEFAULT_LOG_FILTER: &str = "warn";
