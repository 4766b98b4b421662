use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::constants::CONFIG_FILENAME;
use crate::domain::IntegralDomain;
use crate::error::SynthesisError;
use crate::policy::SelectionPolicy;

#[derive(Debug, Deserialize, Default, Clone)]
/// Top-level configuration struct.
pub struct Config {
    #[serde(default)]
    /// The `[flagsynth]` section.
    pub flagsynth: FlagSynthConfig,
    /// The path to the configuration file this was loaded from.
    /// `None` if using defaults or programmatic config.
    #[serde(skip)]
    pub config_file_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
/// Project defaults for the command-line front end.
pub struct FlagSynthConfig {
    /// Default selection policy.
    pub policy: Option<SelectionPolicy>,
    /// Default underlying type name, e.g. `"uint"`.
    pub domain: Option<String>,
    /// Print values as hexadecimal literals.
    pub hex: Option<bool>,
}

impl FlagSynthConfig {
    /// The configured policy, or the default one.
    #[must_use]
    pub fn policy_or_default(&self) -> SelectionPolicy {
        self.policy.unwrap_or_default()
    }

    /// The configured domain, or `int`.
    pub fn domain_or_default(&self) -> Result<IntegralDomain, SynthesisError> {
        self.domain
            .as_deref()
            .map_or(Ok(IntegralDomain::default()), str::parse)
    }
}

impl Config {
    /// Loads configuration from the current directory upwards.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from_path(Path::new("."))
    }

    /// Loads configuration starting from a specific path and traversing up.
    ///
    /// The first readable and valid `.flagsynth.toml` wins. Invalid files are
    /// reported and skipped.
    #[must_use]
    pub fn load_from_path(path: &Path) -> Self {
        let mut current = path.to_path_buf();
        if current.is_file() {
            current.pop();
        }

        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                match Self::read_file(&candidate) {
                    Ok(config) => {
                        debug!(path = %candidate.display(), "loaded configuration");
                        return config;
                    }
                    Err(err) => {
                        warn!(path = %candidate.display(), %err, "ignoring invalid configuration");
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        Config::default()
    }

    fn read_file(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut config = toml::from_str::<Config>(&content)?;
        config.config_file_path = Some(path.to_path_buf());
        Ok(config)
    }
}
