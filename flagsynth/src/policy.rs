use serde::{Deserialize, Serialize};
use std::fmt;

/// How the next flag value is chosen.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionPolicy {
    /// Offer the smallest positive power of two not already used, filling
    /// gaps left between explicit values.
    #[default]
    #[value(alias = "all")]
    UseAllAvailableValues,
    /// Offer double the highest power-of-two explicit value.
    #[value(alias = "highest")]
    StartFromHighestExplicitValue,
}

impl fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UseAllAvailableValues => f.write_str("use-all-available-values"),
            Self::StartFromHighestExplicitValue => {
                f.write_str("start-from-highest-explicit-value")
            }
        }
    }
}
