//! Core library for flagsynth.
//!
//! Computes the value for a new member of a flags enumeration: the next
//! power of two not yet used, or double the highest one, within one of the
//! eight fixed-width integer domains an enum can be backed by.
//!
//! ```
//! use flagsynth::{try_get_new_value, IntegralDomain, SelectionPolicy};
//!
//! let value = try_get_new_value(&[1, 2, 4], IntegralDomain::Int32, SelectionPolicy::UseAllAvailableValues);
//! assert_eq!(value.map(|flag| flag.value), Some(8));
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

/// Module defining the integral domains and their fixed-width arithmetic.
pub mod domain;

/// Module defining the failure kinds of synthesis.
pub mod error;

/// Module defining the value selection policies.
pub mod policy;

/// Module containing the synthesis algorithm.
pub mod synthesizer;

/// Module defining the synthesized value type.
pub mod value;

/// Module modelling enum declarations and the injected constant lookup.
pub mod members;

/// Module containing the refactorings built on the synthesizer.
pub mod refactor;

/// Module for loading configuration.
pub mod config;

/// Module containing shared constants.
pub mod constants;

/// Module containing utility functions.
pub mod utils;

/// Module for CLI output formatting.
pub mod output;

/// Module defining the command-line interface arguments and structs.
pub mod cli;

/// Module for handling CLI commands and their execution logic.
pub mod commands;

/// Module defining the entry point logic shared by the binaries.
pub mod entry_point;

pub use domain::{FlagBits, IntegralDomain};
pub use error::SynthesisError;
pub use policy::SelectionPolicy;
pub use synthesizer::{available_values, try_get_new_value, FlagsValueSynthesizer};
pub use value::FlagValue;
