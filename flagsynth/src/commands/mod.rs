//! Commands module - CLI subcommand implementations.
//!
//! Each command writes its report to the given writer and returns whether
//! a value could be produced, which the entry point maps to the exit code.

mod assign;
mod list;
mod member;
mod next;

pub use assign::run_assign;
pub use list::run_list;
pub use member::run_member;
pub use next::run_next;
