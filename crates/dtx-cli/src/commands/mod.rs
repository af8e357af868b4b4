//! CLI subcommand implementations.

pub mod agenda;
pub mod next;
pub mod priority;
pub mod recap;
pub mod reset;
pub mod save;
pub mod status;
pub mod timeline;
pub mod util;
