//! Conference companion CLI library.
//!
//! This crate provides the terminal front end: it reads the bundled agenda and
//! the stored preferences, calls into `dtx-core` and renders the results.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands, FilterArg};
pub use config::Config;
