//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use dtx_core::{AgendaFilter, Category, ClockTime, Day, SessionId};

use crate::commands::util::parse_clock_time;

/// Conference companion for DTX London.
///
/// Browse the two-day agenda, build a personal schedule, spot clashes and get
/// recommendations based on the topics you care about.
#[derive(Debug, Parser)]
#[command(name = "dtx", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a day's sessions with recommendations and clashes.
    Timeline {
        /// Conference day (1 or 2). Defaults to today's conference day.
        #[arg(short, long)]
        day: Option<Day>,

        /// Only show sessions matching a quick filter.
        #[arg(short, long, value_enum, default_value_t = FilterArg::All)]
        filter: FilterArg,

        /// Time to plan from (HH:mm). Defaults to the configured or current time.
        #[arg(long, value_parser = parse_clock_time)]
        at: Option<ClockTime>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show the single best session coming up.
    Next {
        /// Conference day (1 or 2). Defaults to today's conference day.
        #[arg(short, long)]
        day: Option<Day>,

        /// Time to plan from (HH:mm). Defaults to the configured or current time.
        #[arg(long, value_parser = parse_clock_time)]
        at: Option<ClockTime>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List the sessions on your personal agenda.
    Agenda {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Summarize attended and missed must-see sessions for a day.
    Recap {
        /// Conference day (1 or 2). Defaults to today's conference day.
        #[arg(short, long)]
        day: Option<Day>,
    },

    /// Add a session to your agenda, or remove it if already saved.
    Save {
        /// Session ID as shown by `dtx timeline`.
        session: SessionId,
    },

    /// Toggle a priority category (e.g. ai-strategy, agentic-ai).
    Priority {
        /// Category slug or name.
        category: Category,
    },

    /// List priority categories and which are selected.
    Priorities,

    /// Show where preferences are stored and a short summary.
    Status,

    /// Delete stored preferences and start over with the defaults.
    Reset,
}

/// Quick filters for the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilterArg {
    All,
    AiHeavy,
    Technical,
    Panels,
}

impl From<FilterArg> for AgendaFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => Self::All,
            FilterArg::AiHeavy => Self::AiHeavy,
            FilterArg::Technical => Self::Technical,
            FilterArg::Panels => Self::Panels,
        }
    }
}
