//! Status command for showing where preferences live and what they hold.

use std::io::Write;

use anyhow::{Context, Result};
use dtx_core::Agenda;
use dtx_store::PreferencesStore;

use super::util::load_preferences;
use crate::Config;

pub fn run<W: Write>(
    writer: &mut W,
    store: &PreferencesStore,
    agenda: &Agenda,
    config: &Config,
) -> Result<()> {
    let prefs = load_preferences(store)?;
    let updated_at = store.updated_at().context("failed to read preferences timestamp")?;

    writeln!(writer, "Conference companion status")?;
    writeln!(writer, "Database: {}", config.database_path.display())?;
    if let Some(simulated) = &config.simulated_time {
        writeln!(writer, "Simulated time: {simulated}")?;
    }

    let priorities: Vec<&str> = prefs.priorities.iter().map(|c| c.as_str()).collect();
    if priorities.is_empty() {
        writeln!(writer, "Priorities: none")?;
    } else {
        writeln!(writer, "Priorities: {}", priorities.join(", "))?;
    }

    let known = agenda.resolve(&prefs.saved_sessions).len();
    writeln!(writer, "Saved sessions: {known}")?;
    let stale = prefs.saved_sessions.len().saturating_sub(known);
    if stale > 0 {
        writeln!(writer, "  ({stale} saved ID(s) are no longer on the agenda)")?;
    }

    match updated_at {
        Some(ts) => writeln!(writer, "Last updated: {}", ts.format("%Y-%m-%d %H:%M:%S UTC"))?,
        None => writeln!(writer, "Last updated: never")?,
    }

    Ok(())
}
