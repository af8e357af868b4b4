//! Save command: toggle a session on the personal agenda.

use std::io::Write;

use anyhow::{Context, Result, bail};
use dtx_core::{Agenda, SessionId, check_conflict, format_time_range};
use dtx_store::PreferencesStore;

use super::util::{load_preferences, title_with_id};

/// Runs the save command.
///
/// Saving a session that clashes with one already on the agenda still saves
/// it; the clash is reported so the user can choose.
pub fn run<W: Write>(
    writer: &mut W,
    store: &PreferencesStore,
    agenda: &Agenda,
    id: &SessionId,
) -> Result<()> {
    let Some(session) = agenda.get(id) else {
        bail!("Session '{id}' not found.\n\nHint: Use 'dtx timeline' to see session IDs.");
    };

    let prefs = load_preferences(store)?;
    let updated = prefs.toggle_saved(id);
    store.save(&updated).context("failed to save preferences")?;

    if !updated.is_saved(id) {
        writeln!(writer, "Removed {} from your agenda.", title_with_id(session))?;
        return Ok(());
    }

    writeln!(writer, "Saved {} to your agenda.", title_with_id(session))?;
    let saved_before = agenda.resolve(&prefs.saved_sessions);
    if let Some(clash) = check_conflict(session, saved_before) {
        writeln!(
            writer,
            "Warning: conflicts with {} ({}, {})",
            clash.title,
            clash.id,
            format_time_range(clash.start_time, clash.end_time)
        )?;
    }

    Ok(())
}
