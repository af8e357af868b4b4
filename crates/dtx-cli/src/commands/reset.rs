//! Reset command: forget stored preferences.

use std::io::Write;

use anyhow::{Context, Result};
use dtx_store::PreferencesStore;

pub fn run<W: Write>(writer: &mut W, store: &PreferencesStore) -> Result<()> {
    let removed = store.clear().context("failed to clear preferences")?;
    if removed {
        writeln!(writer, "Preferences reset to defaults.")?;
    } else {
        writeln!(writer, "Nothing to reset; using defaults already.")?;
    }
    Ok(())
}
