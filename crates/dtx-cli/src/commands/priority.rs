//! Priority commands: toggle and list the categories the user cares about.

use std::io::Write;

use anyhow::{Context, Result};
use dtx_core::{Category, UserPreferences};
use dtx_store::PreferencesStore;

use super::util::load_preferences;

/// Toggles one priority category and prints the resulting selection.
pub fn toggle<W: Write>(writer: &mut W, store: &PreferencesStore, category: Category) -> Result<()> {
    let prefs = load_preferences(store)?.toggle_priority(category);
    store.save(&prefs).context("failed to save preferences")?;

    if prefs.has_priority(category) {
        writeln!(writer, "Added priority: {category}")?;
    } else {
        writeln!(writer, "Removed priority: {category}")?;
    }
    writeln!(writer)?;
    write_priorities(writer, &prefs)?;
    Ok(())
}

/// Lists the priority picker.
pub fn list<W: Write>(writer: &mut W, store: &PreferencesStore) -> Result<()> {
    let prefs = load_preferences(store)?;
    write_priorities(writer, &prefs)?;
    Ok(())
}

fn write_priorities<W: Write>(writer: &mut W, prefs: &UserPreferences) -> Result<()> {
    writeln!(writer, "Your focus areas:")?;
    // Non-pickable categories only show up once selected.
    for category in Category::ALL {
        let selected = prefs.has_priority(category);
        if !selected && !Category::PICKABLE.contains(&category) {
            continue;
        }
        let mark = if selected { "x" } else { " " };
        writeln!(writer, "  [{mark}] {:<18} {}", category.slug(), category.as_str())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    #[test]
    fn list_shows_defaults_on_first_run() {
        let store = PreferencesStore::open_in_memory().unwrap();
        let mut output = Vec::new();
        list(&mut output, &store).unwrap();

        assert_snapshot!(String::from_utf8(output).unwrap(), @r"
        Your focus areas:
          [x] ai-strategy        AI Strategy
          [x] agentic-ai         Agentic AI
          [ ] data-analytics     Data & Analytics
          [ ] change-management  Change Management
          [ ] infrastructure     Infrastructure
          [ ] human-centric      Human-centric DTX
        ");
    }

    #[test]
    fn toggle_adds_and_removes() {
        let store = PreferencesStore::open_in_memory().unwrap();

        let mut output = Vec::new();
        toggle(&mut output, &store, Category::Networking).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.starts_with("Added priority: Networking\n"));
        assert!(output.contains("  [x] networking         Networking\n"));

        let mut output = Vec::new();
        toggle(&mut output, &store, Category::AiStrategy).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.starts_with("Removed priority: AI Strategy\n"));

        let prefs = store.load().unwrap().unwrap();
        assert_eq!(prefs.priorities, vec![Category::AgenticAi, Category::Networking]);
    }
}
