//! Agenda command: the personal schedule in day and time order.

use std::io::Write;

use anyhow::Result;
use dtx_core::{Agenda, UserPreferences, find_conflicts, format_time_range, personal_agenda};

use super::util::title_with_id;

pub fn run<W: Write>(
    writer: &mut W,
    agenda: &Agenda,
    prefs: &UserPreferences,
    json: bool,
) -> Result<()> {
    let saved = personal_agenda(agenda, prefs);

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&saved)?)?;
        return Ok(());
    }

    if saved.is_empty() {
        writeln!(writer, "You haven't saved any sessions yet.")?;
        writeln!(writer, "Run 'dtx timeline' to explore the agenda.")?;
        return Ok(());
    }

    writeln!(writer, "Your agenda")?;
    let mut current_day = None;
    for session in &saved {
        if current_day != Some(session.day) {
            current_day = Some(session.day);
            writeln!(writer)?;
            writeln!(writer, "Day {}", session.day)?;
        }
        writeln!(
            writer,
            "  {}  {} | {}",
            format_time_range(session.start_time, session.end_time),
            title_with_id(session),
            session.venue
        )?;
        for clash in find_conflicts(session, saved.iter().copied()) {
            writeln!(writer, "    ! Overlaps with {}", title_with_id(clash))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use dtx_core::SessionId;
    use insta::assert_snapshot;

    fn render(prefs: &UserPreferences, json: bool) -> String {
        let agenda = Agenda::bundled().unwrap();
        let mut output = Vec::new();
        run(&mut output, &agenda, prefs, json).unwrap();
        String::from_utf8(output).unwrap()
    }

    fn saving(ids: &[&str]) -> UserPreferences {
        ids.iter().fold(UserPreferences::default(), |prefs, id| {
            prefs.toggle_saved(&SessionId::new(*id).unwrap())
        })
    }

    #[test]
    fn empty_agenda_points_to_timeline() {
        let output = render(&UserPreferences::default(), false);
        assert!(output.starts_with("You haven't saved any sessions yet."));
    }

    #[test]
    fn lists_saved_sessions_by_day_and_time() {
        let prefs = saving(&["d2-keynote", "d1-cio-panel", "d1-keynote", "d1-platform-eng"]);
        let output = render(&prefs, false);

        assert_snapshot!(output, @r"
        Your agenda

        Day 1
          09:15 – 10:00  Opening Keynote: The AI-First Enterprise (d1-keynote) | Main Stage
          11:15 – 12:00  CIO Panel: Funding Transformation in 2026 (d1-cio-panel) | Main Stage
            ! Overlaps with Platform Engineering for GenAI Workloads (d1-platform-eng)
          11:15 – 11:55  Platform Engineering for GenAI Workloads (d1-platform-eng) | AI Theatre
            ! Overlaps with CIO Panel: Funding Transformation in 2026 (d1-cio-panel)

        Day 2
          09:15 – 10:00  Day Two Keynote: From Pilots to Platforms (d2-keynote) | Main Stage
        ");
    }

    #[test]
    fn json_lists_sessions_in_order() {
        let prefs = saving(&["d2-keynote", "d1-keynote"]);
        let output = render(&prefs, true);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value[0]["id"], "d1-keynote");
        assert_eq!(value[1]["id"], "d2-keynote");
    }
}
