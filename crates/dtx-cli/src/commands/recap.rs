//! Recap command: which must-see sessions of a day made it onto the agenda.

use std::io::Write;

use anyhow::Result;
use dtx_core::{Agenda, Day, UserPreferences, day_recap};

pub fn run<W: Write>(writer: &mut W, agenda: &Agenda, prefs: &UserPreferences, day: Day) -> Result<()> {
    let recap = day_recap(agenda, day, prefs);

    writeln!(writer, "Day {day} recap")?;

    writeln!(writer)?;
    writeln!(writer, "Completed must-attends:")?;
    if recap.attended.is_empty() {
        writeln!(writer, "  No high-value sessions saved for this day.")?;
    }
    for session in &recap.attended {
        writeln!(writer, "  + {}", session.title)?;
    }

    writeln!(writer)?;
    writeln!(writer, "Missed high-value opportunities:")?;
    if recap.missed.is_empty() {
        writeln!(writer, "  You hit all the key sessions. Great job!")?;
    }
    for session in &recap.missed {
        writeln!(writer, "  - {} ({})", session.title, session.id)?;
    }

    if let Some(next_day) = day.next() {
        writeln!(writer)?;
        writeln!(writer, "Ready for day {next_day}? Run 'dtx timeline --day {next_day}'.")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use dtx_core::SessionId;
    use insta::assert_snapshot;

    fn render(prefs: &UserPreferences, day: Day) -> String {
        let agenda = Agenda::bundled().unwrap();
        let mut output = Vec::new();
        run(&mut output, &agenda, prefs, day).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn day_one_recap_splits_saved_and_missed() {
        let prefs = UserPreferences::default()
            .toggle_saved(&SessionId::new("d1-keynote").unwrap())
            .toggle_saved(&SessionId::new("d1-agent-governance").unwrap());

        assert_snapshot!(render(&prefs, Day::ONE), @r"
        Day 1 recap

        Completed must-attends:
          + Opening Keynote: The AI-First Enterprise
          + Governing Autonomous Agents

        Missed high-value opportunities:
          - Agents in Production: Lessons from the First Year (d1-agents-production)
          - Closing Keynote: Leading Through the Agentic Shift (d1-closing-keynote)

        Ready for day 2? Run 'dtx timeline --day 2'.
        ");
    }

    #[test]
    fn day_two_recap_with_nothing_saved() {
        assert_snapshot!(render(&UserPreferences::default(), Day::TWO), @r"
        Day 2 recap

        Completed must-attends:
          No high-value sessions saved for this day.

        Missed high-value opportunities:
          - Day Two Keynote: From Pilots to Platforms (d2-keynote)
          - Data Mesh, Two Years On (d2-data-mesh)
          - Securing Agentic Systems (d2-agent-security)
        ");
    }
}
