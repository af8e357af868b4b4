//! Timeline command: a day's sessions with the next-up spotlight.

use std::io::Write;

use anyhow::Result;
use dtx_core::{
    Agenda, AgendaFilter, ClockTime, Day, Session, SessionCard, UserPreferences, clock,
    find_what_next, timeline,
};
use serde::Serialize;

use super::util::write_card;

/// Timeline output for `--json`.
#[derive(Serialize)]
struct TimelineOutput<'a> {
    day: Day,
    date: String,
    filter: AgendaFilter,
    at: ClockTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    spotlight: Option<&'a Session>,
    sessions: Vec<SessionCard<'a>>,
}

pub fn run<W: Write>(
    writer: &mut W,
    agenda: &Agenda,
    prefs: &UserPreferences,
    day: Day,
    filter: AgendaFilter,
    at: ClockTime,
    json: bool,
) -> Result<()> {
    let spotlight = if filter.shows_spotlight() {
        find_what_next(agenda.sessions(), day, at, prefs)
    } else {
        None
    };
    let cards = timeline(agenda, day, filter, prefs);

    if json {
        let output = TimelineOutput {
            day,
            date: clock::date_of(day).to_string(),
            filter,
            at,
            spotlight,
            sessions: cards,
        };
        writeln!(writer, "{}", serde_json::to_string_pretty(&output)?)?;
        return Ok(());
    }

    writeln!(
        writer,
        "Day {day} ({}) | filter: {filter}",
        clock::date_of(day).format("%a %-d %b")
    )?;

    if let Some(next) = spotlight {
        let action = if prefs.is_saved(&next.id) {
            "saved"
        } else {
            "not saved"
        };
        writeln!(writer)?;
        writeln!(writer, "Smart recommendation (from {at}):")?;
        writeln!(
            writer,
            "  {} {} | {} [{action}]",
            next.start_time, next.title, next.venue
        )?;
    }

    if cards.is_empty() {
        writeln!(writer)?;
        writeln!(writer, "No sessions match this filter.")?;
        return Ok(());
    }

    for card in &cards {
        writeln!(writer)?;
        write_card(writer, card)?;
    }

    Ok(())
}
