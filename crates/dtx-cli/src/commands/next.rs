//! Next command: the single best upcoming session.

use std::io::Write;

use anyhow::Result;
use dtx_core::{
    Agenda, ClockTime, Day, Recommendation, Session, UserPreferences, find_what_next,
    format_time_range, recommend,
};
use serde::Serialize;

use super::util::{recommendation_label, title_with_id};

#[derive(Serialize)]
struct NextOutput<'a> {
    day: Day,
    at: ClockTime,
    next: Option<NextSession<'a>>,
}

#[derive(Serialize)]
struct NextSession<'a> {
    session: &'a Session,
    recommendation: Recommendation,
    saved: bool,
}

pub fn run<W: Write>(
    writer: &mut W,
    agenda: &Agenda,
    prefs: &UserPreferences,
    day: Day,
    at: ClockTime,
    json: bool,
) -> Result<()> {
    let next = find_what_next(agenda.sessions(), day, at, prefs).map(|session| NextSession {
        session,
        recommendation: recommend(session, prefs),
        saved: prefs.is_saved(&session.id),
    });

    if json {
        let output = NextOutput { day, at, next };
        writeln!(writer, "{}", serde_json::to_string_pretty(&output)?)?;
        return Ok(());
    }

    let Some(next) = next else {
        writeln!(writer, "Nothing left on day {day} after {at}.")?;
        return Ok(());
    };

    let session = next.session;
    writeln!(writer, "Next up on day {day} (from {at}):")?;
    writeln!(writer, "  {}", title_with_id(session))?;
    writeln!(
        writer,
        "  {} | {} | {}",
        format_time_range(session.start_time, session.end_time),
        session.venue,
        recommendation_label(next.recommendation)
    )?;
    if !next.saved {
        writeln!(writer, "  Add it with: dtx save {}", session.id)?;
    }

    Ok(())
}
