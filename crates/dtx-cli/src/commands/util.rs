//! Shared utilities for CLI commands.

use std::io::{self, Write};
use std::sync::LazyLock;

use anyhow::{Context, Result};
use chrono::Local;
use dtx_core::{
    ClockTime, Day, Recommendation, Session, SessionCard, UserPreferences, conference_moment,
    format_time_range,
};
use dtx_store::PreferencesStore;
use regex::Regex;

use crate::Config;

/// Strict `HH:mm` with a 24-hour clock.
static CLOCK_TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01]\d|2[0-3]):([0-5]\d)$").unwrap());

/// Parse a `HH:mm` argument.
pub fn parse_clock_time(s: &str) -> Result<ClockTime, String> {
    if !CLOCK_TIME_RE.is_match(s) {
        return Err(format!("invalid time: {s}. Use 24-hour HH:mm (e.g., 09:30)"));
    }
    s.parse().map_err(|e| format!("{e}"))
}

/// Pick the conference day and time to plan from.
///
/// Explicit flags win, then the configured `simulated_time`, then the wall
/// clock mapped onto the conference dates.
pub fn resolve_moment(
    day: Option<Day>,
    at: Option<ClockTime>,
    config: &Config,
) -> Result<(Day, ClockTime)> {
    let (clock_day, clock_time) = conference_moment(Local::now().naive_local());

    let simulated = config
        .simulated_time
        .as_deref()
        .map(parse_clock_time)
        .transpose()
        .map_err(anyhow::Error::msg)
        .context("invalid simulated_time in configuration")?;

    let moment = (
        day.unwrap_or(clock_day),
        at.or(simulated).unwrap_or(clock_time),
    );
    tracing::debug!(day = %moment.0, time = %moment.1, "resolved planning moment");
    Ok(moment)
}

/// Load stored preferences, falling back to the defaults.
pub fn load_preferences(store: &PreferencesStore) -> Result<UserPreferences> {
    store
        .load_or(UserPreferences::default())
        .context("failed to load preferences")
}

/// One star per relevance point.
pub fn stars(relevance: u8) -> String {
    "*".repeat(usize::from(relevance))
}

pub fn recommendation_label(rec: Recommendation) -> &'static str {
    match rec {
        Recommendation::MustAttend => "MUST ATTEND",
        Recommendation::Optional => "optional",
        Recommendation::Skip => "skip",
    }
}

/// `Title (id)`
pub fn title_with_id(session: &Session) -> String {
    format!("{} ({})", session.title, session.id)
}

/// Render a session card as a short block of lines.
pub fn write_card<W: Write>(writer: &mut W, card: &SessionCard<'_>) -> io::Result<()> {
    let session = card.session;

    write!(
        writer,
        "{}  {}  {}",
        format_time_range(session.start_time, session.end_time),
        session.venue,
        stars(session.relevance)
    )?;
    if session.co_located() {
        write!(writer, "  [co-located]")?;
    }
    writeln!(writer)?;

    writeln!(writer, "  {}", title_with_id(session))?;
    if !session.speakers.is_empty() {
        writeln!(writer, "  {}", session.speakers.join(" + "))?;
    }

    let categories: Vec<&str> = session.categories.iter().map(|c| c.as_str()).collect();
    write!(
        writer,
        "  {} | {}",
        categories.join(", "),
        recommendation_label(card.recommendation)
    )?;
    if card.saved {
        write!(writer, " | saved")?;
    }
    writeln!(writer)?;

    if let Some(conflict) = card.conflict {
        writeln!(
            writer,
            "  ! Conflicts with: {} ({})",
            conflict.title, conflict.start_time
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_clock_time_accepts_24_hour_times() {
        assert_eq!(parse_clock_time("00:00").unwrap().minutes(), 0);
        assert_eq!(parse_clock_time("09:30").unwrap().minutes(), 570);
        assert_eq!(parse_clock_time("23:59").unwrap().minutes(), 1439);
    }

    #[test]
    fn parse_clock_time_is_strict() {
        for bad in ["9:30", "24:00", "12:60", "noon", "09:30:00", ""] {
            assert!(parse_clock_time(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn flags_override_simulated_time() {
        let config = Config {
            database_path: "unused.db".into(),
            simulated_time: Some("08:00".to_string()),
        };

        let (day, time) = resolve_moment(Some(Day::TWO), None, &config).unwrap();
        assert_eq!(day, Day::TWO);
        assert_eq!(time.to_string(), "08:00");

        let at = parse_clock_time("14:15").unwrap();
        let (_, time) = resolve_moment(Some(Day::ONE), Some(at), &config).unwrap();
        assert_eq!(time, at);
    }

    #[test]
    fn invalid_simulated_time_is_reported() {
        let config = Config {
            database_path: "unused.db".into(),
            simulated_time: Some("late".to_string()),
        };
        let err = resolve_moment(None, None, &config).unwrap_err();
        assert!(err.to_string().contains("simulated_time"));
    }

    #[test]
    fn stars_match_relevance() {
        assert_eq!(stars(3), "***");
        assert_eq!(stars(0), "");
    }
}
