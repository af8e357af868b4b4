//! Derived agenda views: filtered timelines, the personal agenda and the
//! end-of-day recap.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::agenda::Agenda;
use crate::conflict::check_conflict;
use crate::preferences::UserPreferences;
use crate::recommend::{PEAK_RELEVANCE, Recommendation, recommend};
use crate::session::{Category, Session, SessionType};
use crate::types::Day;

/// Quick filters for the day timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgendaFilter {
    #[default]
    All,
    /// Relevance 4 and up.
    AiHeavy,
    /// Infrastructure or data sessions.
    Technical,
    Panels,
}

impl AgendaFilter {
    pub fn matches(self, session: &Session) -> bool {
        match self {
            Self::All => true,
            Self::AiHeavy => session.relevance >= 4,
            Self::Technical => {
                session.has_category(Category::Infrastructure)
                    || session.has_category(Category::DataAnalytics)
            }
            Self::Panels => session.session_type == SessionType::Panel,
        }
    }

    /// The next-up spotlight is only shown on the unfiltered timeline.
    pub const fn shows_spotlight(self) -> bool {
        matches!(self, Self::All)
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::AiHeavy => "ai-heavy",
            Self::Technical => "technical",
            Self::Panels => "panels",
        }
    }
}

impl fmt::Display for AgendaFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgendaFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "ai-heavy" => Ok(Self::AiHeavy),
            "technical" => Ok(Self::Technical),
            "panels" => Ok(Self::Panels),
            _ => Err(format!("invalid agenda filter: {s}")),
        }
    }
}

/// A session as shown in a list, with everything derived from preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionCard<'a> {
    pub session: &'a Session,
    pub recommendation: Recommendation,
    pub saved: bool,
    /// A saved session this one clashes with. Only set for unsaved sessions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conflict: Option<&'a Session>,
}

impl<'a> SessionCard<'a> {
    pub fn new(session: &'a Session, prefs: &UserPreferences, saved: &[&'a Session]) -> Self {
        let is_saved = prefs.is_saved(&session.id);
        let conflict = if is_saved {
            None
        } else {
            check_conflict(session, saved.iter().copied())
        };
        Self {
            session,
            recommendation: recommend(session, prefs),
            saved: is_saved,
            conflict,
        }
    }
}

/// The sessions of `day` that pass `filter`, annotated, in agenda order.
pub fn timeline<'a>(
    agenda: &'a Agenda,
    day: Day,
    filter: AgendaFilter,
    prefs: &UserPreferences,
) -> Vec<SessionCard<'a>> {
    let saved = agenda.resolve(&prefs.saved_sessions);
    agenda
        .day(day)
        .filter(|s| filter.matches(s))
        .map(|s| SessionCard::new(s, prefs, &saved))
        .collect()
}

/// Saved sessions ordered by day, then start time.
pub fn personal_agenda<'a>(agenda: &'a Agenda, prefs: &UserPreferences) -> Vec<&'a Session> {
    let mut saved = agenda.resolve(&prefs.saved_sessions);
    saved.sort_by_key(|s| (s.day, s.start_time));
    saved
}

/// Peak-relevance sessions of a day, split by whether they were saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayRecap<'a> {
    pub day: Day,
    pub attended: Vec<&'a Session>,
    pub missed: Vec<&'a Session>,
}

pub fn day_recap<'a>(agenda: &'a Agenda, day: Day, prefs: &UserPreferences) -> DayRecap<'a> {
    let (attended, missed): (Vec<_>, Vec<_>) = agenda
        .day(day)
        .filter(|s| s.relevance == PEAK_RELEVANCE)
        .partition(|s| prefs.is_saved(&s.id));
    DayRecap {
        day,
        attended,
        missed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::fixtures::{SessionExt, session};
    use crate::types::SessionId;

    fn id(s: &str) -> SessionId {
        SessionId::new(s).unwrap()
    }

    fn agenda() -> Agenda {
        Agenda::new(vec![
            session("keynote", 1, "09:00", "10:00")
                .relevance(5)
                .categories(&[Category::AiStrategy]),
            session("infra", 1, "09:30", "10:30")
                .relevance(3)
                .categories(&[Category::Infrastructure]),
            session("panel", 1, "11:00", "12:00")
                .kind(SessionType::Panel)
                .relevance(4),
            session("data", 2, "09:00", "10:00")
                .relevance(5)
                .categories(&[Category::DataAnalytics]),
            session("early", 2, "08:00", "08:30"),
        ])
        .unwrap()
    }

    fn ids<'a>(sessions: impl IntoIterator<Item = &'a Session>) -> Vec<&'a str> {
        sessions.into_iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn filters_match_their_rules() {
        let agenda = agenda();
        let prefs = UserPreferences::default();
        let pick = |filter| {
            timeline(&agenda, Day::ONE, filter, &prefs)
                .into_iter()
                .map(|c| c.session.id.as_str())
                .collect::<Vec<_>>()
        };

        assert_eq!(pick(AgendaFilter::All), ["keynote", "infra", "panel"]);
        assert_eq!(pick(AgendaFilter::AiHeavy), ["keynote", "panel"]);
        assert_eq!(pick(AgendaFilter::Technical), ["infra"]);
        assert_eq!(pick(AgendaFilter::Panels), ["panel"]);
    }

    #[test]
    fn filter_parses_from_slug() {
        assert_eq!("ai-heavy".parse::<AgendaFilter>().unwrap(), AgendaFilter::AiHeavy);
        assert!("everything".parse::<AgendaFilter>().is_err());
        assert!(AgendaFilter::All.shows_spotlight());
        assert!(!AgendaFilter::Panels.shows_spotlight());
    }

    #[test]
    fn timeline_flags_conflicts_only_for_unsaved_sessions() {
        let agenda = agenda();
        let prefs = UserPreferences::default().toggle_saved(&id("keynote"));

        let cards = timeline(&agenda, Day::ONE, AgendaFilter::All, &prefs);
        let keynote = &cards[0];
        let infra = &cards[1];
        let panel = &cards[2];

        assert!(keynote.saved);
        assert_eq!(keynote.conflict, None);
        assert_eq!(keynote.recommendation, Recommendation::MustAttend);

        assert!(!infra.saved);
        assert_eq!(infra.conflict.map(|s| s.id.as_str()), Some("keynote"));

        assert_eq!(panel.conflict, None);
    }

    #[test]
    fn personal_agenda_sorts_by_day_then_start() {
        let agenda = agenda();
        let prefs = UserPreferences::default()
            .toggle_saved(&id("data"))
            .toggle_saved(&id("panel"))
            .toggle_saved(&id("early"))
            .toggle_saved(&id("keynote"));

        assert_eq!(
            ids(personal_agenda(&agenda, &prefs)),
            ["keynote", "panel", "early", "data"]
        );
    }

    #[test]
    fn recap_splits_peak_sessions_by_saved() {
        let agenda = agenda();
        let prefs = UserPreferences::default().toggle_saved(&id("keynote"));

        let recap = day_recap(&agenda, Day::ONE, &prefs);
        assert_eq!(ids(recap.attended), ["keynote"]);
        assert!(recap.missed.is_empty());

        let recap = day_recap(&agenda, Day::TWO, &prefs);
        assert!(recap.attended.is_empty());
        assert_eq!(ids(recap.missed), ["data"]);
    }
}
