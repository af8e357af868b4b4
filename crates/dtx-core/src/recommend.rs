//! Priority-weighted recommendations and the "what's next" spotlight.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::preferences::UserPreferences;
use crate::session::{Session, SessionType};
use crate::time::ClockTime;
use crate::types::Day;

/// Relevance at which a priority match becomes must-attend.
pub const PEAK_RELEVANCE: u8 = 5;

/// Relevance at which a session is worth a look without a priority match.
pub const HIGH_RELEVANCE: u8 = 4;

/// Recommendation tier for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Recommendation {
    MustAttend,
    Optional,
    Skip,
}

impl Recommendation {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MustAttend => "must-attend",
            Self::Optional => "optional",
            Self::Skip => "skip",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a session against the user's priorities.
///
/// Precedence:
/// 1. Breaks are always optional.
/// 2. A priority match at peak relevance is must-attend.
/// 3. A priority match, or high relevance on its own, is optional.
/// 4. Everything else is skip.
///
/// Relevance alone never reaches must-attend.
pub fn recommend(session: &Session, prefs: &UserPreferences) -> Recommendation {
    match session.session_type {
        SessionType::Break => return Recommendation::Optional,
        SessionType::Talk | SessionType::Panel | SessionType::Expo => {}
    }

    let priority_match = prefs.shares_priority(session);

    if priority_match && session.relevance == PEAK_RELEVANCE {
        Recommendation::MustAttend
    } else if priority_match || session.relevance >= HIGH_RELEVANCE {
        Recommendation::Optional
    } else {
        Recommendation::Skip
    }
}

/// Pick the single best upcoming session on `day`.
///
/// Sessions starting at or after `now` are ordered by start time (ties keep
/// agenda order). The first must-attend among them wins; otherwise the earliest
/// upcoming session is returned. `None` when nothing is left that day.
pub fn find_what_next<'a>(
    agenda: &'a [Session],
    day: Day,
    now: ClockTime,
    prefs: &UserPreferences,
) -> Option<&'a Session> {
    let mut upcoming: Vec<&Session> = agenda
        .iter()
        .filter(|s| s.day == day && s.start_time >= now)
        .collect();
    // `sort_by_key` is stable.
    upcoming.sort_by_key(|s| s.start_time);

    let pick = upcoming
        .iter()
        .find(|s| recommend(s, prefs) == Recommendation::MustAttend)
        .or_else(|| upcoming.first())
        .copied();

    if let Some(session) = pick {
        tracing::debug!(id = %session.id, %day, %now, "selected next session");
    }
    pick
}
