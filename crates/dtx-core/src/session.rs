//! Agenda sessions and their tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::time::ClockTime;
use crate::types::{Day, SessionId, ValidationError};

/// Topical tag used both on sessions and in user priorities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "AI Strategy")]
    AiStrategy,
    #[serde(rename = "Agentic AI")]
    AgenticAi,
    #[serde(rename = "Data & Analytics")]
    DataAnalytics,
    #[serde(rename = "Change Management")]
    ChangeManagement,
    #[serde(rename = "Infrastructure")]
    Infrastructure,
    #[serde(rename = "Human-centric DTX")]
    HumanCentric,
    #[serde(rename = "Networking")]
    Networking,
    #[serde(rename = "General")]
    General,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Self; 8] = [
        Self::AiStrategy,
        Self::AgenticAi,
        Self::DataAnalytics,
        Self::ChangeManagement,
        Self::Infrastructure,
        Self::HumanCentric,
        Self::Networking,
        Self::General,
    ];

    /// Focus areas offered in the priority picker.
    pub const PICKABLE: [Self; 6] = [
        Self::AiStrategy,
        Self::AgenticAi,
        Self::DataAnalytics,
        Self::ChangeManagement,
        Self::Infrastructure,
        Self::HumanCentric,
    ];

    /// Display name, identical to the serialized form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AiStrategy => "AI Strategy",
            Self::AgenticAi => "Agentic AI",
            Self::DataAnalytics => "Data & Analytics",
            Self::ChangeManagement => "Change Management",
            Self::Infrastructure => "Infrastructure",
            Self::HumanCentric => "Human-centric DTX",
            Self::Networking => "Networking",
            Self::General => "General",
        }
    }

    /// Kebab-case slug accepted on the command line.
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::AiStrategy => "ai-strategy",
            Self::AgenticAi => "agentic-ai",
            Self::DataAnalytics => "data-analytics",
            Self::ChangeManagement => "change-management",
            Self::Infrastructure => "infrastructure",
            Self::HumanCentric => "human-centric",
            Self::Networking => "networking",
            Self::General => "general",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.slug().eq_ignore_ascii_case(needle) || c.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ValidationError::UnknownCategory {
                value: s.to_string(),
            })
    }
}

/// Kind of agenda slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionType {
    Talk,
    Panel,
    Break,
    Expo,
}

impl SessionType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Talk => "Talk",
            Self::Panel => "Panel",
            Self::Break => "Break",
            Self::Expo => "Expo",
        }
    }
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A slot on the conference agenda.
///
/// Sessions come from the static agenda and are never modified. Equality is
/// structural.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Unique across both days.
    pub id: SessionId,
    pub day: Day,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    pub title: String,
    pub venue: String,
    #[serde(default)]
    pub speakers: Vec<String>,
    /// Editorial importance, 1 (low) to 5 (critical).
    pub relevance: u8,
    pub categories: Vec<Category>,
    #[serde(rename = "type")]
    pub session_type: SessionType,
    /// Presentational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_co_located: Option<bool>,
}

impl Session {
    /// True when the session is tagged with `category`.
    pub fn has_category(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }

    /// True when this is a co-located event.
    pub fn co_located(&self) -> bool {
        self.is_co_located.unwrap_or(false)
    }
}
