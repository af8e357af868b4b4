//! The static conference agenda.
//!
//! The agenda is authored ahead of time and compiled into the binary. It is
//! loaded once at startup and is read-only afterwards, so it can be shared
//! freely between readers.

use std::collections::HashSet;

use thiserror::Error;

use crate::session::Session;
use crate::types::{Day, SessionId};

/// Authored agenda for DTX London, 4-5 February 2026.
const BUNDLED_AGENDA: &str = include_str!("../data/agenda.json");

/// Agenda loading errors.
#[derive(Debug, Error)]
pub enum AgendaError {
    /// The agenda data is not valid JSON or does not match the session shape.
    #[error("failed to parse agenda: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two sessions share an ID.
    #[error("duplicate session ID: {id}")]
    DuplicateId { id: SessionId },

    /// A session does not end after it starts.
    #[error("session {id} ends before it starts")]
    EmptySlot { id: SessionId },

    /// Relevance outside 1-5.
    #[error("session {id} has relevance {value}, expected 1-5")]
    RelevanceOutOfRange { id: SessionId, value: u8 },
}

/// An ordered, validated list of sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Agenda {
    sessions: Vec<Session>,
}

impl Agenda {
    /// Validates and wraps authored sessions, keeping their order.
    pub fn new(sessions: Vec<Session>) -> Result<Self, AgendaError> {
        let mut seen = HashSet::new();
        for session in &sessions {
            if !seen.insert(&session.id) {
                return Err(AgendaError::DuplicateId {
                    id: session.id.clone(),
                });
            }
            if session.start_time >= session.end_time {
                return Err(AgendaError::EmptySlot {
                    id: session.id.clone(),
                });
            }
            if !(1..=5).contains(&session.relevance) {
                return Err(AgendaError::RelevanceOutOfRange {
                    id: session.id.clone(),
                    value: session.relevance,
                });
            }
        }
        Ok(Self { sessions })
    }

    /// Parses an agenda from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, AgendaError> {
        let sessions: Vec<Session> = serde_json::from_str(json)?;
        Self::new(sessions)
    }

    /// The agenda compiled into this build.
    pub fn bundled() -> Result<Self, AgendaError> {
        let agenda = Self::from_json(BUNDLED_AGENDA)?;
        tracing::debug!(sessions = agenda.sessions.len(), "loaded bundled agenda");
        Ok(agenda)
    }

    /// All sessions, in authored order.
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    /// Looks up a session by ID.
    pub fn get(&self, id: &SessionId) -> Option<&Session> {
        self.sessions.iter().find(|s| &s.id == id)
    }

    /// Sessions of one day, in authored order.
    pub fn day(&self, day: Day) -> impl Iterator<Item = &Session> {
        self.sessions.iter().filter(move |s| s.day == day)
    }

    /// The sessions behind a list of IDs, in agenda order.
    ///
    /// IDs that are not on the agenda are skipped.
    pub fn resolve(&self, ids: &[SessionId]) -> Vec<&Session> {
        self.sessions.iter().filter(|s| ids.contains(&s.id)).collect()
    }
}
