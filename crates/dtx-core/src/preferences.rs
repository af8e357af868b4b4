//! The user's preference record.
//!
//! `UserPreferences` is an immutable value: every toggle returns a new record
//! and leaves the receiver untouched, so the whole record can be persisted on
//! each change without any diffing.

use std::collections::HashSet;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::session::{Category, Session};
use crate::types::SessionId;

/// Priorities and personal agenda for one device.
///
/// Serialized as `{ priorities, savedSessions, completedSessions }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    /// Categories the user cares about.
    #[serde(default)]
    pub priorities: Vec<Category>,
    /// Sessions on the personal agenda.
    #[serde(default)]
    pub saved_sessions: Vec<SessionId>,
    /// Sessions marked as attended. Nothing reads this yet.
    #[serde(default)]
    pub completed_sessions: Vec<SessionId>,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            priorities: vec![Category::AiStrategy, Category::AgenticAi],
            saved_sessions: Vec::new(),
            completed_sessions: Vec::new(),
        }
    }
}

/// Flip membership of `item`: drop it if present, append it otherwise.
fn toggled<T: Clone + PartialEq>(items: &[T], item: &T) -> Vec<T> {
    if items.contains(item) {
        items.iter().filter(|i| *i != item).cloned().collect()
    } else {
        let mut out = items.to_vec();
        out.push(item.clone());
        out
    }
}

fn same_members<T: Eq + Hash>(a: &[T], b: &[T]) -> bool {
    a.iter().collect::<HashSet<_>>() == b.iter().collect::<HashSet<_>>()
}

impl UserPreferences {
    /// Returns a copy with `category` added to or removed from the priorities.
    #[must_use]
    pub fn toggle_priority(&self, category: Category) -> Self {
        Self {
            priorities: toggled(&self.priorities, &category),
            ..self.clone()
        }
    }

    /// Returns a copy with `id` added to or removed from the personal agenda.
    #[must_use]
    pub fn toggle_saved(&self, id: &SessionId) -> Self {
        Self {
            saved_sessions: toggled(&self.saved_sessions, id),
            ..self.clone()
        }
    }

    pub fn has_priority(&self, category: Category) -> bool {
        self.priorities.contains(&category)
    }

    pub fn is_saved(&self, id: &SessionId) -> bool {
        self.saved_sessions.contains(id)
    }

    /// True when the session carries at least one priority category.
    pub fn shares_priority(&self, session: &Session) -> bool {
        session.categories.iter().any(|c| self.has_priority(*c))
    }
}

/// Records are equal when each field holds the same set of members.
impl PartialEq for UserPreferences {
    fn eq(&self, other: &Self) -> bool {
        same_members(&self.priorities, &other.priorities)
            && same_members(&self.saved_sessions, &other.saved_sessions)
            && same_members(&self.completed_sessions, &other.completed_sessions)
    }
}

impl Eq for UserPreferences {}
