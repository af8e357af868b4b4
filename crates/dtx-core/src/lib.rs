//! Core domain logic for the DTX conference companion.
//!
//! This crate contains the data model and the rules that sit on top of it:
//! - Time codec: `HH:mm` times as comparable minutes since midnight
//! - Conflict detection: same-day overlap against the personal agenda
//! - Recommendations: must-attend / optional / skip from user priorities
//! - Next-up selection: the single session to spotlight
//!
//! Everything here is a pure function over already-loaded data.

pub mod agenda;
pub mod clock;
pub mod conflict;
pub mod preferences;
pub mod recommend;
pub mod session;
pub mod time;
pub mod types;
pub mod views;

pub use agenda::{Agenda, AgendaError};
pub use clock::conference_moment;
pub use conflict::{check_conflict, find_conflicts, overlaps};
pub use preferences::UserPreferences;
pub use recommend::{Recommendation, find_what_next, recommend};
pub use session::{Category, Session, SessionType};
pub use time::{ClockTime, format_time_range, parse_time};
pub use types::{Day, SessionId, ValidationError};
pub use views::{AgendaFilter, DayRecap, SessionCard, day_recap, personal_agenda, timeline};
