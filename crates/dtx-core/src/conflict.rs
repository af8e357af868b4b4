//! Schedule conflict detection.
//!
//! Session slots are half-open intervals `[start, end)` in minutes since
//! midnight. A session ending at 10:00 and another starting at 10:00 do not
//! conflict.

use crate::session::Session;

/// Interval intersection of two session slots, ignoring the day.
pub fn overlaps(a: &Session, b: &Session) -> bool {
    a.start_time < b.end_time && a.end_time > b.start_time
}

/// True when `saved` is a different session on the same day whose slot
/// intersects the candidate's.
fn clashes(candidate: &Session, saved: &Session) -> bool {
    saved.id != candidate.id && saved.day == candidate.day && overlaps(candidate, saved)
}

/// Find the first saved session that overlaps `candidate`.
///
/// Only saved sessions on the candidate's day are considered, and a session
/// never conflicts with itself. The first match in iteration order is reported.
pub fn check_conflict<'a, I>(candidate: &Session, saved: I) -> Option<&'a Session>
where
    I: IntoIterator<Item = &'a Session>,
{
    saved.into_iter().find(|s| clashes(candidate, s))
}

/// All saved sessions that overlap `candidate`, in iteration order.
pub fn find_conflicts<'a, I>(candidate: &Session, saved: I) -> Vec<&'a Session>
where
    I: IntoIterator<Item = &'a Session>,
{
    saved.into_iter().filter(|s| clashes(candidate, s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::fixtures::session;

    #[test]
    fn overlapping_session_is_reported() {
        let candidate = session("c", 1, "09:30", "10:30");
        let saved = [session("s", 1, "10:00", "11:00")];

        let conflict = check_conflict(&candidate, &saved).unwrap();
        assert_eq!(conflict.id.as_str(), "s");
    }

    #[test]
    fn touching_intervals_do_not_conflict() {
        let a = session("a", 1, "09:00", "10:00");
        let b = session("b", 1, "10:00", "11:00");

        assert!(check_conflict(&b, [&a]).is_none());
        assert!(check_conflict(&a, [&b]).is_none());
    }

    #[test]
    fn other_day_is_ignored() {
        let candidate = session("c", 1, "09:00", "10:00");
        let saved = [session("s", 2, "09:00", "10:00")];
        assert!(check_conflict(&candidate, &saved).is_none());
    }

    #[test]
    fn session_never_conflicts_with_itself() {
        let candidate = session("c", 1, "09:00", "10:00");
        let saved = [candidate.clone(), session("other", 1, "11:00", "12:00")];
        assert!(check_conflict(&candidate, &saved).is_none());
    }

    #[test]
    fn first_match_wins() {
        let candidate = session("c", 1, "09:00", "12:00");
        let saved = [
            session("x", 1, "13:00", "14:00"),
            session("y", 1, "11:00", "11:30"),
            session("z", 1, "09:15", "09:45"),
        ];

        assert_eq!(check_conflict(&candidate, &saved).unwrap().id.as_str(), "y");

        let all: Vec<&str> = find_conflicts(&candidate, &saved)
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(all, ["y", "z"]);
    }

    #[test]
    fn containment_conflicts_both_ways() {
        let outer = session("outer", 2, "09:00", "12:00");
        let inner = session("inner", 2, "10:00", "10:30");

        assert!(check_conflict(&outer, [&inner]).is_some());
        assert!(check_conflict(&inner, [&outer]).is_some());
    }

    #[test]
    fn overlap_predicate_is_symmetric() {
        let slots = [
            ("09:00", "10:00"),
            ("09:30", "10:30"),
            ("10:00", "11:00"),
            ("08:00", "12:00"),
            ("11:00", "11:15"),
        ];
        for (i, (s1, e1)) in slots.iter().enumerate() {
            for (j, (s2, e2)) in slots.iter().enumerate() {
                let a = session(&format!("a{i}"), 1, s1, e1);
                let b = session(&format!("b{j}"), 1, s2, e2);
                assert_eq!(overlaps(&a, &b), overlaps(&b, &a), "{s1}-{e1} vs {s2}-{e2}");
                assert_eq!(
                    check_conflict(&a, [&b]).is_some(),
                    check_conflict(&b, [&a]).is_some()
                );
            }
        }
    }
}
