//! Mapping wall-clock time onto the conference schedule.

use chrono::{NaiveDate, NaiveDateTime, Timelike};

use crate::time::ClockTime;
use crate::types::Day;

/// Calendar date of conference day 1.
pub const DAY_ONE_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2026, 2, 4) {
    Some(date) => date,
    None => panic!("invalid conference date"),
};

/// Calendar date of conference day 2.
pub const DAY_TWO_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2026, 2, 5) {
    Some(date) => date,
    None => panic!("invalid conference date"),
};

/// Conference day and time of day for a local wall-clock moment.
///
/// Any date other than day 2 maps to day 1, so the app stays usable as a
/// preview before and after the event.
pub fn conference_moment(now: NaiveDateTime) -> (Day, ClockTime) {
    let day = if now.date() == DAY_TWO_DATE {
        Day::TWO
    } else {
        Day::ONE
    };

    // `hour()` is 0-23 and `minute()` 0-59, so this cannot fail.
    let time = ClockTime::from_hm(
        u16::try_from(now.hour()).unwrap_or_default(),
        u16::try_from(now.minute()).unwrap_or_default(),
    )
    .unwrap_or(ClockTime::MIDNIGHT);

    (day, time)
}

/// Calendar date of a conference day.
pub const fn date_of(day: Day) -> NaiveDate {
    match day.number() {
        2 => DAY_TWO_DATE,
        _ => DAY_ONE_DATE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(date: NaiveDate, h: u32, m: u32) -> NaiveDateTime {
        date.and_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn day_two_date_maps_to_day_two() {
        let (day, time) = conference_moment(at(DAY_TWO_DATE, 13, 5));
        assert_eq!(day, Day::TWO);
        assert_eq!(time.to_string(), "13:05");
    }

    #[test]
    fn day_one_and_other_dates_map_to_day_one() {
        assert_eq!(conference_moment(at(DAY_ONE_DATE, 9, 0)).0, Day::ONE);

        let other = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let (day, time) = conference_moment(at(other, 23, 59));
        assert_eq!(day, Day::ONE);
        assert_eq!(time.minutes(), 23 * 60 + 59);
    }

    #[test]
    fn date_of_matches_conference_dates() {
        assert_eq!(date_of(Day::ONE).to_string(), "2026-02-04");
        assert_eq!(date_of(Day::TWO).to_string(), "2026-02-05");
    }
}
