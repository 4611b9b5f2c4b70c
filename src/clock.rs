//! Overworld time: month -> season, (season, hour) -> time of day.
//!
//! Day/night gating in the rule engine goes through this module on every
//! call; the classification is never cached, so a sequence that straddles
//! the day/night boundary sees the change immediately.

use chrono::{Datelike, Local, Timelike};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    Morning,
    Day,
    Evening,
    Night,
}

/// A wall-clock reading reduced to what evolution rules care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    /// 1-12
    pub month: u8,
    /// 0-23
    pub hour: u8,
}

/// Source of the current time. The engine queries this on every evaluation.
pub trait Clock {
    fn now(&self) -> ClockTime;
}

/// Real wall clock, for the running game.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> ClockTime {
        let now = Local::now();
        ClockTime {
            month: now.month() as u8,
            hour: now.hour() as u8,
        }
    }
}

/// Fixed clock for tests and scripted scenarios.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub ClockTime);

impl Clock for FixedClock {
    fn now(&self) -> ClockTime {
        self.0
    }
}

/// Seasons cycle through the months: January is Spring, February Summer,
/// March Autumn, April Winter, then the cycle repeats.
pub fn season_of_month(month: u8) -> Season {
    match month.saturating_sub(1) % 4 {
        0 => Season::Spring,
        1 => Season::Summer,
        2 => Season::Autumn,
        _ => Season::Winter,
    }
}

/// Classify an hour of the day within a season. Daylight runs longer in
/// summer and shorter in winter.
pub fn time_of_day(season: Season, hour: u8) -> TimeOfDay {
    let (morning, day, evening) = match season {
        // (first morning hour, first full-day hour, first evening hour);
        // night is everything from evening+length to morning.
        Season::Spring => (5, 10, 17),
        Season::Summer => (4, 9, 19),
        Season::Autumn => (6, 10, 18),
        Season::Winter => (7, 11, 17),
    };
    let night = evening + 3;
    if hour >= morning && hour < day {
        TimeOfDay::Morning
    } else if hour >= day && hour < evening {
        TimeOfDay::Day
    } else if hour >= evening && hour < night {
        TimeOfDay::Evening
    } else {
        TimeOfDay::Night
    }
}

/// Whether a clock reading falls at night. This is the only classification
/// the evolution rules distinguish: every day-gated predicate is "not
/// night", so exactly one of the day/night pair holds for any timestamp.
pub fn is_night(time: ClockTime) -> bool {
    let season = season_of_month(time.month);
    time_of_day(season, time.hour) == TimeOfDay::Night
}
