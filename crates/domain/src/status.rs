use crate::opening_hours::{weekday_name, Interval, TimeOfDay, WeeklySchedule};
use chrono::{Datelike, NaiveDateTime, Weekday};
use serde::{Serialize, Serializer};
use std::fmt;

/// How many days, today included, the forward search looks at
const LOOKAHEAD_DAYS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLabel {
    Open,
    Closed,
    ClosedToday,
}

impl fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::ClosedToday => "closed today",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayLabel {
    Today,
    Weekday(Weekday),
}

impl fmt::Display for DayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Today => f.write_str("today"),
            Self::Weekday(day) => f.write_str(weekday_name(*day)),
        }
    }
}

/// The next time the open/closed state flips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextChange {
    /// Closes later today
    ClosesAt(TimeOfDay),
    /// Opens later today, found without leaving today's intervals
    OpensAt(TimeOfDay),
    /// Found by the forward search
    OpensOn { day: DayLabel, at: TimeOfDay },
}

impl fmt::Display for NextChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClosesAt(at) => write!(f, "closes at {}", at),
            Self::OpensAt(at) => write!(f, "opens at {}", at),
            Self::OpensOn { day, at } => write!(f, "opens {} at {}", day, at),
        }
    }
}

/// Result of evaluating a `WeeklySchedule` at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenStatus {
    pub is_open: bool,
    pub label: StatusLabel,
    pub next_change: Option<NextChange>,
}

impl OpenStatus {
    pub fn next_change_description(&self) -> Option<String> {
        self.next_change.map(|change| change.to_string())
    }
}

impl Serialize for OpenStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("OpenStatus", 3)?;
        state.serialize_field("isOpen", &self.is_open)?;
        state.serialize_field("label", &self.label.to_string())?;
        state.serialize_field("nextChange", &self.next_change_description())?;
        state.end()
    }
}

/// Why the forward search was started. The two cases differ in how today
/// is treated and must stay distinct.
#[derive(Debug, Clone, Copy)]
enum ForwardSearch {
    /// Today has no intervals at all, the search starts tomorrow
    TodayClosed,
    /// Today had intervals but `now` is past all of them. Today is still
    /// looked at, keeping only intervals opening after `now`.
    TodayExhausted { now: TimeOfDay },
}

impl ForwardSearch {
    fn next_opening(self, schedule: &WeeklySchedule, today: Weekday) -> Option<NextChange> {
        let days = std::iter::successors(Some(today), |day| Some(day.succ()))
            .take(LOOKAHEAD_DAYS)
            .enumerate();

        for (offset, day) in days {
            let intervals = schedule.intervals_for(day);
            let first_open = match (offset, self) {
                (0, Self::TodayClosed) => None,
                (0, Self::TodayExhausted { now }) => intervals
                    .iter()
                    .find(|interval| interval.open > now)
                    .map(|interval| interval.open),
                _ => intervals.first().map(|interval| interval.open),
            };

            if let Some(at) = first_open {
                let day = if offset == 0 {
                    DayLabel::Today
                } else {
                    DayLabel::Weekday(day)
                };
                return Some(NextChange::OpensOn { day, at });
            }
        }

        None
    }
}

/// Computes whether the schedule is open at `now` (local wall-clock time)
/// and when that changes next.
///
/// Intervals are looked at in their stored order and are never sorted, so
/// an unsorted or overlapping day gives a best-effort answer. The boundary
/// minutes of an interval count as open. This function is total: any
/// schedule, however malformed, yields a status.
pub fn evaluate(schedule: &WeeklySchedule, now: &NaiveDateTime) -> OpenStatus {
    let today = now.weekday();
    let now_minutes = TimeOfDay::of(now);
    let intervals = schedule.intervals_for(today);

    if intervals.is_empty() {
        let next_change = if schedule.is_always_closed() {
            None
        } else {
            ForwardSearch::TodayClosed.next_opening(schedule, today)
        };
        return OpenStatus {
            is_open: false,
            label: StatusLabel::ClosedToday,
            next_change,
        };
    }

    // Any containing interval wins over an earlier-stored one that opens later
    if let Some(current) = intervals.iter().find(|i| i.contains(now_minutes)) {
        return OpenStatus {
            is_open: true,
            label: StatusLabel::Open,
            next_change: Some(NextChange::ClosesAt(current.close)),
        };
    }

    let next_change = match later_today(intervals, now_minutes) {
        Some(next) => Some(NextChange::OpensAt(next.open)),
        None => ForwardSearch::TodayExhausted { now: now_minutes }.next_opening(schedule, today),
    };

    OpenStatus {
        is_open: false,
        label: StatusLabel::Closed,
        next_change,
    }
}

fn later_today(intervals: &[Interval], now: TimeOfDay) -> Option<&Interval> {
    intervals.iter().find(|interval| interval.open > now)
}
