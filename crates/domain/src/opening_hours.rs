use chrono::{Timelike, Weekday};
use itertools::Itertools;
use serde::{ser::SerializeMap, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Days of the week in display order
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Storage keys used by the pharmacy records, indexed from monday
const DAY_KEYS: [&str; 7] = ["lun", "mar", "mer", "jeu", "ven", "sam", "dim"];

pub fn day_key(day: Weekday) -> &'static str {
    DAY_KEYS[day.num_days_from_monday() as usize]
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Accepts the storage keys as well as anything `chrono` understands
/// as a weekday (`mon`, `Monday`, ...).
fn parse_day_key(key: &str) -> Option<Weekday> {
    let key = key.trim().to_lowercase();
    match DAY_KEYS.iter().position(|k| *k == key) {
        Some(index) => Some(WEEK[index]),
        None => key.parse::<Weekday>().ok(),
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InvalidTimeOfDayError {
    #[error("Time of day: `{0}` is not in the HH:mm format")]
    Malformed(String),
}

/// Wall-clock time of day with minute precision, stored as minutes since midnight
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub fn from_hm(hours: u32, minutes: u32) -> Option<Self> {
        if hours < 24 && minutes < 60 {
            Some(Self((hours * 60 + minutes) as u16))
        } else {
            None
        }
    }

    /// Truncates to the minute
    pub fn of<T: Timelike>(time: &T) -> Self {
        Self((time.hour() * 60 + time.minute()) as u16)
    }

    pub fn minutes(&self) -> u16 {
        self.0
    }
}

fn is_digits(part: &str) -> bool {
    !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit())
}

impl FromStr for TimeOfDay {
    type Err = InvalidTimeOfDayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || InvalidTimeOfDayError::Malformed(s.to_string());
        let mut parts = s.trim().split(':');

        let hours = parts
            .next()
            .filter(|h| h.len() <= 2 && is_digits(h))
            .ok_or_else(malformed)?;
        let minutes = parts
            .next()
            .filter(|m| m.len() == 2 && is_digits(m))
            .ok_or_else(malformed)?;
        // Database `time` columns come back as HH:mm:ss
        if let Some(seconds) = parts.next() {
            if seconds.len() != 2 || !is_digits(seconds) {
                return Err(malformed());
            }
        }
        if parts.next().is_some() {
            return Err(malformed());
        }

        let hours = hours.parse().map_err(|_| malformed())?;
        let minutes = minutes.parse().map_err(|_| malformed())?;
        Self::from_hm(hours, minutes).ok_or_else(malformed)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A contiguous opening range within one day, both ends inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub open: TimeOfDay,
    pub close: TimeOfDay,
}

impl Interval {
    pub fn new(open: TimeOfDay, close: TimeOfDay) -> Self {
        Self { open, close }
    }

    pub fn contains(&self, time: TimeOfDay) -> bool {
        self.open <= time && time <= self.close
    }

    fn from_raw(raw: &Value) -> Option<Self> {
        let fields = raw.as_object()?;
        Some(Self {
            open: time_field(fields, "open")?,
            close: time_field(fields, "close")?,
        })
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.open, self.close)
    }
}

fn time_field(fields: &Map<String, Value>, name: &str) -> Option<TimeOfDay> {
    fields.get(name)?.as_str()?.parse().ok()
}

/// Opening hours of a single weekday.
///
/// The shape of the stored record is resolved once, when the day is
/// normalized, and is only kept around so that legacy records can be told
/// apart. Consumers should go through [`DaySchedule::intervals`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DaySchedule {
    #[default]
    Closed,
    /// Legacy `{ "open": .., "close": .. }` record
    SingleInterval(Interval),
    IntervalList(Vec<Interval>),
}

impl DaySchedule {
    /// Normalizes a stored day record. Never fails: anything that is not a
    /// recognizable record is a closed day.
    pub fn from_raw(raw: &Value) -> Self {
        match raw {
            Value::Array(entries) => entries
                .iter()
                .filter_map(Interval::from_raw)
                .collect::<Vec<_>>()
                .into(),
            Value::Object(fields) => {
                if fields.get("closed").and_then(Value::as_bool) == Some(true) {
                    return Self::Closed;
                }
                match (time_field(fields, "open"), time_field(fields, "close")) {
                    (Some(open), Some(close)) => Self::SingleInterval(Interval::new(open, close)),
                    _ => Self::Closed,
                }
            }
            _ => Self::Closed,
        }
    }

    pub fn intervals(&self) -> &[Interval] {
        match self {
            Self::Closed => &[],
            Self::SingleInterval(interval) => std::slice::from_ref(interval),
            Self::IntervalList(intervals) => intervals,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.intervals().is_empty()
    }
}

impl From<Vec<Interval>> for DaySchedule {
    fn from(intervals: Vec<Interval>) -> Self {
        if intervals.is_empty() {
            Self::Closed
        } else {
            Self::IntervalList(intervals)
        }
    }
}

impl Serialize for DaySchedule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_closed() {
            let mut map = serializer.serialize_map(Some(1))?;
            map.serialize_entry("closed", &true)?;
            map.end()
        } else {
            serializer.collect_seq(self.intervals())
        }
    }
}

impl<'de> Deserialize<'de> for DaySchedule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Ok(Self::from_raw(&raw))
    }
}

/// Opening hours for every day of the week. Days that were never set are closed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WeeklySchedule {
    days: [DaySchedule; 7],
}

impl WeeklySchedule {
    pub fn new() -> Self {
        Default::default()
    }

    /// Normalizes a stored opening hours record. Unknown day keys are
    /// ignored and anything that is not an object is a week without
    /// opening hours.
    pub fn from_raw(raw: &Value) -> Self {
        let mut schedule = Self::new();
        if let Some(entries) = raw.as_object() {
            for (key, entry) in entries {
                if let Some(day) = parse_day_key(key) {
                    schedule.set(day, DaySchedule::from_raw(entry));
                }
            }
        }
        schedule
    }

    pub fn set(&mut self, day: Weekday, schedule: DaySchedule) {
        self.days[day.num_days_from_monday() as usize] = schedule;
    }

    pub fn with_day(mut self, day: Weekday, schedule: DaySchedule) -> Self {
        self.set(day, schedule);
        self
    }

    pub fn day(&self, day: Weekday) -> &DaySchedule {
        &self.days[day.num_days_from_monday() as usize]
    }

    pub fn intervals_for(&self, day: Weekday) -> &[Interval] {
        self.day(day).intervals()
    }

    pub fn is_always_closed(&self) -> bool {
        self.days.iter().all(DaySchedule::is_closed)
    }
}

impl Serialize for WeeklySchedule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(WEEK.len()))?;
        for day in WEEK {
            map.serialize_entry(day_key(day), self.day(day))?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for WeeklySchedule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Ok(Self::from_raw(&raw))
    }
}

/// Renders the week from monday to sunday, one line per day
pub fn format_opening_hours(schedule: &WeeklySchedule) -> String {
    WEEK.iter()
        .map(|day| {
            let intervals = schedule.intervals_for(*day);
            if intervals.is_empty() {
                format!("{}: Closed", weekday_name(*day))
            } else {
                format!("{}: {}", weekday_name(*day), intervals.iter().join(" / "))
            }
        })
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn time(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    #[test]
    fn it_parses_time_of_day() {
        assert_eq!(time("00:00").minutes(), 0);
        assert_eq!(time("08:30").minutes(), 510);
        assert_eq!(time("8:05").minutes(), 485);
        assert_eq!(time("23:59").minutes(), 1439);
        assert_eq!(time("20:00:00").minutes(), 1200);
        assert_eq!(time("09:00").to_string(), "09:00");

        for malformed in ["", "24:00", "12:60", "12", "12:5", "ab:cd", "-1:00", "12:00:00:00"] {
            assert!(
                malformed.parse::<TimeOfDay>().is_err(),
                "Expected `{}` to be rejected",
                malformed
            );
        }
    }

    #[test]
    fn it_normalizes_both_day_formats() {
        let legacy = DaySchedule::from_raw(&json!({ "open": "08:00", "close": "20:00" }));
        let current = DaySchedule::from_raw(&json!([{ "open": "08:00", "close": "20:00" }]));

        assert!(matches!(legacy, DaySchedule::SingleInterval(_)));
        assert!(matches!(current, DaySchedule::IntervalList(_)));
        assert_eq!(legacy.intervals(), current.intervals());
        assert_eq!(
            legacy.intervals(),
            &[Interval::new(time("08:00"), time("20:00"))]
        );
    }

    #[test]
    fn it_degrades_unrecognized_days_to_closed() {
        let closed = [
            json!({ "closed": true }),
            json!({ "closed": true, "open": "08:00", "close": "20:00" }),
            json!({ "open": "08:00" }),
            json!({ "open": "eight", "close": "20:00" }),
            json!([]),
            json!([{ "open": 8, "close": 20 }]),
            json!(null),
            json!("08:00-20:00"),
            json!(42),
        ];
        for raw in closed {
            assert!(
                DaySchedule::from_raw(&raw).is_closed(),
                "Expected {} to be a closed day",
                raw
            );
        }
    }

    #[test]
    fn it_drops_malformed_intervals_from_a_list() {
        let day = DaySchedule::from_raw(&json!([
            { "open": "08:00", "close": "12:00" },
            { "open": "14:00" },
            { "open": "16:00", "close": "19:00" }
        ]));
        assert_eq!(
            day.intervals(),
            &[
                Interval::new(time("08:00"), time("12:00")),
                Interval::new(time("16:00"), time("19:00"))
            ]
        );
    }

    #[test]
    fn it_deserializes_weekly_schedule_with_any_day_keys() {
        let schedule: WeeklySchedule = serde_json::from_value(json!({
            "lun": { "open": "08:00", "close": "20:00" },
            "Tue": [{ "open": "09:00", "close": "12:00" }, { "open": "14:00", "close": "18:00" }],
            "dim": { "closed": true },
            "holiday": { "open": "10:00", "close": "12:00" },
            "sam": "broken"
        }))
        .expect("To deserialize any object");

        assert_eq!(schedule.intervals_for(Weekday::Mon).len(), 1);
        assert_eq!(schedule.intervals_for(Weekday::Tue).len(), 2);
        assert!(schedule.day(Weekday::Wed).is_closed());
        assert!(schedule.day(Weekday::Sat).is_closed());
        assert!(schedule.day(Weekday::Sun).is_closed());

        let not_an_object: WeeklySchedule =
            serde_json::from_value(json!(["lun"])).expect("To deserialize anything");
        assert!(not_an_object.is_always_closed());
    }

    #[test]
    fn it_serializes_in_the_interval_list_format() {
        let schedule = WeeklySchedule::new().with_day(
            Weekday::Mon,
            DaySchedule::SingleInterval(Interval::new(time("08:00"), time("20:00"))),
        );
        let value = serde_json::to_value(&schedule).unwrap();

        assert_eq!(value["lun"], json!([{ "open": "08:00", "close": "20:00" }]));
        assert_eq!(value["dim"], json!({ "closed": true }));
        assert_eq!(value.as_object().unwrap().len(), 7);
    }

    #[test]
    fn it_formats_opening_hours() {
        let schedule = WeeklySchedule::from_raw(&json!({
            "lun": { "open": "08:00", "close": "20:00" },
            "mar": [{ "open": "08:00", "close": "12:00" }, { "open": "14:00", "close": "18:00" }],
            "sam": { "open": "09:00", "close": "18:00" },
            "dim": { "closed": true }
        }));

        assert_eq!(
            format_opening_hours(&schedule),
            "Monday: 08:00 - 20:00\n\
             Tuesday: 08:00 - 12:00 / 14:00 - 18:00\n\
             Wednesday: Closed\n\
             Thursday: Closed\n\
             Friday: Closed\n\
             Saturday: 09:00 - 18:00\n\
             Sunday: Closed"
        );
    }
}
