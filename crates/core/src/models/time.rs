//! Days of the school week and minute-granular wall-clock times.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::errors::SlotError;

/// A teaching day. Sunday is not part of the timetable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub const ALL: [Weekday; 6] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = SlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Weekday::ALL
            .into_iter()
            .find(|day| day.as_str() == wanted)
            .ok_or_else(|| SlotError::InvalidDay(s.to_string()))
    }
}

/// Minutes since midnight, written as zero-padded `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub const MINUTES_PER_DAY: u16 = 24 * 60;

    pub fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(TimeOfDay(hour * 60 + minute))
        } else {
            None
        }
    }

    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = SlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // chrono tolerates "8:00" and " 8:00"; only the padded form is accepted
        let bytes = s.as_bytes();
        let well_formed = bytes.len() == 5
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| if i == 2 { *b == b':' } else { b.is_ascii_digit() });
        if !well_formed {
            return Err(SlotError::InvalidTime(s.to_string()));
        }
        let parsed = NaiveTime::parse_from_str(s, "%H:%M")
            .map_err(|_| SlotError::InvalidTime(s.to_string()))?;
        // hour() and minute() are bounded by chrono to 0..24 and 0..60
        Ok(TimeOfDay(parsed.hour() as u16 * 60 + parsed.minute() as u16))
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = SlotError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

/// A non-empty span of the day. `start` is always strictly before `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRange", into = "RawRange")]
pub struct TimeRange {
    start: TimeOfDay,
    end: TimeOfDay,
}

#[derive(Serialize, Deserialize)]
struct RawRange {
    start_time: TimeOfDay,
    end_time: TimeOfDay,
}

impl TryFrom<RawRange> for TimeRange {
    type Error = SlotError;

    fn try_from(raw: RawRange) -> Result<Self, Self::Error> {
        TimeRange::new(raw.start_time, raw.end_time)
    }
}

impl From<TimeRange> for RawRange {
    fn from(range: TimeRange) -> Self {
        RawRange {
            start_time: range.start,
            end_time: range.end,
        }
    }
}

impl TimeRange {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Result<Self, SlotError> {
        if start < end {
            Ok(TimeRange { start, end })
        } else {
            Err(SlotError::EmptyRange {
                start: start.to_string(),
                end: end.to_string(),
            })
        }
    }

    /// Parses a pair of `HH:MM` strings as submitted by the time pickers.
    pub fn parse(start: &str, end: &str) -> Result<Self, SlotError> {
        TimeRange::new(start.parse()?, end.parse()?)
    }

    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    pub fn duration_minutes(&self) -> u16 {
        self.end.minutes() - self.start.minutes()
    }

    /// Whether `self`, taken as the candidate, collides with `existing`.
    ///
    /// The three clauses are: the candidate starts inside `existing`, ends
    /// inside it, or swallows it whole. A candidate lying strictly inside
    /// `existing` is caught by the first clause. Touching endpoints
    /// (`self.end == existing.start` or `self.start == existing.end`) do not
    /// collide.
    pub fn overlaps(&self, existing: &TimeRange) -> bool {
        let (c, e) = (self, existing);
        (c.start >= e.start && c.start < e.end)
            || (c.end > e.start && c.end <= e.end)
            || (c.start <= e.start && c.end >= e.end)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
