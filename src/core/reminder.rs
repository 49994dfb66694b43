//! Strict `HH:MM` reminder time parsing.
//!
//! Only zero-padded 24-hour `HH:MM` strings are accepted; anything else is
//! a validation failure the caller surfaces as a retry prompt.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

lazy_static! {
    static ref HHMM_REGEX: Regex =
        Regex::new(r"^([01][0-9]|2[0-3]):([0-5][0-9])$").expect("Invalid HH:MM regex");
}

/// Minute-precision time of day for a reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReminderTime {
    hour: u8,
    minute: u8,
}

/// Rejected time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a valid HH:MM time: {0:?}")]
pub struct InvalidTimeFormat(pub String);

impl ReminderTime {
    /// Build from components. Returns None when out of range.
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self { hour, minute })
        } else {
            None
        }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Minutes since midnight, for clock comparisons.
    pub fn minutes_of_day(&self) -> u32 {
        u32::from(self.hour) * 60 + u32::from(self.minute)
    }
}

impl FromStr for ReminderTime {
    type Err = InvalidTimeFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = HHMM_REGEX
            .captures(s)
            .ok_or_else(|| InvalidTimeFormat(s.to_string()))?;
        let hour = caps[1]
            .parse()
            .map_err(|_| InvalidTimeFormat(s.to_string()))?;
        let minute = caps[2]
            .parse()
            .map_err(|_| InvalidTimeFormat(s.to_string()))?;
        Ok(Self { hour, minute })
    }
}

impl fmt::Display for ReminderTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

// Persisted as the same `HH:MM` string the user typed.
impl Serialize for ReminderTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ReminderTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_valid_times() {
        for (input, hour, minute) in [
            ("00:00", 0, 0),
            ("08:00", 8, 0),
            ("12:34", 12, 34),
            ("19:05", 19, 5),
            ("23:59", 23, 59),
        ] {
            let time: ReminderTime = input.parse().unwrap();
            assert_eq!(time.hour(), hour);
            assert_eq!(time.minute(), minute);
            assert_eq!(time.to_string(), input);
        }
    }

    #[test]
    fn test_rejects_everything_else() {
        for input in [
            "9:00", "25:61", "noon", "", "08:5", "8:5", "08:00:00", "24:00", "08:60",
            " 08:00", "08:00 ", "0800", "-1:00",
        ] {
            assert_eq!(
                input.parse::<ReminderTime>(),
                Err(InvalidTimeFormat(input.to_string())),
                "should reject {:?}",
                input
            );
        }
    }

    #[test]
    fn test_minutes_of_day() {
        let time: ReminderTime = "08:30".parse().unwrap();
        assert_eq!(time.minutes_of_day(), 8 * 60 + 30);
        assert_eq!("00:00".parse::<ReminderTime>().unwrap().minutes_of_day(), 0);
        assert_eq!(
            "23:59".parse::<ReminderTime>().unwrap().minutes_of_day(),
            1439
        );
    }

    #[test]
    fn test_new_range_check() {
        assert!(ReminderTime::new(23, 59).is_some());
        assert!(ReminderTime::new(24, 0).is_none());
        assert!(ReminderTime::new(0, 60).is_none());
    }

    #[test]
    fn test_serializes_as_string() {
        let time: ReminderTime = "07:45".parse().unwrap();
        assert_eq!(serde_json::to_string(&time).unwrap(), "\"07:45\"");

        let back: ReminderTime = serde_json::from_str("\"07:45\"").unwrap();
        assert_eq!(back, time);

        assert!(serde_json::from_str::<ReminderTime>("\"7:45\"").is_err());
    }
}
