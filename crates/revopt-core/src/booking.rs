use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::RevoptError;
use crate::price::Price;

/// Year-month grouping key derived from the check-in date.
///
/// Orders chronologically and renders as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthBucket {
    year: i32,
    month: u32,
}

impl MonthBucket {
    pub fn new(year: i32, month: u32) -> Result<Self, RevoptError> {
        if !(1..=12).contains(&month) {
            return Err(RevoptError::Validation(format!(
                "month {month} out of range 1-12"
            )));
        }
        Ok(Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }
}

impl fmt::Display for MonthBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthBucket {
    type Err = RevoptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (year, month) = trimmed
            .split_once('-')
            .ok_or_else(|| RevoptError::Parse(format!("expected YYYY-MM, got '{trimmed}'")))?;
        if year.len() != 4 || month.len() != 2 {
            return Err(RevoptError::Parse(format!(
                "expected YYYY-MM, got '{trimmed}'"
            )));
        }
        let year = year
            .parse::<i32>()
            .map_err(|_| RevoptError::Parse(format!("invalid year in '{trimmed}'")))?;
        let month = month
            .parse::<u32>()
            .map_err(|_| RevoptError::Parse(format!("invalid month in '{trimmed}'")))?;
        MonthBucket::new(year, month)
    }
}

impl Serialize for MonthBucket {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthBucket {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Booking status as recorded by the channel manager.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookingStatus {
    Booked,
    Other(String),
}

impl BookingStatus {
    /// Only the exact literal `Booked` counts as a confirmed booking.
    pub fn parse(raw: &str) -> Self {
        if raw == "Booked" {
            BookingStatus::Booked
        } else {
            BookingStatus::Other(raw.to_string())
        }
    }

    pub fn is_booked(&self) -> bool {
        matches!(self, BookingStatus::Booked)
    }

    pub fn as_str(&self) -> &str {
        match self {
            BookingStatus::Booked => "Booked",
            BookingStatus::Other(s) => s,
        }
    }
}

/// A cleaned, confirmed booking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Booking {
    pub total_price: Price,
    pub booked_at: NaiveDateTime,
    pub check_in: NaiveDate,
    pub month: MonthBucket,
    pub room_type: String,
}

impl Booking {
    pub fn new(
        total_price: Price,
        booked_at: NaiveDateTime,
        check_in: NaiveDate,
        room_type: impl Into<String>,
    ) -> Self {
        Self {
            total_price,
            booked_at,
            check_in,
            month: MonthBucket::from_date(check_in),
            room_type: room_type.into(),
        }
    }

    pub fn key(&self) -> BucketKey {
        BucketKey {
            room_type: self.room_type.clone(),
            month: self.month,
        }
    }

    pub fn in_bucket(&self, room_type: &str, month: MonthBucket) -> bool {
        self.room_type == room_type && self.month == month
    }
}

/// (room category, month) grouping key. Orders by room, then month.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct BucketKey {
    pub room_type: String,
    pub month: MonthBucket,
}

impl BucketKey {
    pub fn new(room_type: impl Into<String>, month: MonthBucket) -> Self {
        Self {
            room_type: room_type.into(),
            month,
        }
    }
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.room_type, self.month)
    }
}
