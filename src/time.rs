use serde::{Deserialize, Serialize};
use std::ops::Add;

#[derive(Debug, Clone, Copy, Ord, Eq, PartialEq, Serialize, Deserialize, PartialOrd)]
pub struct Time(pub u64);

impl Time {
    pub(crate) fn is_overlapping(time: &(Time, Time), window: &(Time, Time)) -> bool {
        time.0 < window.1 && time.1 > window.0
    }

    pub fn saturating_sub(self, rhs: u64) -> Time {
        Time(self.0.saturating_sub(rhs))
    }

    /// Calendar day this instant falls on.
    pub fn date(self) -> Date {
        Date(self.0 / 1440)
    }
}

impl std::fmt::Display for Time {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let days = self.0 / 1440;
        let remaining = self.0 % 1440;
        let hours = remaining / 60;
        let mins = remaining % 60;
        write!(f, "DAY{} {:02}:{:02}", days + 1, hours, mins)
    }
}

impl Add<u64> for Time {
    type Output = Self;

    fn add(self, rhs: u64) -> Self::Output {
        Time(self.0 + rhs)
    }
}

#[derive(Debug, Clone, Copy, Ord, Eq, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Date(pub u64);

impl Date {
    /// 1-based day number, as printed in flight listings.
    pub fn from_day(day: u64) -> Date {
        Date(day.saturating_sub(1))
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DAY{}", self.0 + 1)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DateRange {
    pub start: Date,
    pub end: Date,
}

impl DateRange {
    pub fn new(start: Date, end: Date) -> DateRange {
        DateRange { start, end }
    }

    /// Inclusive on both ends. An inverted range contains nothing.
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}
