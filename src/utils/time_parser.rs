use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

/// Two-digit years below this pivot land in the 2000s, the rest in the 1900s.
const CENTURY_PIVOT: u32 = 69;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimestampError {
    #[error("invalid date '{0}', expected MM/DD/YY")]
    InvalidDate(String),

    #[error("invalid time '{0}', expected H:MMa or H:MMp")]
    InvalidTime(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    pub fn from_suffix(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'a' => Some(Meridiem::Am),
            'p' => Some(Meridiem::Pm),
            _ => None,
        }
    }
}

/// Parse a report date in `MM/DD/YY` form.
pub fn parse_report_date(date: &str) -> Result<NaiveDate, TimestampError> {
    let invalid = || TimestampError::InvalidDate(date.to_string());

    let mut parts = date.trim().split('/');
    let (Some(month), Some(day), Some(year), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid());
    };

    let month: u32 = month.parse().map_err(|_| invalid())?;
    let day: u32 = day.parse().map_err(|_| invalid())?;
    let year: u32 = year.parse().map_err(|_| invalid())?;
    if year > 99 {
        return Err(invalid());
    }

    let full_year = if year < CENTURY_PIVOT {
        2000 + year
    } else {
        1900 + year
    };

    NaiveDate::from_ymd_opt(full_year as i32, month, day).ok_or_else(invalid)
}

/// Parse a 12-hour clock time with a trailing meridiem letter: `9:30a`, `12:05p`.
pub fn parse_report_time(time: &str) -> Result<NaiveTime, TimestampError> {
    let invalid = || TimestampError::InvalidTime(time.to_string());

    let time = time.trim();
    let suffix = time.chars().last().ok_or_else(invalid)?;
    let meridiem = Meridiem::from_suffix(suffix).ok_or_else(invalid)?;
    let clock = &time[..time.len() - suffix.len_utf8()];

    let (hour, minute) = clock.split_once(':').ok_or_else(invalid)?;
    let hour: u32 = hour.parse().map_err(|_| invalid())?;
    let minute: u32 = minute.parse().map_err(|_| invalid())?;

    if !(1..=12).contains(&hour) {
        return Err(invalid());
    }

    let hour = match (meridiem, hour) {
        (Meridiem::Am, 12) => 0,
        (Meridiem::Am, h) => h,
        (Meridiem::Pm, 12) => 12,
        (Meridiem::Pm, h) => h + 12,
    };

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)
}

/// Combine a report date and time into the appointment start.
pub fn parse_report_timestamp(date: &str, time: &str) -> Result<NaiveDateTime, TimestampError> {
    let date = parse_report_date(date)?;
    let time = parse_report_time(time)?;
    Ok(date.and_time(time))
}
