use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Length of one scheduling slot
pub const SLOT_MINUTES: i64 = 15;

/// Duration covered by `slots` consecutive slots
pub fn slot_duration(slots: u32) -> Duration {
    Duration::minutes(SLOT_MINUTES * i64::from(slots))
}

/// Staff member an appointment block belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub number: String,
    pub name: String,
}

impl Employee {
    pub fn new(number: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for Employee {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {}", self.number, self.name)
    }
}

/// One booked appointment recovered from a schedule report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub employee_number: String,
    pub employee_name: String,
    pub customer_number: String,
    pub client_name: String,
    pub service: String,
    pub slots: u32,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Date exactly as printed in the report (MM/DD/YY)
    pub date: String,
    /// HH:MM, 24-hour
    pub start_time: String,
    /// HH:MM, 24-hour
    pub end_time: String,
    pub raw_line: String,
}

impl Appointment {
    /// Build an appointment, deriving the end and the display times from
    /// `start` and `slots`.
    pub fn new(
        employee: &Employee,
        booking: Booking,
        start: NaiveDateTime,
        raw_line: impl Into<String>,
    ) -> Self {
        let end = start + slot_duration(booking.slots);

        Self {
            employee_number: employee.number.clone(),
            employee_name: employee.name.clone(),
            customer_number: booking.customer_number,
            client_name: booking.client_name,
            service: booking.service,
            slots: booking.slots,
            start,
            end,
            date: booking.date,
            start_time: start.format("%H:%M").to_string(),
            end_time: end.format("%H:%M").to_string(),
            raw_line: raw_line.into(),
        }
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// `end` is after `start` and the gap is exactly `slots` slots
    pub fn is_consistent(&self) -> bool {
        self.end > self.start && self.duration() == slot_duration(self.slots)
    }

    pub fn start_iso(&self) -> String {
        self.start.format("%Y-%m-%dT%H:%M:%S").to_string()
    }

    pub fn end_iso(&self) -> String {
        self.end.format("%Y-%m-%dT%H:%M:%S").to_string()
    }
}

/// Customer-side fields of a detail row, already normalized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub customer_number: String,
    pub client_name: String,
    pub service: String,
    pub slots: u32,
    pub date: String,
}

/// An appointment as read back from the database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredAppointment {
    pub id: i64,
    #[serde(flatten)]
    pub appointment: Appointment,
}
