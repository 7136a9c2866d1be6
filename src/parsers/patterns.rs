use regex::{Captures, Regex};

use crate::models::Employee;

/// Marks the start of the appointment rows inside an employee block
pub const BOOKED_MARKER: &str = "%Booked";

/// Closes an employee block
pub const END_OF_BLOCK_MARKER: &str = "End of Employee Appointments";

lazy_static::lazy_static! {
    // Name runs lazily up to the first run of 2+ spaces; later columns are dropped.
    static ref EMPLOYEE_HEADER: Regex =
        Regex::new(r"Employee#:\s*(?P<number>[0-9]+)\s+(?P<name>.+?)(?:\s{2,}.*)?$").unwrap();

    static ref DETAIL_ROW: Regex = Regex::new(concat!(
        r"^(?P<date>[0-9]{2}/[0-9]{2}/[0-9]{2})\s+",
        r"(?P<time>[0-9]{1,2}:[0-9]{2}[ap])\s+",
        r"(?P<customer>[0-9]+)\s+",
        r"(?P<name>[A-Z ,.'\-]+?)\s+[0-9]+\s+",
        r"(?P<service>.+?)\s+",
        r"(?P<slots>[0-9]+)\s+[0-9]+\s+\S+$",
    ))
    .unwrap();
}

/// Fields of one appointment row, borrowed from the source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow<'a> {
    pub date: &'a str,
    pub time: &'a str,
    pub customer_number: &'a str,
    pub name: &'a str,
    pub service: &'a str,
    pub slots: &'a str,
}

impl<'a> DetailRow<'a> {
    fn from_captures(caps: &Captures<'a>) -> Option<Self> {
        Some(Self {
            date: caps.name("date")?.as_str(),
            time: caps.name("time")?.as_str(),
            customer_number: caps.name("customer")?.as_str().trim(),
            name: caps.name("name")?.as_str().trim(),
            service: caps.name("service")?.as_str().trim(),
            slots: caps.name("slots")?.as_str(),
        })
    }
}

/// Match an employee header anywhere in the line.
pub fn match_employee_header(line: &str) -> Option<Employee> {
    let caps = EMPLOYEE_HEADER.captures(line)?;
    let number = caps.name("number")?.as_str().trim();
    let name = caps.name("name")?.as_str().trim();
    Some(Employee::new(number, name))
}

/// Match a full appointment row. The line must start with the date.
pub fn match_detail_row(line: &str) -> Option<DetailRow<'_>> {
    let caps = DETAIL_ROW.captures(line)?;
    DetailRow::from_captures(&caps)
}

pub fn is_booked_marker(line: &str) -> bool {
    line.contains(BOOKED_MARKER)
}

pub fn is_end_of_block(line: &str) -> bool {
    line.contains(END_OF_BLOCK_MARKER)
}
