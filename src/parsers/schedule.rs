use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::patterns::{
    is_booked_marker, is_end_of_block, match_detail_row, match_employee_header, DetailRow,
};
use crate::error::{Result, ScheduleError};
use crate::models::{Appointment, Booking, Employee};
use crate::utils::text::{decode_report, is_separator_rule, title_case};
use crate::utils::time_parser::parse_report_timestamp;

/// Where the scan currently is relative to employee blocks
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScanState {
    #[default]
    OutsideBlock,
    /// Inside a block, before the `%Booked` marker
    InBlockHeader(Employee),
    /// Inside a block, reading appointment rows
    InDetail(Employee),
}

/// What a single line meant to the scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEvent<'a> {
    BlockStarted,
    DetailSectionStarted,
    BlockEnded,
    /// Blank, parenthetical or dash-rule line inside a detail section
    Filler,
    /// Detail-section line that is not an appointment row
    Unmatched,
    Detail(DetailRow<'a>),
    Ignored,
}

impl ScanState {
    pub fn employee(&self) -> Option<&Employee> {
        match self {
            ScanState::OutsideBlock => None,
            ScanState::InBlockHeader(employee) | ScanState::InDetail(employee) => Some(employee),
        }
    }

    /// Advance over one line. `line` should already have trailing whitespace
    /// removed.
    pub fn step(self, line: &str) -> (ScanState, LineEvent<'_>) {
        if let Some(employee) = match_employee_header(line) {
            return (ScanState::InBlockHeader(employee), LineEvent::BlockStarted);
        }

        match self {
            ScanState::OutsideBlock => (ScanState::OutsideBlock, LineEvent::Ignored),
            ScanState::InBlockHeader(employee) => {
                if is_end_of_block(line) {
                    (ScanState::OutsideBlock, LineEvent::BlockEnded)
                } else if is_booked_marker(line) {
                    (ScanState::InDetail(employee), LineEvent::DetailSectionStarted)
                } else {
                    (ScanState::InBlockHeader(employee), LineEvent::Ignored)
                }
            }
            ScanState::InDetail(employee) => {
                if is_end_of_block(line) {
                    return (ScanState::OutsideBlock, LineEvent::BlockEnded);
                }

                let event = if is_booked_marker(line) {
                    LineEvent::DetailSectionStarted
                } else if is_filler(line) {
                    LineEvent::Filler
                } else {
                    match match_detail_row(line) {
                        Some(row) => LineEvent::Detail(row),
                        None => LineEvent::Unmatched,
                    }
                };
                (ScanState::InDetail(employee), event)
            }
        }
    }
}

fn is_filler(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('(') || is_separator_rule(trimmed)
}

/// Counters gathered during one scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    pub lines_scanned: usize,
    pub blocks_seen: usize,
    pub detail_rows: usize,
    pub filler_lines: usize,
    pub unmatched_lines: usize,
    /// Rows that fit the layout but book zero slots
    pub zero_slot_rows: usize,
}

#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    pub appointments: Vec<Appointment>,
    pub stats: ParseStats,
}

/// Parse report lines into appointments, in source order.
///
/// Detail rows that do not fit the row layout are skipped. A row that fits
/// but carries an impossible date or time aborts the whole parse.
pub fn parse_lines<I, S>(lines: I) -> Result<ParseOutcome>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut state = ScanState::default();
    let mut outcome = ParseOutcome::default();

    for (index, line) in lines.into_iter().enumerate() {
        let line_number = index + 1;
        let line = line.as_ref().trim_end();
        outcome.stats.lines_scanned += 1;

        let (next, event) = state.step(line);

        match event {
            LineEvent::BlockStarted => {
                outcome.stats.blocks_seen += 1;
                if let Some(employee) = next.employee() {
                    debug!(line_number, employee = %employee, "Employee block started");
                }
            }
            LineEvent::Filler => outcome.stats.filler_lines += 1,
            LineEvent::Unmatched => {
                outcome.stats.unmatched_lines += 1;
                debug!(line_number, line, "Skipping unrecognized detail line");
            }
            LineEvent::Detail(row) => {
                if let Some(employee) = next.employee() {
                    if let Some(appointment) = build_appointment(employee, &row, line, line_number)?
                    {
                        outcome.stats.detail_rows += 1;
                        outcome.appointments.push(appointment);
                    } else {
                        outcome.stats.zero_slot_rows += 1;
                        debug!(line_number, line, "Skipping detail line with zero slots");
                    }
                }
            }
            LineEvent::DetailSectionStarted | LineEvent::BlockEnded | LineEvent::Ignored => {}
        }

        state = next;
    }

    Ok(outcome)
}

/// Parse a whole report held in memory.
pub fn parse_report(text: &str) -> Result<ParseOutcome> {
    parse_lines(text.lines())
}

fn build_appointment(
    employee: &Employee,
    row: &DetailRow<'_>,
    line: &str,
    line_number: usize,
) -> Result<Option<Appointment>> {
    let start = parse_report_timestamp(row.date, row.time)
        .map_err(|e| ScheduleError::invalid_timestamp(line_number, line, e.to_string()))?;

    let slots: u32 = row
        .slots
        .parse()
        .map_err(|_| ScheduleError::InvalidSlotCount {
            line_number,
            value: row.slots.to_string(),
        })?;

    if slots == 0 {
        return Ok(None);
    }

    let booking = Booking {
        customer_number: row.customer_number.to_string(),
        client_name: title_case(row.name),
        service: row.service.to_string(),
        slots,
        date: row.date.to_string(),
    };

    Ok(Some(Appointment::new(employee, booking, start, line)))
}

/// Parser bound to one report file on disk
pub struct ScheduleParser {
    file_path: PathBuf,
}

impl ScheduleParser {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    /// Cheap check that the file looks like an appointment listing
    pub fn is_valid_file(file_path: impl AsRef<Path>) -> bool {
        let path = file_path.as_ref();
        if !path.is_file() {
            return false;
        }

        match fs::read(path) {
            Ok(bytes) => decode_report(&bytes)
                .lines()
                .any(|line| match_employee_header(line).is_some()),
            Err(_) => false,
        }
    }

    pub fn parse(&self) -> Result<ParseOutcome> {
        let bytes = fs::read(&self.file_path).map_err(|source| ScheduleError::ReportRead {
            path: self.file_path.clone(),
            source,
        })?;

        let text = decode_report(&bytes);
        let outcome = parse_report(&text)?;

        if outcome.appointments.is_empty() {
            warn!(
                path = %self.file_path.display(),
                blocks = outcome.stats.blocks_seen,
                "No appointments found in report"
            );
        }

        info!(
            path = %self.file_path.display(),
            appointments = outcome.appointments.len(),
            blocks = outcome.stats.blocks_seen,
            skipped = outcome.stats.unmatched_lines,
            zero_slots = outcome.stats.zero_slot_rows,
            "Parsed schedule report"
        );

        Ok(outcome)
    }
}
