use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

use crate::database::{AppointmentRepository, DatabaseManager};
use crate::parsers::{ParseOutcome, ParseStats, ScheduleParser};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestRequest {
    pub report_path: PathBuf,
    pub db_path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestResponse {
    pub appointments_stored: usize,
    pub db_path: PathBuf,
    pub stats: ParseStats,
    pub report_size_bytes: u64,
    pub duration_ms: u64,
    pub warnings: Vec<String>,
}

/// Report -> parser -> database pipeline
#[derive(Debug, Clone, Copy, Default)]
pub struct IngestService;

impl IngestService {
    pub fn new() -> Self {
        Self
    }

    /// Parse the report, then replace the database at `db_path` with the
    /// result. The previous database is only touched once parsing succeeded.
    pub fn ingest(&self, request: IngestRequest) -> Result<IngestResponse> {
        let started = Instant::now();

        let outcome = self.preview(&request.report_path)?;

        let report_size_bytes = std::fs::metadata(&request.report_path)
            .with_context(|| format!("Failed to read report: {}", request.report_path.display()))?
            .len();

        let mut db_manager = DatabaseManager::recreate(&request.db_path).with_context(|| {
            format!("Failed to create database: {}", request.db_path.display())
        })?;
        let stored = AppointmentRepository::new(&mut db_manager)
            .insert_all(&outcome.appointments)
            .context("Failed to store appointments")?;

        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        let warnings = collect_warnings(&outcome);

        info!(
            report = %request.report_path.display(),
            db = %db_manager.get_db_path().display(),
            stored,
            duration_ms,
            "Ingest completed"
        );

        Ok(IngestResponse {
            appointments_stored: stored,
            db_path: db_manager.get_db_path().to_path_buf(),
            stats: outcome.stats,
            report_size_bytes,
            duration_ms,
            warnings,
        })
    }

    /// Parse a report without storing anything.
    pub fn preview(&self, report_path: impl Into<PathBuf>) -> Result<ParseOutcome> {
        let report_path = report_path.into();
        ScheduleParser::new(&report_path)
            .parse()
            .with_context(|| format!("Failed to parse report: {}", report_path.display()))
    }
}

/// Human-readable notes about a parse that succeeded but looks off
pub fn collect_warnings(outcome: &ParseOutcome) -> Vec<String> {
    let mut warnings = Vec::new();

    if outcome.stats.blocks_seen == 0 {
        warnings.push("No 'Employee#:' headers found; is this an appointment listing?".to_string());
    } else if outcome.appointments.is_empty() {
        warnings.push(format!(
            "{} employee blocks found but no appointment rows",
            outcome.stats.blocks_seen
        ));
    }

    if outcome.stats.unmatched_lines > 0 {
        warnings.push(format!(
            "{} detail lines did not match the appointment row layout and were skipped",
            outcome.stats.unmatched_lines
        ));
    }

    if outcome.stats.zero_slot_rows > 0 {
        warnings.push(format!(
            "{} appointment rows booked zero slots and were skipped",
            outcome.stats.zero_slot_rows
        ));
    }

    warnings
}
