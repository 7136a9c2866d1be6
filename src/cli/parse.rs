use anyhow::Result;
use console::style;
use std::path::PathBuf;

use super::OutputFormat;
use crate::config::resolve_lst_path;
use crate::models::Appointment;
use crate::services::ingest_service::collect_warnings;
use crate::services::IngestService;
use crate::utils::text::truncate_text;

pub fn handle_parse_command(lst: Option<PathBuf>, format: OutputFormat) -> Result<()> {
    let report_path = resolve_lst_path(lst)?;
    let outcome = IngestService::new().preview(&report_path)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&outcome.appointments)?);
        }
        OutputFormat::Table => {
            print_appointment_table(outcome.appointments.iter());
            println!();
            println!(
                "{} appointments from {} employee blocks",
                style(outcome.appointments.len()).bold(),
                outcome.stats.blocks_seen
            );
            for warning in collect_warnings(&outcome) {
                println!("  - {}", style(warning).yellow());
            }
        }
    }

    Ok(())
}

/// Print appointments as a fixed-width table
pub fn print_appointment_table<'a>(appointments: impl Iterator<Item = &'a Appointment>) {
    println!(
        "{}",
        style(format!(
            "{:<8} {:<20} {:<8} {:<5} {:<5} {:<8} {:<24} {:<20} {:>5}",
            "Emp#", "Employee", "Date", "Start", "End", "Cust#", "Client", "Service", "Slots"
        ))
        .bold()
    );

    for appt in appointments {
        println!(
            "{:<8} {:<20} {:<8} {:<5} {:<5} {:<8} {:<24} {:<20} {:>5}",
            appt.employee_number,
            truncate_text(&appt.employee_name, 20),
            appt.date,
            appt.start_time,
            appt.end_time,
            appt.customer_number,
            truncate_text(&appt.client_name, 24),
            truncate_text(&appt.service, 20),
            appt.slots
        );
    }
}
