use anyhow::Result;
use console::style;
use std::path::PathBuf;

use super::parse::print_appointment_table;
use super::OutputFormat;
use crate::config::resolve_db_path;
use crate::services::{AppointmentsQueryRequest, QueryService};

pub fn handle_query_command(
    db: Option<PathBuf>,
    employee: Option<String>,
    date: Option<String>,
    limit: Option<u32>,
    format: OutputFormat,
) -> Result<()> {
    let db_path = resolve_db_path(db)?;
    let service = QueryService::new(&db_path);

    let response = service.query_appointments(AppointmentsQueryRequest {
        employee_number: employee,
        date,
        limit,
    })?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response.appointments)?);
        }
        OutputFormat::Table => {
            if response.appointments.is_empty() {
                println!("{}", style("No matching appointments.").dim());
            } else {
                print_appointment_table(response.appointments.iter().map(|s| &s.appointment));
            }
            println!();
            println!(
                "Showing {} of {} stored appointments ({})",
                style(response.appointments.len()).bold(),
                response.total_stored,
                style(db_path.display()).dim()
            );
        }
    }

    Ok(())
}
