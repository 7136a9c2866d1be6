use anyhow::Result;
use console::style;
use std::path::PathBuf;

use crate::config::{resolve_db_path, resolve_lst_path};
use crate::services::{IngestRequest, IngestService};

pub fn handle_ingest_command(lst: Option<PathBuf>, db: Option<PathBuf>) -> Result<()> {
    let report_path = resolve_lst_path(lst)?;
    let db_path = resolve_db_path(db)?;

    println!("Ingesting report: {}", style(report_path.display()).cyan());

    let response = IngestService::new().ingest(IngestRequest {
        report_path,
        db_path,
    })?;

    println!(
        "{} parsed {} appointments into {}",
        style("✓").green(),
        style(response.appointments_stored).bold(),
        style(response.db_path.display()).cyan()
    );
    println!(
        "  - {} employee blocks, {} lines scanned in {} ms",
        response.stats.blocks_seen, response.stats.lines_scanned, response.duration_ms
    );

    if !response.warnings.is_empty() {
        println!("Warnings:");
        for warning in &response.warnings {
            println!("  - {}", style(warning).yellow());
        }
    }

    Ok(())
}
