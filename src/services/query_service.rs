use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::database::{AppointmentFilter, AppointmentRepository, DatabaseManager};
use crate::models::StoredAppointment;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppointmentsQueryRequest {
    pub employee_number: Option<String>,
    pub date: Option<String>,
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentsQueryResponse {
    pub appointments: Vec<StoredAppointment>,
    /// Rows in the database, ignoring filters
    pub total_stored: i64,
}

/// Read access to a database written by `IngestService`
pub struct QueryService {
    db_path: PathBuf,
}

impl QueryService {
    pub fn new(db_path: impl AsRef<Path>) -> Self {
        Self {
            db_path: db_path.as_ref().to_path_buf(),
        }
    }

    pub fn query_appointments(
        &self,
        request: AppointmentsQueryRequest,
    ) -> Result<AppointmentsQueryResponse> {
        let mut db_manager = DatabaseManager::open_existing(&self.db_path)
            .with_context(|| format!("Failed to open database: {}", self.db_path.display()))?;
        let repo = AppointmentRepository::new(&mut db_manager);

        let filter = AppointmentFilter {
            employee_number: request.employee_number,
            date: request.date,
            limit: request.limit,
        };

        let appointments = repo.list(&filter).context("Failed to query appointments")?;
        let total_stored = repo.count().context("Failed to count appointments")?;

        Ok(AppointmentsQueryResponse {
            appointments,
            total_stored,
        })
    }
}
