use chrono::NaiveDateTime;
use rusqlite::types::{ToSql, Type};
use rusqlite::{params, Row};
use tracing::info;

use crate::database::connection::DatabaseManager;
use crate::error::Result;
use crate::models::{Appointment, StoredAppointment};

const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const SELECT_COLUMNS: &str = "SELECT id, employee_number, employee_name, customer_number, client_name,
        service, slots, start_iso, end_iso, date, start_time, end_time, raw_line
 FROM appointments";

/// Optional narrowing for `AppointmentRepository::list`
#[derive(Debug, Clone, Default)]
pub struct AppointmentFilter {
    pub employee_number: Option<String>,
    /// Report date, MM/DD/YY
    pub date: Option<String>,
    pub limit: Option<u32>,
}

pub struct AppointmentRepository<'a> {
    db_manager: &'a mut DatabaseManager,
}

impl<'a> AppointmentRepository<'a> {
    pub fn new(db_manager: &'a mut DatabaseManager) -> Self {
        Self { db_manager }
    }

    /// Insert every appointment in order inside one transaction. Row ids
    /// follow insertion order.
    pub fn insert_all(&mut self, appointments: &[Appointment]) -> Result<usize> {
        let inserted = self.db_manager.with_transaction(|conn| {
            let mut stmt = conn.prepare(
                "INSERT INTO appointments (
                    employee_number, employee_name, customer_number, client_name, service,
                    slots, start_iso, end_iso, date, start_time, end_time, raw_line
                 ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            )?;

            for appointment in appointments {
                stmt.execute(params![
                    appointment.employee_number,
                    appointment.employee_name,
                    appointment.customer_number,
                    appointment.client_name,
                    appointment.service,
                    appointment.slots,
                    appointment.start_iso(),
                    appointment.end_iso(),
                    appointment.date,
                    appointment.start_time,
                    appointment.end_time,
                    appointment.raw_line,
                ])?;
            }

            Ok(appointments.len())
        })?;

        info!(count = inserted, "Stored appointments");
        Ok(inserted)
    }

    pub fn count(&self) -> Result<i64> {
        self.db_manager.with_connection(|conn| {
            conn.query_row("SELECT COUNT(*) FROM appointments", [], |row| row.get(0))
        })
    }

    pub fn list(&self, filter: &AppointmentFilter) -> Result<Vec<StoredAppointment>> {
        let mut sql = String::from(SELECT_COLUMNS);
        let mut clauses = Vec::new();
        let mut values: Vec<&dyn ToSql> = Vec::new();

        if let Some(employee_number) = &filter.employee_number {
            clauses.push("employee_number = ?");
            values.push(employee_number);
        }
        if let Some(date) = &filter.date {
            clauses.push("date = ?");
            values.push(date);
        }
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY id ASC");
        if let Some(limit) = &filter.limit {
            sql.push_str(" LIMIT ?");
            values.push(limit);
        }

        self.db_manager.with_connection(|conn| {
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map(values.as_slice(), map_row_to_appointment)?;
            rows.collect()
        })
    }
}

fn parse_iso(row: &Row, index: usize) -> rusqlite::Result<NaiveDateTime> {
    let text: String = row.get(index)?;
    NaiveDateTime::parse_from_str(&text, ISO_FORMAT)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

fn map_row_to_appointment(row: &Row) -> rusqlite::Result<StoredAppointment> {
    Ok(StoredAppointment {
        id: row.get(0)?,
        appointment: Appointment {
            employee_number: row.get(1)?,
            employee_name: row.get(2)?,
            customer_number: row.get(3)?,
            client_name: row.get(4)?,
            service: row.get(5)?,
            slots: row.get(6)?,
            start: parse_iso(row, 7)?,
            end: parse_iso(row, 8)?,
            date: row.get(9)?,
            start_time: row.get(10)?,
            end_time: row.get(11)?,
            raw_line: row.get(12)?,
        },
    })
}
