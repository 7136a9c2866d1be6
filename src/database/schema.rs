use rusqlite::{Connection, Result};

/// Stored in `PRAGMA user_version` so readers can recognize our databases
pub const SCHEMA_VERSION: u32 = 1;

pub fn create_schema(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS appointments (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_number TEXT NOT NULL,
            employee_name TEXT NOT NULL,
            customer_number TEXT NOT NULL,
            client_name TEXT NOT NULL,
            service TEXT NOT NULL,
            slots INTEGER NOT NULL CHECK (slots >= 1),
            start_iso TEXT NOT NULL,
            end_iso TEXT NOT NULL,
            date TEXT NOT NULL,
            start_time TEXT NOT NULL,
            end_time TEXT NOT NULL,
            raw_line TEXT NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_appointments_employee ON appointments(employee_number)",
        [],
    )?;
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_appointments_start ON appointments(start_iso)",
        [],
    )?;

    conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;

    Ok(())
}

pub fn schema_version(conn: &Connection) -> Result<u32> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
}
