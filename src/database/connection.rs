use rusqlite::{Connection, OpenFlags};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

use super::schema::{create_schema, schema_version, SCHEMA_VERSION};
use crate::error::{Result, ScheduleError};

/// Files SQLite may leave next to a database
const SIDECAR_SUFFIXES: [&str; 3] = ["-journal", "-wal", "-shm"];

#[derive(Debug)]
pub struct DatabaseManager {
    db_path: PathBuf,
    connection: Connection,
}

impl DatabaseManager {
    /// Delete whatever is at `db_path` and start a fresh, empty database.
    pub fn recreate(db_path: impl AsRef<Path>) -> Result<Self> {
        let db_path = db_path.as_ref().to_path_buf();

        remove_if_exists(&db_path)?;
        for suffix in SIDECAR_SUFFIXES {
            let mut sidecar = db_path.clone().into_os_string();
            sidecar.push(suffix);
            remove_if_exists(Path::new(&sidecar))?;
        }

        let manager = Self::open_with_flags(
            db_path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE,
        )?;

        create_schema(&manager.connection)?;

        info!("Database recreated at: {}", manager.db_path.display());
        Ok(manager)
    }

    /// Open a database previously written by `recreate`.
    pub fn open_existing(db_path: impl AsRef<Path>) -> Result<Self> {
        let db_path = db_path.as_ref().to_path_buf();

        if !db_path.is_file() {
            return Err(ScheduleError::not_found(format!(
                "database {}",
                db_path.display()
            )));
        }

        let manager = Self::open_with_flags(db_path, OpenFlags::SQLITE_OPEN_READ_WRITE)?;

        let found = schema_version(&manager.connection)?;
        if found != SCHEMA_VERSION {
            return Err(ScheduleError::SchemaMismatch {
                expected: SCHEMA_VERSION,
                found,
            });
        }

        debug!("Database opened at: {}", manager.db_path.display());
        Ok(manager)
    }

    pub fn open_in_memory() -> Result<Self> {
        let connection = Connection::open_in_memory()?;
        create_schema(&connection)?;

        debug!("In-memory database initialized");
        Ok(Self {
            db_path: PathBuf::from(":memory:"),
            connection,
        })
    }

    fn open_with_flags(db_path: PathBuf, flags: OpenFlags) -> Result<Self> {
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let connection = Connection::open_with_flags(&db_path, flags).map_err(|source| {
            ScheduleError::DatabaseOpen {
                path: db_path.clone(),
                source,
            }
        })?;

        connection.execute_batch("PRAGMA synchronous = NORMAL; PRAGMA temp_store = memory;")?;

        Ok(Self {
            db_path,
            connection,
        })
    }

    pub fn with_connection<F, R>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<R>,
    {
        Ok(f(&self.connection)?)
    }

    /// Run `f` inside a transaction; commit on success, roll back on error.
    pub fn with_transaction<F, R>(&mut self, f: F) -> Result<R>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<R>,
    {
        let tx = self.connection.transaction()?;

        match f(&tx) {
            Ok(value) => {
                tx.commit()?;
                Ok(value)
            }
            Err(e) => {
                if let Err(rollback_err) = tx.rollback() {
                    error!("Failed to rollback transaction: {}", rollback_err);
                }
                Err(e.into())
            }
        }
    }

    pub fn check_integrity(&self) -> Result<bool> {
        self.with_connection(|conn| {
            let result: String = conn.query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
            Ok(result == "ok")
        })
    }

    pub fn get_db_path(&self) -> &Path {
        &self.db_path
    }
}

fn remove_if_exists(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => {
            debug!("Removed previous output: {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}
