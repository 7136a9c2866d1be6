pub mod appointment_repo;
pub mod config;
pub mod connection;
pub mod schema;

pub use appointment_repo::{AppointmentFilter, AppointmentRepository};
pub use connection::DatabaseManager;
pub use schema::{create_schema, SCHEMA_VERSION};
