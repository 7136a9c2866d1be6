pub mod ingest_service;
pub mod query_service;

pub use ingest_service::{IngestRequest, IngestResponse, IngestService};
pub use query_service::{AppointmentsQueryRequest, AppointmentsQueryResponse, QueryService};
