pub(crate) mod aggregation_service;
pub(crate) mod csv_exporter;
pub(crate) mod reporting_errors;
pub(crate) mod reporting_model;

// Re-export the public interface
pub use aggregation_service::aggregate;
pub use csv_exporter::{export_monthly_series, export_summary};
pub use reporting_model::Granularity;

// Re-export error types for convenience
pub use reporting_errors::ReportError;
