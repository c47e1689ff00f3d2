mod app_error;
pub mod batch;
mod midpoint_app;
mod network_summary;

pub use app_error::MidpointAppError;
pub use midpoint_app::{MidpointApp, MidpointOperation};
pub use network_summary::NetworkSummary;
