mod midpoint_config;
mod network_source;

pub use midpoint_config::MidpointConfiguration;
pub use network_source::NetworkSource;
