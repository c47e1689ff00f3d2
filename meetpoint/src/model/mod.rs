mod line_id;
mod network_error;
mod station_id;
mod transit_line;
mod transit_network;

pub use line_id::LineId;
pub use network_error::NetworkError;
pub use station_id::StationId;
pub use transit_line::TransitLine;
pub use transit_network::TransitNetwork;
