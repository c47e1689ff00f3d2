pub mod midpoint;
mod route_summary;
mod search;
mod station_times;

pub use route_summary::{route_summary, RouteStep, RouteSummary};
pub use search::{run_search, shortest_time, travel_times_from, SearchTree};
pub use station_times::StationTimes;
