mod midpoint_service;
mod travel_time_cache;

pub use midpoint_service::MidpointService;
pub use travel_time_cache::TravelTimeCache;
