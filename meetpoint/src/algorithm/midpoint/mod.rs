mod midpoint_candidate;
pub mod midpoint_ops;
mod midpoint_suggestion;
mod traveler;

pub use midpoint_candidate::MidpointCandidate;
pub use midpoint_ops::fair_midpoint;
pub use midpoint_suggestion::{MidpointSuggestion, TravelerMinutes};
pub use traveler::Traveler;
