use serde::{Deserialize, Serialize};

use crate::model::StationId;

/// a party to a meeting along with the stations they can start from.
/// their travel time to a candidate is the time from their nearest station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Traveler {
    pub label: String,
    pub stations: Vec<StationId>,
}

impl Traveler {
    pub fn new<S, I>(label: &str, stations: I) -> Traveler
    where
        S: Into<StationId>,
        I: IntoIterator<Item = S>,
    {
        Traveler {
            label: label.to_string(),
            stations: stations.into_iter().map(Into::into).collect(),
        }
    }

    /// a traveler starting from a single station, labeled by that station.
    pub fn at(station: &str) -> Traveler {
        let station = StationId::from(station);
        Traveler {
            label: station.to_string(),
            stations: vec![station],
        }
    }
}
