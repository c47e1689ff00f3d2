use serde::{Deserialize, Serialize};

use super::{LineId, StationId};

/// a named line serving an ordered sequence of stations. consecutive
/// entries are adjacent stops; a loop line repeats its first station
/// at the end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitLine {
    pub name: LineId,
    pub stations: Vec<StationId>,
}

impl TransitLine {
    pub fn new<L, S, I>(name: L, stations: I) -> TransitLine
    where
        L: Into<LineId>,
        S: Into<StationId>,
        I: IntoIterator<Item = S>,
    {
        TransitLine {
            name: name.into(),
            stations: stations.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_loop(&self) -> bool {
        self.stations.len() > 2 && self.stations.first() == self.stations.last()
    }
}

#[cfg(test)]
mod tests {
    use super::TransitLine;

    #[test]
    fn test_is_loop() {
        let circle = TransitLine::new("Circle", ["A", "B", "C", "A"]);
        assert!(circle.is_loop());
        assert!(!TransitLine::new("L1", ["A", "B", "C"]).is_loop());
        assert!(!TransitLine::new("Shuttle", ["A", "A"]).is_loop());
    }
}
