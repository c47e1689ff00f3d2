use crate::graph::StationIndex;

/// minimum travel minutes from some origin to every station of a graph,
/// indexed by StationIndex. unreachable stations are None.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationTimes(Vec<Option<u32>>);

impl StationTimes {
    pub fn new(times: Vec<Option<u32>>) -> StationTimes {
        StationTimes(times)
    }

    pub fn get(&self, station: &StationIndex) -> Option<u32> {
        self.0.get(station.0).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
