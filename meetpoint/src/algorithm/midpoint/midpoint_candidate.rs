use std::cmp::Ordering;

use crate::graph::StationIndex;

/// a scored meeting station. candidates order by fairness score, then
/// total minutes, then station index; station indices follow name order,
/// so remaining ties fall to the lexicographically smallest station name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MidpointCandidate {
    pub station: StationIndex,
    /// spread between the longest and shortest traveler time
    pub fairness: u32,
    /// summed in u64 so that large per-traveler times cannot overflow
    pub total_minutes: u64,
    pub traveler_minutes: Vec<u32>,
}

impl MidpointCandidate {
    /// scores a station from each traveler's minutes to it. returns None
    /// when there are no travelers.
    pub fn new(station: StationIndex, traveler_minutes: Vec<u32>) -> Option<MidpointCandidate> {
        let max = traveler_minutes.iter().max()?;
        let min = traveler_minutes.iter().min()?;
        Some(MidpointCandidate {
            station,
            fairness: max - min,
            total_minutes: traveler_minutes.iter().map(|m| u64::from(*m)).sum(),
            traveler_minutes,
        })
    }
}

impl Ord for MidpointCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.fairness
            .cmp(&other.fairness)
            .then_with(|| self.total_minutes.cmp(&other.total_minutes))
            .then_with(|| self.station.cmp(&other.station))
    }
}

impl PartialOrd for MidpointCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
