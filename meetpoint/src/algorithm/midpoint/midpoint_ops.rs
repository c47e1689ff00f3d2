use std::sync::Arc;

use itertools::{Either, Itertools};

use super::{MidpointCandidate, MidpointSuggestion, Traveler, TravelerMinutes};
use crate::{
    algorithm::{search, StationTimes},
    graph::{RouteGraph, StationIndex},
};

/// pairs each traveler with the indices of their stations that exist in the
/// graph. unknown stations are dropped, and so are travelers left with none.
pub fn resolve_travelers<'a>(
    graph: &RouteGraph,
    travelers: &'a [Traveler],
) -> Vec<(&'a Traveler, Vec<StationIndex>)> {
    travelers
        .iter()
        .filter_map(|traveler| {
            let (known, unknown): (Vec<StationIndex>, Vec<_>) =
                traveler.stations.iter().partition_map(|s| {
                    match graph.station_index(s.as_str()) {
                        Some(idx) => Either::Left(idx),
                        None => Either::Right(s),
                    }
                });
            for station in unknown {
                log::warn!(
                    "station '{station}' of traveler '{}' is not in the transit network",
                    traveler.label
                );
            }
            if known.is_empty() {
                log::warn!(
                    "traveler '{}' has no usable stations, excluding from midpoint search",
                    traveler.label
                );
                None
            } else {
                Some((traveler, known.into_iter().unique().collect_vec()))
            }
        })
        .collect_vec()
}

/// scores every station of the graph against the travel times of each
/// traveler and returns the best `limit` candidates, best first. a station
/// that some traveler cannot reach is not a candidate. fewer than two
/// travelers yields no candidates.
pub fn rank_candidates(
    graph: &RouteGraph,
    traveler_times: &[&StationTimes],
    limit: usize,
) -> Vec<MidpointCandidate> {
    if traveler_times.len() < 2 {
        return vec![];
    }
    graph
        .station_indices()
        .filter_map(|station| {
            let minutes = traveler_times
                .iter()
                .map(|t| t.get(&station))
                .collect::<Option<Vec<u32>>>()?;
            MidpointCandidate::new(station, minutes)
        })
        .k_smallest(limit)
        .collect_vec()
}

/// ranks meeting stations for a group of travelers. `times_from` supplies
/// the travel times from a traveler's set of origin stations, which lets
/// callers memoize them.
pub fn rank_midpoints_with<F>(
    graph: &RouteGraph,
    travelers: &[Traveler],
    limit: usize,
    times_from: F,
) -> Vec<MidpointSuggestion>
where
    F: Fn(&[StationIndex]) -> Arc<StationTimes>,
{
    let resolved = resolve_travelers(graph, travelers);
    if resolved.len() < 2 {
        log::debug!(
            "midpoint unavailable: {} of {} travelers have usable stations",
            resolved.len(),
            travelers.len()
        );
        return vec![];
    }

    let times = resolved
        .iter()
        .map(|(_, origins)| times_from(origins))
        .collect_vec();
    let time_refs = times.iter().map(|t| t.as_ref()).collect_vec();

    rank_candidates(graph, &time_refs, limit)
        .into_iter()
        .filter_map(|candidate| {
            let station = graph.station(&candidate.station)?.clone();
            let travelers = resolved
                .iter()
                .zip(candidate.traveler_minutes.iter())
                .map(|((traveler, _), minutes)| TravelerMinutes {
                    traveler: traveler.label.clone(),
                    minutes: *minutes,
                })
                .collect_vec();
            Some(MidpointSuggestion {
                station,
                fairness: candidate.fairness,
                total_minutes: candidate.total_minutes,
                travelers,
            })
        })
        .collect_vec()
}

/// ranks meeting stations for a group of travelers without memoization.
pub fn rank_midpoints(
    graph: &RouteGraph,
    travelers: &[Traveler],
    limit: usize,
) -> Vec<MidpointSuggestion> {
    rank_midpoints_with(graph, travelers, limit, |origins| {
        Arc::new(search::travel_times_from(graph, origins))
    })
}

/// selects the station with the smallest spread of travel times from the
/// given stations, breaking ties by lower total time and then by station
/// name. returns None with fewer than two stations known to the graph.
pub fn fair_midpoint(graph: &RouteGraph, stations: &[&str]) -> Option<MidpointSuggestion> {
    let travelers = stations.iter().map(|s| Traveler::at(s)).collect_vec();
    rank_midpoints(graph, &travelers, 1).into_iter().next()
}
