use std::{cmp::Ordering, collections::BinaryHeap};

use crate::graph::{EdgeType, RouteGraph, RouteNodeId, StationIndex};

use super::StationTimes;

/// result of a Dijkstra search over a route graph. settled nodes hold their
/// minimum minutes from the nearest source along with the node and edge type
/// they were reached by. source nodes have no predecessor.
#[derive(Debug, Clone)]
pub struct SearchTree {
    minutes: Vec<Option<u32>>,
    predecessors: Vec<Option<(RouteNodeId, EdgeType)>>,
    destination: Option<RouteNodeId>,
}

impl SearchTree {
    pub fn minutes(&self, node: &RouteNodeId) -> Option<u32> {
        self.minutes.get(node.0).copied().flatten()
    }

    pub fn predecessor(&self, node: &RouteNodeId) -> Option<(RouteNodeId, EdgeType)> {
        self.predecessors.get(node.0).copied().flatten()
    }

    /// the first settled node of the target station, if a target was given
    /// and it was reached.
    pub fn destination(&self) -> Option<RouteNodeId> {
        self.destination
    }

    /// nodes from a source to `node` in travel order, each paired with the
    /// type of the edge used to arrive there. the source has no edge type.
    pub fn path_to(&self, node: &RouteNodeId) -> Vec<(RouteNodeId, Option<EdgeType>)> {
        let mut path = vec![];
        let mut current = *node;
        while let Some((prev, edge_type)) = self.predecessor(&current) {
            path.push((current, Some(edge_type)));
            current = prev;
        }
        path.push((current, None));
        path.reverse();
        path
    }
}

/// frontier entries pop by fewest minutes first, then by lowest node id,
/// which keeps equal-cost expansions reproducible.
#[derive(Clone, Copy, Eq, PartialEq)]
struct FrontierElement {
    minutes: u32,
    node: RouteNodeId,
}

impl Ord for FrontierElement {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .minutes
            .cmp(&self.minutes)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for FrontierElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// runs a multi-source Dijkstra search. every source starts at zero minutes.
/// with a target, the search stops once any node of that station is settled;
/// otherwise it settles every reachable node. nodes only reachable by paths
/// longer than `u32::MAX` minutes are left unreached.
pub fn run_search(
    graph: &RouteGraph,
    sources: &[RouteNodeId],
    target: Option<StationIndex>,
) -> SearchTree {
    let n = graph.n_nodes();
    let mut tree = SearchTree {
        minutes: vec![None; n],
        predecessors: vec![None; n],
        destination: None,
    };
    let mut settled = vec![false; n];
    let mut frontier: BinaryHeap<FrontierElement> = BinaryHeap::new();

    for source in sources.iter().filter(|s| s.0 < n) {
        tree.minutes[source.0] = Some(0);
        frontier.push(FrontierElement {
            minutes: 0,
            node: *source,
        });
    }

    while let Some(FrontierElement { minutes, node }) = frontier.pop() {
        if settled[node.0] {
            continue;
        }
        settled[node.0] = true;

        if let Some(t) = target {
            if graph.node(&node).map(|n| n.station) == Some(t) {
                tree.destination = Some(node);
                break;
            }
        }

        for edge in graph.out_edges(&node) {
            if settled[edge.dst.0] {
                continue;
            }
            // a path whose minutes overflow u32 is treated as unreachable
            let Some(next) = minutes.checked_add(edge.minutes) else {
                log::debug!("travel minutes overflow past node {node}, skipping edge");
                continue;
            };
            let improves = match tree.minutes[edge.dst.0] {
                Some(best) => next < best,
                None => true,
            };
            if improves {
                tree.minutes[edge.dst.0] = Some(next);
                tree.predecessors[edge.dst.0] = Some((node, edge.edge_type));
                frontier.push(FrontierElement {
                    minutes: next,
                    node: edge.dst,
                });
            }
        }
    }

    tree
}

/// minimum travel minutes between two stations by name. returns None if
/// either station is not in the graph or no path connects them.
pub fn shortest_time(graph: &RouteGraph, src: &str, dst: &str) -> Option<u32> {
    let src_index = graph.station_index(src)?;
    let dst_index = graph.station_index(dst)?;
    if src_index == dst_index {
        return Some(0);
    }
    let tree = run_search(graph, graph.station_nodes(&src_index), Some(dst_index));
    tree.destination().and_then(|d| tree.minutes(&d))
}

/// minimum travel minutes from a set of origin stations to every station.
/// with several origins, each station takes the time from its nearest origin.
pub fn travel_times_from(graph: &RouteGraph, origins: &[StationIndex]) -> StationTimes {
    let sources = origins
        .iter()
        .flat_map(|o| graph.station_nodes(o).iter().copied())
        .collect::<Vec<_>>();
    let tree = run_search(graph, &sources, None);
    let times = graph
        .station_indices()
        .map(|s| {
            graph
                .station_nodes(&s)
                .iter()
                .filter_map(|n| tree.minutes(n))
                .min()
        })
        .collect();
    StationTimes::new(times)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::RouteCosts;
    use crate::model::{TransitLine, TransitNetwork};

    fn mock_graph() -> RouteGraph {
        let network = TransitNetwork::new(vec![
            TransitLine::new("L1", ["X", "Y", "Z"]),
            TransitLine::new("L2", ["Z", "W"]),
        ])
        .expect("test invariant failed: network should be valid");
        RouteGraph::new(&network, RouteCosts::new(2, 6))
    }

    #[test]
    fn test_ride_hops() {
        let graph = mock_graph();
        assert_eq!(shortest_time(&graph, "X", "Y"), Some(2));
        assert_eq!(shortest_time(&graph, "X", "Z"), Some(4));
    }

    #[test]
    fn test_transfer_penalty_applied() {
        let graph = mock_graph();
        assert_eq!(shortest_time(&graph, "X", "W"), Some(12));
    }

    #[test]
    fn test_same_station_is_zero() {
        let graph = mock_graph();
        for station in ["X", "Y", "Z", "W"] {
            assert_eq!(shortest_time(&graph, station, station), Some(0));
        }
    }

    #[test]
    fn test_symmetric() {
        let graph = mock_graph();
        for a in ["X", "Y", "Z", "W"] {
            for b in ["X", "Y", "Z", "W"] {
                assert_eq!(shortest_time(&graph, a, b), shortest_time(&graph, b, a));
            }
        }
    }

    #[test]
    fn test_unknown_station_has_no_route() {
        let graph = mock_graph();
        assert_eq!(shortest_time(&graph, "Nowhere", "X"), None);
        assert_eq!(shortest_time(&graph, "X", "Nowhere"), None);
        assert_eq!(shortest_time(&graph, "Nowhere", "Nowhere"), None);
    }

    #[test]
    fn test_disconnected_lines() {
        let network = TransitNetwork::new(vec![
            TransitLine::new("L1", ["A", "B"]),
            TransitLine::new("L2", ["C", "D"]),
        ])
        .expect("test invariant failed: network should be valid");
        let graph = RouteGraph::new(&network, RouteCosts::default());
        assert_eq!(shortest_time(&graph, "A", "D"), None);
        assert_eq!(shortest_time(&graph, "C", "D"), Some(2));
    }

    #[test]
    fn test_transfer_avoided_when_cheaper_to_ride() {
        // both lines reach C, but staying on L1 avoids the transfer
        let network = TransitNetwork::new(vec![
            TransitLine::new("L1", ["A", "B", "C", "D"]),
            TransitLine::new("L2", ["A", "C"]),
        ])
        .expect("test invariant failed: network should be valid");
        let graph = RouteGraph::new(&network, RouteCosts::new(2, 6));
        // L2 rides A->C in one hop with no transfer since A is a source on both lines
        assert_eq!(shortest_time(&graph, "A", "C"), Some(2));
        // B->D stays on L1
        assert_eq!(shortest_time(&graph, "B", "D"), Some(4));
    }

    #[test]
    fn test_travel_times_from() {
        let graph = mock_graph();
        let x = graph.station_index("X").expect("X should exist");
        let times = travel_times_from(&graph, &[x]);
        let lookup = |name: &str| {
            let idx = graph.station_index(name).expect("station should exist");
            times.get(&idx)
        };
        assert_eq!(lookup("X"), Some(0));
        assert_eq!(lookup("Y"), Some(2));
        assert_eq!(lookup("Z"), Some(4));
        assert_eq!(lookup("W"), Some(12));
    }

    #[test]
    fn test_travel_times_from_many_origins() {
        let graph = mock_graph();
        let x = graph.station_index("X").expect("X should exist");
        let w = graph.station_index("W").expect("W should exist");
        let times = travel_times_from(&graph, &[x, w]);
        let z = graph.station_index("Z").expect("Z should exist");
        let y = graph.station_index("Y").expect("Y should exist");
        assert_eq!(times.get(&z), Some(2));
        assert_eq!(times.get(&y), Some(2));
    }

    #[test]
    fn test_overflowing_path_is_unreachable() {
        let network = TransitNetwork::new(vec![TransitLine::new("L1", ["A", "B", "C", "D"])])
            .expect("test invariant failed: network should be valid");
        let graph = RouteGraph::new(&network, RouteCosts::new(2_000_000_000, 6));
        assert_eq!(shortest_time(&graph, "A", "B"), Some(2_000_000_000));
        assert_eq!(shortest_time(&graph, "A", "C"), Some(4_000_000_000));
        assert_eq!(shortest_time(&graph, "A", "D"), None);
        assert_eq!(shortest_time(&graph, "D", "A"), None);

        let a = graph.station_index("A").expect("A should exist");
        let d = graph.station_index("D").expect("D should exist");
        assert_eq!(travel_times_from(&graph, &[a]).get(&d), None);
    }

    #[test]
    fn test_equal_cost_routes_pop_lowest_node_first() {
        // nodes: 0 = (L1, A), 1 = (L1, B), 2 = (L1, C), 3 = (L2, A), 4 = (L2, D), 5 = (L2, C)
        let network = TransitNetwork::new(vec![
            TransitLine::new("L1", ["A", "B", "C"]),
            TransitLine::new("L2", ["A", "D", "C"]),
        ])
        .expect("test invariant failed: network should be valid");
        let graph = RouteGraph::new(&network, RouteCosts::new(2, 6));
        let a = graph.station_index("A").expect("A should exist");
        let c = graph.station_index("C").expect("C should exist");
        let tree = run_search(&graph, graph.station_nodes(&a), Some(c));
        let dst = tree.destination().expect("C should be reachable");
        assert_eq!(dst, RouteNodeId(2));
        let nodes = tree
            .path_to(&dst)
            .into_iter()
            .map(|(n, _)| n.0)
            .collect::<Vec<_>>();
        assert_eq!(nodes, vec![0, 1, 2]);
    }

    #[test]
    fn test_path_to_records_edge_types() {
        let graph = mock_graph();
        let x = graph.station_index("X").expect("X should exist");
        let w = graph.station_index("W").expect("W should exist");
        let tree = run_search(&graph, graph.station_nodes(&x), Some(w));
        let dst = tree.destination().expect("W should be reachable");
        let hops = tree
            .path_to(&dst)
            .into_iter()
            .map(|(_, et)| et)
            .collect::<Vec<_>>();
        assert_eq!(
            hops,
            vec![
                None,
                Some(EdgeType::Ride),
                Some(EdgeType::Ride),
                Some(EdgeType::Transfer),
                Some(EdgeType::Ride)
            ]
        );
    }
}
