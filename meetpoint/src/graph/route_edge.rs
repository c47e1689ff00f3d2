use super::{EdgeType, RouteNodeId};

/// a directed, weighted link to another route node.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct RouteEdge {
    pub dst: RouteNodeId,
    pub edge_type: EdgeType,
    pub minutes: u32,
}
