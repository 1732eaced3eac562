use super::graph::GraphMatrix;
use super::traversal::Reachability;

/// Returns true iff every vertex is reachable from vertex 0 along directed
/// out-edges.
///
/// A single-vertex graph is trivially connected. The empty graph is not: it
/// has no vertex 0 to start from.
pub fn is_connected(graph: &GraphMatrix) -> bool {
    Reachability::from_source(graph, 0).covers_all()
}
