use std::fmt;

/// Index of a vertex, `0..n`.
pub type Vertex = usize;

/// Edge weight stored in an adjacency matrix cell. Zero means "no edge".
pub type Weight = i64;

/// Row-major square matrix: `matrix[u][v]` is the weight of `u -> v`.
pub type AdjacencyMatrix = Vec<Vec<Weight>>;

/// Negative-weight cycle reported by a solver.
///
/// `path` lists vertices in forward edge order; the last vertex has an edge
/// back to the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NegativeCycle {
    pub path: Vec<Vertex>,
}

impl fmt::Display for NegativeCycle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Negative cycle found: {}", format_arrow_path(&self.path))
    }
}

/// Depth-first chain that ran into a back edge, innermost vertex first.
///
/// This is the active search chain at the moment of detection, not
/// necessarily the full set of vertices on the cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleTrace {
    pub vertices: Vec<Vertex>,
}

impl fmt::Display for CycleTrace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "The cycle is: {}", format_arrow_path(&self.vertices))
    }
}

/// Two-coloring of a graph. Both sides keep discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bipartition {
    pub left: Vec<Vertex>,
    pub right: Vec<Vertex>,
}

impl fmt::Display for Bipartition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "The graph is bipartite: A={{{}}}, B={{{}}}",
            format_vertex_set(&self.left),
            format_vertex_set(&self.right)
        )
    }
}

/// Joins vertices with `->`, e.g. `0->1->2`.
pub fn format_arrow_path(path: &[Vertex]) -> String {
    path.iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("->")
}

/// Joins vertices with `, `, e.g. `0, 2, 4`.
pub fn format_vertex_set(set: &[Vertex]) -> String {
    set.iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
