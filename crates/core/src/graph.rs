use std::fmt;

use common::error::GraphError;
use common::types::{AdjacencyMatrix, Vertex, Weight};

/// Directed, integer-weighted graph stored as a square adjacency matrix.
///
/// - `matrix[u][v] != 0` → edge `u -> v` with weight `matrix[u][v]`
/// - `matrix[u][v] == 0` → no edge
///
/// A default-constructed graph is empty (`vertices() == 0`). It only becomes
/// usable through [`GraphMatrix::load`], which validates the whole matrix
/// before replacing any state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphMatrix {
    matrix: AdjacencyMatrix,
    vertices: usize,
}

impl GraphMatrix {
    /// Creates an empty graph with no vertices.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from a square matrix in one step.
    ///
    /// # Errors
    /// Returns `GraphError::InvalidGraph` if `matrix` is empty or not square.
    pub fn from_matrix(matrix: AdjacencyMatrix) -> Result<Self, GraphError> {
        let mut graph = Self::new();
        graph.load(matrix)?;
        Ok(graph)
    }

    /// Replaces the graph with `matrix`.
    ///
    /// Validation happens before any mutation, so on error the previous
    /// matrix and vertex count remain intact.
    ///
    /// # Errors
    /// Returns `GraphError::InvalidGraph` if `matrix` is empty or any row's
    /// length differs from the row count.
    pub fn load(&mut self, matrix: AdjacencyMatrix) -> Result<(), GraphError> {
        if matrix.is_empty() {
            return Err(GraphError::empty());
        }
        if !Self::is_valid_graph(&matrix) {
            return Err(GraphError::not_square(matrix.len()));
        }

        self.vertices = matrix.len();
        self.matrix = matrix;
        Ok(())
    }

    /// Returns true iff `matrix` is non-empty and every row has exactly as
    /// many entries as there are rows.
    pub fn is_valid_graph(matrix: &[Vec<Weight>]) -> bool {
        let rows = matrix.len();
        rows != 0 && matrix.iter().all(|row| row.len() == rows)
    }

    pub fn vertices(&self) -> usize {
        self.vertices
    }

    pub fn is_empty(&self) -> bool {
        self.vertices == 0
    }

    pub fn adjacency_matrix(&self) -> &AdjacencyMatrix {
        &self.matrix
    }

    /// Weight of `u -> v`, zero when there is no edge.
    ///
    /// # Errors
    /// Returns `GraphError::VertexOutOfBounds` if either index is `>= vertices()`.
    pub fn weight(&self, u: Vertex, v: Vertex) -> Result<Weight, GraphError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        Ok(self.matrix[u][v])
    }

    /// Returns true if `u -> v` exists. Out-of-range indices have no edges.
    pub fn has_edge(&self, u: Vertex, v: Vertex) -> bool {
        self.matrix
            .get(u)
            .and_then(|row| row.get(v))
            .is_some_and(|&w| w != 0)
    }

    /// Targets of the out-edges of `u`, in ascending order.
    pub fn out_neighbors(&self, u: Vertex) -> impl Iterator<Item = Vertex> + '_ {
        self.matrix
            .get(u)
            .into_iter()
            .flat_map(|row| row.iter().enumerate())
            .filter(|&(_, &w)| w != 0)
            .map(|(v, _)| v)
    }

    /// Number of nonzero cells, self-loops included.
    pub fn edge_count(&self) -> usize {
        self.matrix
            .iter()
            .map(|row| row.iter().filter(|&&w| w != 0).count())
            .sum()
    }

    /// Number of cells with a positive weight.
    pub fn positive_edge_count(&self) -> usize {
        self.cells().filter(|&w| w > 0).count()
    }

    /// One-line description: `"Graph with N vertices and M edges."`, where M
    /// counts positive weights only.
    pub fn summary(&self) -> String {
        format!(
            "Graph with {} vertices and {} edges.",
            self.vertices,
            self.positive_edge_count()
        )
    }

    pub fn check_vertex(&self, v: Vertex) -> Result<(), GraphError> {
        if v >= self.vertices {
            return Err(GraphError::VertexOutOfBounds(v));
        }
        Ok(())
    }

    pub(crate) fn check_same_size(&self, other: &GraphMatrix) -> Result<(), GraphError> {
        if self.vertices != other.vertices {
            return Err(GraphError::DimensionMismatch {
                left: self.vertices,
                right: other.vertices,
            });
        }
        Ok(())
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut Weight> {
        self.matrix.iter_mut().flat_map(|row| row.iter_mut())
    }

    pub(crate) fn cells(&self) -> impl Iterator<Item = Weight> + '_ {
        self.matrix.iter().flat_map(|row| row.iter().copied())
    }

    /// Builds a graph whose invariants the caller already guarantees.
    pub(crate) fn from_parts(matrix: AdjacencyMatrix) -> Self {
        let vertices = matrix.len();
        Self { matrix, vertices }
    }
}

impl TryFrom<AdjacencyMatrix> for GraphMatrix {
    type Error = GraphError;

    fn try_from(matrix: AdjacencyMatrix) -> Result<Self, Self::Error> {
        Self::from_matrix(matrix)
    }
}

/// Each row as `[a, b, c]`, rows joined by `\n`, no trailing newline.
impl fmt::Display for GraphMatrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, row) in self.matrix.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", value)?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
