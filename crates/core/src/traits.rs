use super::graph::GraphMatrix;
use common::types::NegativeCycle;

/// Trait for graph solvers capable of detecting negative cycles.
pub trait NegativeCycleSolver {
    /// Returns `Some(cycle)` if the solver finds a negative cycle, `None` otherwise.
    fn find_negative_cycle(&self, graph: &GraphMatrix) -> Option<NegativeCycle>;
}
