pub mod bipartite;
pub mod connectivity;
pub mod cycle;
pub mod graph;
pub mod ops;
pub mod path;
pub mod solver;
pub mod traits;
pub mod traversal;

pub use bipartite::{bipartition, is_bipartite};
pub use connectivity::is_connected;
pub use cycle::{find_cycle, is_contains_cycle};
pub use graph::GraphMatrix;
pub use path::{find_path, shortest_path};
pub use solver::{BellmanFordSolver, negative_cycle};
pub use traits::NegativeCycleSolver;
