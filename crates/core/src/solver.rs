use super::graph::GraphMatrix;
use super::traits::NegativeCycleSolver;
use common::types::{NegativeCycle, Vertex, Weight};

/// Message reported when no negative cycle is detected.
pub const NO_NEGATIVE_CYCLE: &str = "No negative cycle found.";

/// Single-source Bellman-Ford from vertex 0.
///
/// Only cycles reachable from vertex 0 with a finite distance are detected.
/// A negative cycle in a component that vertex 0 cannot reach is reported as
/// no cycle.
pub struct BellmanFordSolver;

impl BellmanFordSolver {
    /// Runs `n - 1` relaxation rounds over every edge in row-major order.
    ///
    /// # Returns
    /// `(distance, parent)` where `distance[v] == None` means unreachable and
    /// `parent[v]` is the vertex that last relaxed `v`.
    pub fn relax(&self, graph: &GraphMatrix) -> (Vec<Option<Weight>>, Vec<Option<Vertex>>) {
        let num_vertices = graph.vertices();
        let mut distance = vec![None; num_vertices];
        let mut parent = vec![None; num_vertices];

        if num_vertices == 0 {
            return (distance, parent);
        }
        distance[0] = Some(0);

        let matrix = graph.adjacency_matrix();
        for _ in 0..num_vertices - 1 {
            for u in 0..num_vertices {
                for v in graph.out_neighbors(u) {
                    // Re-read per edge: a self-loop may have just lowered distance[u].
                    let Some(du) = distance[u] else {
                        break;
                    };
                    let candidate = du.saturating_add(matrix[u][v]);
                    if distance[v].is_none_or(|dv| candidate < dv) {
                        distance[v] = Some(candidate);
                        parent[v] = Some(u);
                    }
                }
            }
        }

        (distance, parent)
    }

    /// Rebuilds the cycle closed by a still-relaxable edge `u -> v`.
    ///
    /// Walks `parent` pointers back from `v` until reaching `u`, then reverses
    /// the walk so the result reads `u -> ... -> v`. Hitting a vertex without a
    /// parent first means no cycle is formed.
    ///
    /// If the walk revisits a vertex without reaching `u`, the predecessor
    /// chain loops elsewhere. In that case the loop itself is returned.
    pub fn reconstruct_cycle(
        &self,
        u: Vertex,
        v: Vertex,
        parent: &[Option<Vertex>],
    ) -> Option<Vec<Vertex>> {
        let num_vertices = parent.len();
        let mut cycle = Vec::new();
        let mut current = v;

        while current != u {
            if cycle.len() > num_vertices {
                return self.loop_through(v, parent);
            }
            cycle.push(current);
            current = parent[current]?;
        }

        cycle.push(u);
        cycle.reverse();
        Some(cycle)
    }

    /// Traces `n` predecessors back from `start` to land inside the loop, then
    /// collects that loop in forward order.
    fn loop_through(&self, start: Vertex, parent: &[Option<Vertex>]) -> Option<Vec<Vertex>> {
        let mut trace_vertex = start;
        for _ in 0..parent.len() {
            trace_vertex = parent[trace_vertex]?;
        }

        let cycle_start = trace_vertex;
        let mut cycle = vec![cycle_start];
        let mut current = parent[cycle_start]?;
        while current != cycle_start {
            cycle.push(current);
            current = parent[current]?;
        }

        cycle.reverse();
        Some(cycle)
    }
}

impl NegativeCycleSolver for BellmanFordSolver {
    /// After relaxation, scans every edge once more. The first edge that still
    /// relaxes decides the outcome: its reconstructed cycle, or no cycle if
    /// the reconstruction hits a vertex without a parent.
    fn find_negative_cycle(&self, graph: &GraphMatrix) -> Option<NegativeCycle> {
        let (distance, parent) = self.relax(graph);
        let matrix = graph.adjacency_matrix();

        for u in 0..graph.vertices() {
            let Some(du) = distance[u] else {
                continue;
            };
            for v in graph.out_neighbors(u) {
                let candidate = du.saturating_add(matrix[u][v]);
                if distance[v].is_none_or(|dv| candidate < dv) {
                    return self
                        .reconstruct_cycle(u, v, &parent)
                        .map(|path| NegativeCycle { path });
                }
            }
        }

        None
    }
}

/// Runs [`BellmanFordSolver`] and renders the literal report.
///
/// Returns `"Negative cycle found: v0->...->vk"` or `"No negative cycle found."`.
pub fn negative_cycle(graph: &GraphMatrix) -> String {
    match BellmanFordSolver.find_negative_cycle(graph) {
        Some(cycle) => cycle.to_string(),
        None => NO_NEGATIVE_CYCLE.to_string(),
    }
}

#[cfg(test)]
mod bellman_ford_tests {
    use super::*;
    use common::types::AdjacencyMatrix;

    fn graph(matrix: AdjacencyMatrix) -> GraphMatrix {
        GraphMatrix::from_matrix(matrix).unwrap()
    }

    #[test]
    fn no_negative_cycle_with_positive_weights() {
        let g = graph(vec![vec![0, 1, 2], vec![2, 0, 3], vec![1, 4, 0]]);
        assert_eq!(negative_cycle(&g), "No negative cycle found.");

        let g = graph(vec![vec![0, 1], vec![1, 0]]);
        assert_eq!(negative_cycle(&g), "No negative cycle found.");
    }

    #[test]
    fn directed_triangle_reports_partial_cycle() {
        let g = graph(vec![vec![0, -1, 0], vec![0, 0, -1], vec![-1, 0, 0]]);

        let report = negative_cycle(&g);
        assert!(report.contains("Negative cycle found:"));
        // The first still-relaxable edge is 0 -> 1 and parent[1] == 0.
        assert_eq!(report, "Negative cycle found: 0->1");
    }

    #[test]
    fn detects_cycles_in_mixed_weight_graphs() {
        let fixtures: Vec<(AdjacencyMatrix, &str)> = vec![
            (
                vec![
                    vec![0, 1, 0, 0, 0, 0, 0, 0, 0],
                    vec![1, 0, -10, 0, 0, 0, 0, 0, 0],
                    vec![0, -10, 0, 20, 0, 0, 0, 0, 0],
                    vec![0, 0, 20, 0, -30, 0, 0, 0, 0],
                    vec![0, 0, 0, -30, 0, 40, 0, 0, 0],
                    vec![0, 0, 0, 0, 40, 0, -50, 0, 10],
                    vec![0, 0, 0, 0, 0, -50, 0, 60, 0],
                    vec![0, 0, 0, 0, 0, 0, 60, 0, -70],
                    vec![0, 0, 0, 0, 0, 10, 0, -70, 0],
                ],
                "Negative cycle found: 1->0",
            ),
            (
                vec![vec![0, -1, 2], vec![3, 0, 1], vec![-4, 5, 0]],
                "Negative cycle found: 0->1",
            ),
            (
                vec![
                    vec![0, -1, 2, 0, 1, 2],
                    vec![3, 0, -2, 1, 0, 3],
                    vec![4, 5, 0, 3, 2, 4],
                    vec![0, -4, 0, 0, 3, 5],
                    vec![0, 1, 0, 0, 0, 0],
                    vec![0, 0, 0, 0, 0, 0],
                ],
                "Negative cycle found: 1->2->0",
            ),
        ];

        for (matrix, expected) in fixtures {
            assert_eq!(negative_cycle(&graph(matrix)), expected);
        }
    }

    #[test]
    fn reported_path_follows_edges() {
        let g = graph(vec![vec![0, -1, 2], vec![3, 0, 1], vec![-4, 5, 0]]);
        let cycle = BellmanFordSolver.find_negative_cycle(&g).unwrap();

        for pair in cycle.path.windows(2) {
            assert!(g.has_edge(pair[0], pair[1]));
        }
    }

    #[test]
    fn unreachable_negative_cycle_is_not_detected() {
        // 1 <-> 2 is negative, but vertex 0 has no out-edges.
        let g = graph(vec![vec![0, 0, 0], vec![0, 0, -1], vec![0, -1, 0]]);
        assert_eq!(negative_cycle(&g), "No negative cycle found.");
    }

    #[test]
    fn undirected_negative_edge_is_a_two_vertex_cycle() {
        let g = graph(vec![vec![0, -1], vec![-1, 0]]);
        assert!(BellmanFordSolver.find_negative_cycle(&g).is_some());
    }

    #[test]
    fn negative_self_loop_on_source() {
        let g = graph(vec![vec![-1]]);
        assert_eq!(negative_cycle(&g), "Negative cycle found: 0");
    }

    #[test]
    fn empty_graph_has_no_cycle() {
        assert_eq!(negative_cycle(&GraphMatrix::new()), "No negative cycle found.");
    }

    #[test]
    fn relax_reports_unreachable_as_none() {
        let g = graph(vec![vec![0, 4, 0], vec![0, 0, -1], vec![0, 0, 0]]);
        let (distance, parent) = BellmanFordSolver.relax(&g);

        assert_eq!(distance, vec![Some(0), Some(4), Some(3)]);
        assert_eq!(parent, vec![None, Some(0), Some(1)]);

        let isolated = graph(vec![vec![0, 0], vec![0, 0]]);
        let (distance, _) = BellmanFordSolver.relax(&isolated);
        assert_eq!(distance, vec![Some(0), None]);
    }

    #[test]
    fn reconstruct_cycle_walks_parents() {
        let parent = vec![Some(2), Some(0), Some(1)];
        let cycle = BellmanFordSolver.reconstruct_cycle(2, 0, &parent).unwrap();
        assert_eq!(cycle, vec![2, 0]);

        let cycle = BellmanFordSolver.reconstruct_cycle(0, 2, &parent).unwrap();
        assert_eq!(cycle, vec![0, 1, 2]);
    }

    #[test]
    fn reconstruct_cycle_bails_on_missing_parent() {
        let parent = vec![None, Some(0), Some(1)];
        assert_eq!(BellmanFordSolver.reconstruct_cycle(2, 1, &parent), None);
    }

    #[test]
    fn reconstruct_cycle_escapes_foreign_loop() {
        // Walking back from 3 cycles through 1 <-> 2 and never reaches 0.
        let parent = vec![None, Some(2), Some(1), Some(1)];
        let cycle = BellmanFordSolver.reconstruct_cycle(0, 3, &parent).unwrap();

        assert_eq!(cycle.len(), 2);
        assert!(cycle.contains(&1) && cycle.contains(&2));
    }

    #[test]
    fn large_circular_graph_negative_cycle() {
        let n = 200;
        let matrix = (0..n)
            .map(|u| {
                (0..n)
                    .map(|v| if v == (u + 1) % n { -1 } else { 0 })
                    .collect()
            })
            .collect();
        let g = graph(matrix);

        let cycle = BellmanFordSolver.find_negative_cycle(&g).unwrap();
        assert!(!cycle.path.is_empty());
        assert!(cycle.path.len() <= n);
    }
}
