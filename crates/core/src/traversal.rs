use common::types::Vertex;

use super::graph::GraphMatrix;

/// Vertices reached by a depth-first traversal over directed out-edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reachability {
    visited: Vec<bool>,
    predecessor: Vec<Option<Vertex>>,
}

impl Reachability {
    /// Runs an explicit-stack DFS from `start`, following only `u -> v` with
    /// `matrix[u][v] != 0`.
    ///
    /// A vertex is marked when it is pushed, so each vertex enters the stack
    /// at most once. `start` must be `< graph.vertices()`; an out-of-range
    /// start visits nothing.
    pub fn from_source(graph: &GraphMatrix, start: Vertex) -> Self {
        let mut visited = vec![false; graph.vertices()];
        let mut predecessor = vec![None; graph.vertices()];
        if start >= visited.len() {
            return Self {
                visited,
                predecessor,
            };
        }

        let mut stack = Vec::with_capacity(visited.len());
        visited[start] = true;
        stack.push(start);

        while let Some(u) = stack.pop() {
            for v in graph.out_neighbors(u) {
                if !visited[v] {
                    visited[v] = true;
                    predecessor[v] = Some(u);
                    stack.push(v);
                }
            }
        }

        Self {
            visited,
            predecessor,
        }
    }

    pub fn is_visited(&self, v: Vertex) -> bool {
        self.visited.get(v).copied().unwrap_or(false)
    }

    /// True iff the traversal reached every vertex. False for an empty graph,
    /// which has no source to start from.
    pub fn covers_all(&self) -> bool {
        !self.visited.is_empty() && self.visited.iter().all(|&seen| seen)
    }

    #[cfg(test)]
    fn visited_count(&self) -> usize {
        self.visited.iter().filter(|&&seen| seen).count()
    }

    /// Path from the traversal source to `end` along the DFS tree, or `None`
    /// if `end` was not reached.
    pub fn tree_path_to(&self, end: Vertex) -> Option<Vec<Vertex>> {
        if !self.is_visited(end) {
            return None;
        }

        let mut path = vec![end];
        let mut current = end;
        while let Some(prev) = self.predecessor[current] {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        Some(path)
    }
}

#[cfg(test)]
mod traversal_tests {
    use super::*;

    #[test]
    fn follows_direction_only() {
        // 0 -> 1 -> 2, nothing leads back to 0.
        let g = GraphMatrix::from_matrix(vec![vec![0, 1, 0], vec![0, 0, 1], vec![0, 0, 0]])
            .unwrap();

        let from_zero = Reachability::from_source(&g, 0);
        assert!(from_zero.covers_all());

        let from_one = Reachability::from_source(&g, 1);
        assert!(!from_one.is_visited(0));
        assert!(from_one.is_visited(1));
        assert!(from_one.is_visited(2));
        assert_eq!(from_one.visited_count(), 2);
    }

    #[test]
    fn tree_path_follows_discovery() {
        // DFS from 0 pushes 1 and 2; 2 is popped first and discovers 3.
        let g = GraphMatrix::from_matrix(vec![
            vec![0, 1, 1, 0],
            vec![0, 0, 0, 1],
            vec![0, 0, 0, 1],
            vec![0, 0, 0, 0],
        ])
        .unwrap();
        let reach = Reachability::from_source(&g, 0);

        assert_eq!(reach.tree_path_to(0), Some(vec![0]));
        assert_eq!(reach.tree_path_to(1), Some(vec![0, 1]));
        assert_eq!(reach.tree_path_to(3), Some(vec![0, 2, 3]));

        let from_three = Reachability::from_source(&g, 3);
        assert_eq!(from_three.tree_path_to(0), None);
    }

    #[test]
    fn negative_weights_count_as_edges() {
        let g = GraphMatrix::from_matrix(vec![vec![0, -5], vec![0, 0]]).unwrap();
        assert!(Reachability::from_source(&g, 0).covers_all());
    }

    #[test]
    fn out_of_range_start_visits_nothing() {
        let g = GraphMatrix::from_matrix(vec![vec![0, 1], vec![1, 0]]).unwrap();
        let reach = Reachability::from_source(&g, 9);
        assert_eq!(reach.visited_count(), 0);
        assert!(!reach.is_visited(9));
    }

    #[test]
    fn long_chain_does_not_recurse() {
        let n = 1000;
        let matrix = (0..n)
            .map(|u| (0..n).map(|v| if v == u + 1 { 1 } else { 0 }).collect())
            .collect();
        let g = GraphMatrix::from_matrix(matrix).unwrap();

        assert!(Reachability::from_source(&g, 0).covers_all());
    }
}
