use std::collections::VecDeque;

use common::types::{Bipartition, Vertex};

use super::graph::GraphMatrix;

/// Reported when the graph cannot be two-colored.
pub const NOT_BIPARTITE: &str = "0";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl Side {
    fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Two-colors the graph with one BFS per undiscovered component.
///
/// Every component root goes to the left side. Each newly discovered vertex
/// takes the side opposite its discoverer and is appended to that side, so
/// both sides keep discovery order across components.
///
/// Returns `None` if any vertex has a self-loop, or if any out-edge joins
/// two vertices of the same side.
pub fn bipartition(graph: &GraphMatrix) -> Option<Bipartition> {
    let num_vertices = graph.vertices();
    if (0..num_vertices).any(|v| graph.has_edge(v, v)) {
        return None;
    }

    let mut side: Vec<Option<Side>> = vec![None; num_vertices];
    let mut result = Bipartition::default();
    let mut queue: VecDeque<(Vertex, Side)> = VecDeque::with_capacity(num_vertices);

    for root in 0..num_vertices {
        if side[root].is_some() {
            continue;
        }
        side[root] = Some(Side::Left);
        result.left.push(root);
        queue.push_back((root, Side::Left));

        while let Some((u, u_side)) = queue.pop_front() {
            for v in graph.out_neighbors(u) {
                let current = side[v];
                match current {
                    None => {
                        let v_side = u_side.opposite();
                        side[v] = Some(v_side);
                        match v_side {
                            Side::Left => result.left.push(v),
                            Side::Right => result.right.push(v),
                        }
                        queue.push_back((v, v_side));
                    }
                    Some(v_side) if v_side == u_side => return None,
                    Some(_) => {}
                }
            }
        }
    }

    Some(result)
}

/// Returns `"The graph is bipartite: A={...}, B={...}"` or `"0"`.
pub fn is_bipartite(graph: &GraphMatrix) -> String {
    match bipartition(graph) {
        Some(sides) => sides.to_string(),
        None => NOT_BIPARTITE.to_string(),
    }
}
