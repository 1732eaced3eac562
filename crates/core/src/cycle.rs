use common::types::{CycleTrace, Vertex};

use super::graph::GraphMatrix;

/// Reported when no component contains a cycle.
pub const NO_CYCLE: &str = "0";

/// One level of the depth-first search.
struct Frame {
    vertex: Vertex,
    /// Vertex this frame was entered from; `None` for a component root.
    parent: Option<Vertex>,
    /// Next column of `matrix[vertex]` to examine.
    cursor: Vertex,
}

/// Searches each unvisited vertex in ascending order for a cycle.
///
/// The search excludes the edge back to the immediate parent, so `u <-> v`
/// alone is not a cycle. Any other edge to an already visited vertex is.
/// A self-loop counts as a cycle.
///
/// On detection the returned trace is the chain of active DFS frames,
/// innermost first. It is not guaranteed to list the full cycle.
pub fn find_cycle(graph: &GraphMatrix) -> Option<CycleTrace> {
    let mut visited = vec![false; graph.vertices()];

    (0..graph.vertices()).find_map(|root| {
        if visited[root] {
            return None;
        }
        search_from(graph, root, &mut visited)
    })
}

fn search_from(graph: &GraphMatrix, root: Vertex, visited: &mut [bool]) -> Option<CycleTrace> {
    let num_vertices = graph.vertices();

    visited[root] = true;
    let mut stack = vec![Frame {
        vertex: root,
        parent: None,
        cursor: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        if frame.cursor == num_vertices {
            stack.pop();
            continue;
        }

        let (u, v, parent) = (frame.vertex, frame.cursor, frame.parent);
        frame.cursor += 1;

        if !graph.has_edge(u, v) {
            continue;
        }

        if !visited[v] {
            visited[v] = true;
            stack.push(Frame {
                vertex: v,
                parent: Some(u),
                cursor: 0,
            });
        } else if parent != Some(v) {
            let vertices = stack.iter().rev().map(|frame| frame.vertex).collect();
            return Some(CycleTrace { vertices });
        }
    }

    None
}

/// Returns `"The cycle is: v_k->...->v_0"` or `"0"`.
pub fn is_contains_cycle(graph: &GraphMatrix) -> String {
    match find_cycle(graph) {
        Some(trace) => trace.to_string(),
        None => NO_CYCLE.to_string(),
    }
}
