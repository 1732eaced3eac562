use common::error::GraphError;
use common::types::{Vertex, format_arrow_path};

use super::graph::GraphMatrix;
use super::solver::BellmanFordSolver;
use super::traits::NegativeCycleSolver;
use super::traversal::Reachability;

/// Reported when no path is produced.
pub const NO_PATH: &str = "-1";

/// Reconstructs a path from `start` to `end`.
///
/// The search is gated, not weighted:
/// 1. A DFS from `start` must reach every vertex.
/// 2. [`BellmanFordSolver`] must find no negative cycle anywhere.
///
/// If either gate fails the result is `Ok(None)`. Otherwise the path is
/// rebuilt backward from `end`: the predecessor of the current vertex is the
/// lowest-index visited `i` with an edge `i -> current`. Edge weights play no
/// part in the choice.
///
/// Should the lowest-index chain revisit a vertex before arriving at `start`,
/// the DFS tree path is returned instead.
///
/// # Errors
/// Returns `GraphError::VertexOutOfBounds` if `start` or `end` is not a vertex.
pub fn find_path(
    graph: &GraphMatrix,
    start: Vertex,
    end: Vertex,
) -> Result<Option<Vec<Vertex>>, GraphError> {
    graph.check_vertex(start)?;
    graph.check_vertex(end)?;

    let reach = Reachability::from_source(graph, start);
    if !reach.covers_all() || BellmanFordSolver.find_negative_cycle(graph).is_some() {
        return Ok(None);
    }

    let mut on_path = vec![false; graph.vertices()];
    let mut path = vec![end];
    let mut current = end;
    on_path[end] = true;

    while current != start {
        let predecessor = (0..graph.vertices())
            .find(|&i| graph.has_edge(i, current) && reach.is_visited(i));

        match predecessor {
            Some(i) if !on_path[i] => {
                on_path[i] = true;
                path.push(i);
                current = i;
            }
            _ => return Ok(reach.tree_path_to(end)),
        }
    }

    path.reverse();
    Ok(Some(path))
}

/// Renders [`find_path`] as `"v0->v1->...->vEnd"`, or `"-1"` when no path is
/// produced. `shortest_path(g, v, v)` is `"v"`.
///
/// # Errors
/// Returns `GraphError::VertexOutOfBounds` if `start` or `end` is not a vertex.
pub fn shortest_path(
    graph: &GraphMatrix,
    start: Vertex,
    end: Vertex,
) -> Result<String, GraphError> {
    Ok(match find_path(graph, start, end)? {
        Some(path) => format_arrow_path(&path),
        None => NO_PATH.to_string(),
    })
}

#[cfg(test)]
mod path_tests {
    use super::*;
    use common::types::AdjacencyMatrix;

    fn path(matrix: AdjacencyMatrix, start: Vertex, end: Vertex) -> String {
        let g = GraphMatrix::from_matrix(matrix).unwrap();
        shortest_path(&g, start, end).unwrap()
    }

    #[test]
    fn connected_graphs() {
        assert_eq!(
            path(vec![vec![0, 1, 0], vec![1, 0, 1], vec![0, 1, 0]], 0, 2),
            "0->1->2"
        );
        assert_eq!(
            path(
                vec![
                    vec![0, 1, 0, 0, 1],
                    vec![1, 0, 1, 0, 0],
                    vec![0, 1, 0, 1, 0],
                    vec![0, 0, 1, 0, 1],
                    vec![1, 0, 0, 1, 0],
                ],
                0,
                4
            ),
            "0->4"
        );
    }

    #[test]
    fn disconnected_graph_has_no_path() {
        assert_eq!(
            path(
                vec![
                    vec![0, 1, 1, 0, 0],
                    vec![1, 0, 1, 0, 0],
                    vec![1, 1, 0, 1, 0],
                    vec![0, 0, 1, 0, 0],
                    vec![0, 0, 0, 0, 0],
                ],
                0,
                4
            ),
            "-1"
        );
    }

    #[test]
    fn weights_do_not_pick_the_route() {
        // 0 -> 3 directly costs 3; 0 -> 1 -> 2 -> 3 costs 7. Lowest index wins either way.
        assert_eq!(
            path(
                vec![
                    vec![0, 2, 0, 3],
                    vec![0, 0, 4, 0],
                    vec![0, 0, 0, 1],
                    vec![0, 0, 0, 0],
                ],
                0,
                3
            ),
            "0->3"
        );
        // 0 -> 2 costs 10, 0 -> 1 -> 2 costs 2, but 0 is the lowest predecessor of 2.
        assert_eq!(
            path(vec![vec![0, 1, 10], vec![0, 0, 1], vec![0, 0, 0]], 0, 2),
            "0->2"
        );
    }

    #[test]
    fn negative_cycle_blocks_path() {
        assert_eq!(
            path(
                vec![
                    vec![0, 1, -1, 0, 0],
                    vec![1, 0, 1, 0, 0],
                    vec![-1, 1, 0, 1, 0],
                    vec![0, 0, 1, 0, 0],
                    vec![0, 0, 0, 0, 0],
                ],
                0,
                2
            ),
            "-1"
        );
        assert_eq!(
            path(
                vec![
                    vec![0, -1, 0, 0],
                    vec![0, 0, -1, 0],
                    vec![0, 0, 0, -1],
                    vec![-1, 0, 0, 0],
                ],
                0,
                3
            ),
            "-1"
        );
    }

    #[test]
    fn directed_cycle_with_tail() {
        assert_eq!(
            path(
                vec![
                    vec![0, 1, 0, 0, 0],
                    vec![0, 0, 1, 0, 0],
                    vec![0, 0, 0, 1, 0],
                    vec![1, 0, 0, 0, 1],
                    vec![0, 0, 0, 0, 0],
                ],
                0,
                4
            ),
            "0->1->2->3->4"
        );
    }

    #[test]
    fn same_start_and_end() {
        let g = GraphMatrix::from_matrix(vec![
            vec![0, 1, 0, 0, 0],
            vec![1, 0, 1, 0, 0],
            vec![0, 1, 0, 1, 0],
            vec![0, 0, 1, 0, 1],
            vec![0, 0, 0, 1, 0],
        ])
        .unwrap();

        for v in 0..g.vertices() {
            assert_eq!(shortest_path(&g, v, v).unwrap(), v.to_string());
        }
    }

    #[test]
    fn predecessor_loop_falls_back_to_tree_path() {
        // 0 -> 3 -> 1 <-> 2. The lowest predecessor of 1 is 2 and of 2 is 1.
        let g = GraphMatrix::from_matrix(vec![
            vec![0, 0, 0, 1],
            vec![0, 0, 1, 0],
            vec![0, 1, 0, 0],
            vec![0, 1, 0, 0],
        ])
        .unwrap();

        assert_eq!(shortest_path(&g, 0, 2).unwrap(), "0->3->1->2");
    }

    #[test]
    fn out_of_range_vertices_are_errors() {
        let g = GraphMatrix::from_matrix(vec![vec![0, 1], vec![1, 0]]).unwrap();

        assert_eq!(
            shortest_path(&g, 2, 0),
            Err(GraphError::VertexOutOfBounds(2))
        );
        assert_eq!(
            shortest_path(&g, 0, 5),
            Err(GraphError::VertexOutOfBounds(5))
        );
        assert!(shortest_path(&GraphMatrix::new(), 0, 0).is_err());
    }
}
