use std::io::Write;

use graph_core::{
    GraphMatrix, is_bipartite, is_connected, is_contains_cycle, negative_cycle, shortest_path,
};

use common::error::GraphError;

use super::config::{ReportConfig, ScenarioConfig};
use super::error::Error;

/// Loads the scenario's matrix and writes every algorithm's report to `out`.
///
/// A path query on a vertex outside the graph is reported inline and does not
/// stop the rest of the scenario.
///
/// # Errors
/// Returns `Error::GraphError` if the matrix is empty or not square (nothing
/// is written in that case), or `Error::IoError` if `out` fails.
pub fn write_scenario<W: Write>(
    out: &mut W,
    scenario: &ScenarioConfig,
    settings: &ReportConfig,
) -> Result<(), Error> {
    let graph = GraphMatrix::from_matrix(scenario.matrix.clone())?;

    writeln!(out, "== {} ({} vertices)", scenario.name, graph.vertices())?;
    writeln!(out, "{}", graph.summary())?;
    if settings.show_matrix {
        writeln!(out, "{}", graph)?;
    }

    writeln!(out, "connected: {}", is_connected(&graph))?;
    for query in &scenario.paths {
        match shortest_path(&graph, query.from, query.to) {
            Ok(path) => writeln!(out, "path {} -> {}: {}", query.from, query.to, path)?,
            Err(e) => writeln!(out, "path {} -> {}: error: {}", query.from, query.to, e)?,
        }
    }
    writeln!(out, "cycle: {}", is_contains_cycle(&graph))?;
    writeln!(out, "bipartite: {}", is_bipartite(&graph))?;
    writeln!(out, "negative cycle: {}", negative_cycle(&graph))?;

    if settings.show_operators {
        write_operators(out, &graph)?;
    }

    Ok(())
}

/// Overflowing operators are reported inline like path errors.
fn write_operators<W: Write>(out: &mut W, graph: &GraphMatrix) -> Result<(), Error> {
    let negated = -graph;

    write_operator(out, "g + g", graph.try_add(graph))?;
    writeln!(out, "-g:\n{}", negated)?;
    write_operator(out, "g * g", graph.try_matmul(graph))?;
    writeln!(out, "g > -g: {}", graph.greater_than(&negated)?)?;
    Ok(())
}

fn write_operator<W: Write>(
    out: &mut W,
    label: &str,
    result: Result<GraphMatrix, GraphError>,
) -> Result<(), Error> {
    match result {
        Ok(value) => writeln!(out, "{}:\n{}", label, value)?,
        Err(e) => writeln!(out, "{}: error: {}", label, e)?,
    }
    Ok(())
}
