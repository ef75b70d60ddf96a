/*!
# Input/Output (I/O) Routines

This module reads and writes graphs as plain-text edge lists: one edge per
line, `source target weight`, whitespace separated. Lines or trailing text
beginning with `#` are comments and are ignored.

On load the edge list is normalized into the engine's input shape:

- self-loops are rejected with the offending line number;
- duplicate undirected pairs are dropped, keeping the first occurrence;
- every surviving edge is symmetrized into both directed records;
- vertex ids are remapped to a contiguous `0..V₀` (in order of first
  appearance) when the source id space is not already dense.
*/

use crate::core::error::{ArboraError, Result};
use crate::core::types::Graph;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Reads a whitespace-separated edge list into a [`Graph`].
///
/// # Example
///
/// ```rust,no_run
/// use arbora::core::io::read_edge_list;
///
/// let graph = read_edge_list("graph.edges").expect("Failed to read edge list");
/// ```
pub fn read_edge_list(path: impl AsRef<Path>) -> Result<Graph> {
    let file = File::open(path.as_ref())?;
    let reader = BufReader::new(file);

    let mut raw: Vec<(u32, u32, f32)> = Vec::new();
    let mut max_id: u32 = 0;
    for (index, line) in reader.lines().enumerate() {
        let mut line = line?;
        // Remove comments: if '#' is present, only take text before it.
        if let Some(idx) = line.find('#') {
            line.truncate(idx);
        }
        if line.trim().is_empty() {
            continue;
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 3 {
            return Err(ArboraError::invalid_input(format!(
                "line {}: expected 'source target weight', got '{}'",
                index + 1,
                line.trim()
            )));
        }
        let src: u32 = parse_token(tokens[0], "source", index)?;
        let tgt: u32 = parse_token(tokens[1], "target", index)?;
        let weight: f32 = parse_token(tokens[2], "weight", index)?;
        if src == tgt {
            return Err(ArboraError::invalid_input(format!(
                "line {}: self-loop on vertex {}",
                index + 1,
                src
            )));
        }
        max_id = max_id.max(src).max(tgt);
        raw.push((src, tgt, weight));
    }

    if raw.is_empty() {
        return Err(ArboraError::invalid_graph(
            "edge list contains no edges",
        ));
    }

    let remapped = remap_dense(&mut raw, max_id);

    let mut seen = HashMap::new();
    let before = raw.len();
    raw.retain(|&(a, b, _)| seen.insert((a.min(b), a.max(b)), ()).is_none());
    if raw.len() < before {
        debug!(dropped = before - raw.len(), "deduplicated edge list");
    }

    let vertex_count = if remapped {
        seen_vertex_count(&raw)
    } else {
        max_id + 1
    };
    Graph::from_undirected(vertex_count, &raw)
}

/// Writes a graph as an edge list, emitting each undirected edge once
/// (the direction with `from < to`).
///
/// # Example
///
/// ```rust,no_run
/// use arbora::core::io::write_edge_list;
/// use arbora::core::types::Graph;
///
/// let graph = Graph::from_undirected(2, &[(0, 1, 3.5)]).unwrap();
/// write_edge_list("out.edges", &graph).expect("Failed to write edge list");
/// ```
pub fn write_edge_list(path: impl AsRef<Path>, graph: &Graph) -> Result<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    for edge in graph.edges().iter().filter(|e| e.from < e.to) {
        writeln!(writer, "{} {} {}", edge.from, edge.to, edge.weight)?;
    }
    writer.flush()?;
    Ok(())
}

fn parse_token<T: std::str::FromStr>(token: &str, what: &str, index: usize) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    token.parse().map_err(|e| {
        ArboraError::invalid_input(format!(
            "line {}: error parsing {} value '{}': {}",
            index + 1,
            what,
            token,
            e
        ))
    })
}

/// Remaps vertex ids to `0..V₀` in first-seen order when the id space is
/// sparse. Returns true if a remap took place.
fn remap_dense(raw: &mut [(u32, u32, f32)], max_id: u32) -> bool {
    let mut ids = HashMap::new();
    for &(a, b, _) in raw.iter() {
        let next = ids.len() as u32;
        ids.entry(a).or_insert(next);
        let next = ids.len() as u32;
        ids.entry(b).or_insert(next);
    }
    if ids.len() as u32 == max_id + 1 {
        return false;
    }
    debug!(
        distinct = ids.len(),
        max_id, "remapping sparse vertex ids to a dense range"
    );
    for entry in raw.iter_mut() {
        entry.0 = ids[&entry.0];
        entry.1 = ids[&entry.1];
    }
    true
}

fn seen_vertex_count(raw: &[(u32, u32, f32)]) -> u32 {
    raw.iter()
        .map(|&(a, b, _)| a.max(b) + 1)
        .max()
        .unwrap_or(0)
}
