//! End-to-end sketch: import graph → SCCs → cycle report.
//!
//! The classic consumer of SCCs is a build or import checker: any component
//! with more than one node (or a self-import) is a dependency cycle that
//! has to be broken before the modules can be processed one at a time.
//!
//! Components come back in reverse topological order of the condensation,
//! so printing them in order is already a valid processing schedule.

use std::path::Path;

use tarjan::strongly_connected;

/// Load a directed edge list: two whitespace-separated node names per line.
///
/// Lines starting with `#` are ignored.
fn from_directed_edgelist(path: &Path) -> Result<Vec<(String, String)>, String> {
    let txt = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;

    let mut edges: Vec<(String, String)> = Vec::new();
    for (line_no, line) in txt.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut it = line.split_whitespace();
        let src = it
            .next()
            .ok_or_else(|| format!("line {}: missing src", line_no + 1))?;
        let dst = it
            .next()
            .ok_or_else(|| format!("line {}: missing dst", line_no + 1))?;
        edges.push((src.to_string(), dst.to_string()));
    }
    Ok(edges)
}

fn main() {
    // If you have a real graph, point to it:
    //
    // TARJAN_EDGELIST=/path/to/edges.txt cargo run --example condense_imports
    //
    // Format: two whitespace-separated node names per line, directed src dst.
    let edges = if let Ok(path) = std::env::var("TARJAN_EDGELIST") {
        from_directed_edgelist(Path::new(&path)).expect("failed to load TARJAN_EDGELIST")
    } else {
        // A small made-up module graph with two import cycles.
        [
            ("app", "config"),
            ("app", "routes"),
            ("routes", "handlers"),
            ("handlers", "db"),
            ("db", "config"),
            ("config", "db"),
            ("handlers", "auth"),
            ("auth", "session"),
            ("session", "auth"),
            ("session", "db"),
        ]
        .iter()
        .map(|&(u, v)| (u.to_string(), v.to_string()))
        .collect()
    };

    let components = strongly_connected(&edges);

    println!("{} node(s) in {} component(s)", edges_node_count(&edges), components.len());
    println!();

    let mut cycles = 0usize;
    for (i, component) in components.iter().enumerate() {
        let is_cycle = component.len() > 1
            || edges.iter().any(|(u, v)| u == v && u == &component[0]);
        if is_cycle {
            cycles += 1;
        }
        let tag = if is_cycle { "CYCLE" } else { "ok" };
        println!("[{i:>3}] {tag:<5} {}", component.join(", "));
    }

    println!();
    if cycles == 0 {
        println!("no import cycles — processing order above is already topological");
    } else {
        println!("{cycles} import cycle(s) need breaking");
    }
}

fn edges_node_count(edges: &[(String, String)]) -> usize {
    let mut seen = std::collections::HashSet::new();
    for (u, v) in edges {
        seen.insert(u);
        seen.insert(v);
    }
    seen.len()
}
