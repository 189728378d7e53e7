//! End-to-end resolution: read a dependency file, parse it and render
//! every package's dependency tree.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::ResolveError;
use crate::graph::format_dependency_graph;
use crate::parser::parse_slice;

/// Reads the JSON dependency specification at `path` and renders it.
///
/// # Example
///
/// ```ignore
/// use std::path::Path;
/// use deptree::format::tab_format;
/// use deptree::resolver::resolve_file;
///
/// let tree = resolve_file(Path::new("deps.json"), tab_format).unwrap();
/// print!("{}", tree);
/// ```
pub fn resolve_file<F>(path: &Path, render: F) -> Result<String, ResolveError>
where
    F: Fn(usize, &str) -> String,
{
    if !path.exists() {
        return Err(ResolveError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read(path).map_err(|source| ResolveError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = content.len(), "read dependency file");

    resolve_slice(&content, render)
}

/// Parses and renders a JSON dependency specification held in memory.
pub fn resolve_str<F>(content: &str, render: F) -> Result<String, ResolveError>
where
    F: Fn(usize, &str) -> String,
{
    resolve_slice(content.as_bytes(), render)
}

/// Parses and renders raw JSON bytes; invalid UTF-8 is a parse error.
pub fn resolve_slice<F>(content: &[u8], render: F) -> Result<String, ResolveError>
where
    F: Fn(usize, &str) -> String,
{
    let graph = parse_slice(content)?;
    debug!(
        packages = graph.len(),
        edges = graph.edge_count(),
        "parsed dependency graph"
    );

    let output = format_dependency_graph(&graph, render)?;
    debug!(lines = output.lines().count(), "rendered dependency trees");
    Ok(output)
}
