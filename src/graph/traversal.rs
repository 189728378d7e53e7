//! Depth-first rendering of dependency trees.
//!
//! Every package in the [`AdjacencyMap`] is treated as a root. Each root's
//! tree is walked depth-first in pre-order and each visited package is
//! passed to a caller-supplied renderer together with its depth. A package
//! reachable through several paths is rendered once per path.
//!
//! Cycle detection tracks only the ancestors of the current node, so the
//! same package may appear on sibling branches (diamond dependencies) while a
//! package that reappears below itself is rejected.

use crate::parser::AdjacencyMap;

/// Errors raised while walking the dependency graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TraversalError {
    /// A package appears among its own ancestors.
    #[error("dependency cycle detected: {}", .path.join(" -> "))]
    Cycle {
        /// The package that closed the cycle
        package: String,
        /// Path from the root to the repeated package, inclusive
        path: Vec<String>,
    },

    /// A package is referenced but has no entry in the map.
    #[error("{}", undefined_message(.package, .required_by.as_deref()))]
    UndefinedDependency {
        /// The missing package
        package: String,
        /// The package listing it as a dependency, if any
        required_by: Option<String>,
    },
}

fn undefined_message(package: &str, required_by: Option<&str>) -> String {
    match required_by {
        Some(parent) => format!("'{package}' is required by '{parent}' but is not defined"),
        None => format!("'{package}' is not defined"),
    }
}

/// Result type alias for traversal operations.
pub type TraversalResult<T> = Result<T, TraversalError>;

/// The chain of packages from the root down to the current node's parent.
///
/// Each level borrows the level above it, so a branch extends the chain
/// without affecting its siblings.
#[derive(Clone, Copy)]
struct Ancestors<'a> {
    name: &'a str,
    parent: Option<&'a Ancestors<'a>>,
}

impl Ancestors<'_> {
    fn contains(chain: Option<&Ancestors<'_>>, name: &str) -> bool {
        let mut cursor = chain;
        while let Some(link) = cursor {
            if link.name == name {
                return true;
            }
            cursor = link.parent;
        }
        false
    }

    fn path_to(chain: Option<&Ancestors<'_>>, last: &str) -> Vec<String> {
        let mut path = vec![last.to_string()];
        let mut cursor = chain;
        while let Some(link) = cursor {
            path.push(link.name.to_string());
            cursor = link.parent;
        }
        path.reverse();
        path
    }
}

/// Renders the dependency tree of every package in the map.
///
/// Roots are visited in insertion order and children in the order they are
/// listed. `render` receives the depth (0 for roots) and package name and
/// returns the complete text for that node, including any line terminator.
///
/// The first cycle or undefined dependency encountered aborts the whole
/// operation; no partial output is returned.
///
/// # Example
///
/// ```
/// use deptree::format::tab_format;
/// use deptree::graph::format_dependency_graph;
/// use deptree::parser::parse_str;
///
/// let graph = parse_str(r#"{"x": ["a"], "a": []}"#).unwrap();
/// let output = format_dependency_graph(&graph, tab_format).unwrap();
/// assert_eq!(output, " - x\n\t - a\n - a\n");
/// ```
pub fn format_dependency_graph<F>(graph: &AdjacencyMap, render: F) -> TraversalResult<String>
where
    F: Fn(usize, &str) -> String,
{
    let mut output = String::new();
    for root in graph.packages() {
        visit(graph, root, 0, None, &render, &mut output)?;
    }
    Ok(output)
}

/// Renders the dependency tree of a single root package.
///
/// Fails with [`TraversalError::UndefinedDependency`] if `root` itself is
/// not in the map.
pub fn format_from<F>(graph: &AdjacencyMap, root: &str, render: F) -> TraversalResult<String>
where
    F: Fn(usize, &str) -> String,
{
    let mut output = String::new();
    visit(graph, root, 0, None, &render, &mut output)?;
    Ok(output)
}

fn visit<F>(
    graph: &AdjacencyMap,
    current: &str,
    depth: usize,
    ancestors: Option<&Ancestors<'_>>,
    render: &F,
    output: &mut String,
) -> TraversalResult<()>
where
    F: Fn(usize, &str) -> String,
{
    if Ancestors::contains(ancestors, current) {
        return Err(TraversalError::Cycle {
            package: current.to_string(),
            path: Ancestors::path_to(ancestors, current),
        });
    }

    let Some(deps) = graph.get(current) else {
        return Err(TraversalError::UndefinedDependency {
            package: current.to_string(),
            required_by: ancestors.map(|link| link.name.to_string()),
        });
    };

    output.push_str(&render(depth, current));

    let chain = Ancestors {
        name: current,
        parent: ancestors,
    };
    for dep in deps {
        visit(graph, dep, depth + 1, Some(&chain), render, output)?;
    }

    Ok(())
}
