//! Shared types for dependency parsing.
//!
//! This module defines the adjacency map that the parser produces and
//! the traversal engine consumes.

use indexmap::IndexMap;

/// Mapping from package name to the names of its direct dependencies.
///
/// Packages iterate in the order they first appeared in the input, which is
/// the order in which they are traversed as roots. Inserting an existing
/// package replaces its dependency list but keeps its original position.
///
/// # Example
///
/// ```
/// use deptree::parser::AdjacencyMap;
///
/// let mut graph = AdjacencyMap::new();
/// graph.insert("app", vec!["log".to_string()]);
/// graph.insert("log", Vec::new());
///
/// assert_eq!(graph.len(), 2);
/// assert!(graph.contains("log"));
/// assert_eq!(graph.packages().collect::<Vec<_>>(), vec!["app", "log"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyMap {
    packages: IndexMap<String, Vec<String>>,
}

impl AdjacencyMap {
    /// Creates an empty adjacency map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty map with room for `capacity` packages.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            packages: IndexMap::with_capacity(capacity),
        }
    }

    /// Inserts a package and its dependency list.
    ///
    /// Returns the previous dependency list if the package was already present.
    pub fn insert(&mut self, name: impl Into<String>, deps: Vec<String>) -> Option<Vec<String>> {
        self.packages.insert(name.into(), deps)
    }

    /// Returns the dependency list of a package, if it is defined.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.packages.get(name).map(Vec::as_slice)
    }

    /// Returns true if the package is defined as a key.
    pub fn contains(&self, name: &str) -> bool {
        self.packages.contains_key(name)
    }

    /// Number of defined packages.
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Returns true if no packages are defined.
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Package names in insertion order.
    pub fn packages(&self) -> impl Iterator<Item = &str> {
        self.packages.keys().map(String::as_str)
    }

    /// Packages with their dependency lists, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.packages
            .iter()
            .map(|(name, deps)| (name.as_str(), deps.as_slice()))
    }

    /// Total number of dependency edges across all packages.
    pub fn edge_count(&self) -> usize {
        self.packages.values().map(Vec::len).sum()
    }
}

impl<K: Into<String>> FromIterator<(K, Vec<String>)> for AdjacencyMap {
    fn from_iter<I: IntoIterator<Item = (K, Vec<String>)>>(iter: I) -> Self {
        let mut graph = AdjacencyMap::new();
        for (name, deps) in iter {
            graph.insert(name, deps);
        }
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deps(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_map() {
        let graph = AdjacencyMap::new();
        assert!(graph.is_empty());
        assert_eq!(graph.len(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.get("anything").is_none());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let graph: AdjacencyMap = vec![
            ("zeta", deps(&[])),
            ("alpha", deps(&["zeta"])),
            ("mid", deps(&[])),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            graph.packages().collect::<Vec<_>>(),
            vec!["zeta", "alpha", "mid"]
        );
    }

    #[test]
    fn test_reinsert_keeps_position_and_replaces_deps() {
        let mut graph = AdjacencyMap::new();
        graph.insert("a", deps(&["x"]));
        graph.insert("b", deps(&[]));
        let previous = graph.insert("a", deps(&["y", "z"]));

        assert_eq!(previous, Some(deps(&["x"])));
        assert_eq!(graph.packages().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(graph.get("a"), Some(&deps(&["y", "z"])[..]));
    }

    #[test]
    fn test_iter_and_edge_count() {
        let graph: AdjacencyMap = vec![("a", deps(&["b", "c"])), ("b", deps(&["c"]))]
            .into_iter()
            .collect();

        let collected: Vec<_> = graph.iter().map(|(n, d)| (n, d.len())).collect();
        assert_eq!(collected, vec![("a", 2), ("b", 1)]);
        assert_eq!(graph.edge_count(), 3);
    }
}
