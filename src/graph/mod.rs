//! Graph module for walking dependency relationships.
//!
//! This module renders the transitive dependency tree of every package in
//! an [`AdjacencyMap`](crate::parser::AdjacencyMap), rejecting cycles and
//! references to undefined packages.
//!
//! # Example
//!
//! ```rust
//! use deptree::format::tab_format;
//! use deptree::graph::{format_dependency_graph, TraversalError};
//! use deptree::parser::parse_str;
//!
//! let graph = parse_str(r#"{"a": ["b"], "b": ["a"]}"#).unwrap();
//! let err = format_dependency_graph(&graph, tab_format).unwrap_err();
//! assert!(matches!(err, TraversalError::Cycle { .. }));
//! ```

mod traversal;

pub use traversal::{format_dependency_graph, format_from, TraversalError, TraversalResult};
