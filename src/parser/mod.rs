//! Parser module for deptree.
//!
//! Turns a JSON dependency specification into an [`AdjacencyMap`],
//! rejecting documents whose shape is not a map of package names to
//! dependency lists.
//!
//! # Example
//!
//! ```
//! use deptree::parser::{parse_str, ParseError, SchemaError};
//!
//! let graph = parse_str(r#"{"app": ["log"], "log": []}"#).unwrap();
//! assert_eq!(graph.len(), 2);
//!
//! let err = parse_str(r#"["app"]"#).unwrap_err();
//! assert!(matches!(err, ParseError::SchemaError(SchemaError::TopLevelNotObject { .. })));
//! ```

pub mod dependency_json;
pub mod types;

// Re-export commonly used types for convenience
pub use dependency_json::{
    parse_file, parse_reader, parse_slice, parse_str, parse_value, ParseError, ParseResult, SchemaError,
};

pub use types::AdjacencyMap;
