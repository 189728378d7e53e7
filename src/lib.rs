//! deptree - prints the transitive dependency tree of every package in a
//! JSON dependency specification.
//!
//! The crate parses a map of package names to dependency lists, walks each
//! package's dependencies depth-first, and renders every visited package
//! with a pluggable line renderer. Dependency cycles and references to
//! undefined packages are reported as errors.

pub mod error;
pub mod format;
pub mod graph;
pub mod logger;
pub mod parser;
pub mod resolver;

pub use error::{ErrorKind, ResolveError};
