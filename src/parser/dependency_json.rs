//! Parser for JSON dependency specifications.
//!
//! The input is a JSON object mapping each package name to an array of the
//! names of its direct dependencies. Array elements may be strings or
//! integers of any size; integers are stored in their decimal string form so
//! that a dependency `1` refers to the package `"1"`.
//!
//! Parsing only checks the shape of the document. Whether every referenced
//! dependency is defined is checked later, during traversal.

use std::fs;
use std::io::Read;
use std::path::Path;

use serde_json::Value;

use super::types::AdjacencyMap;

/// Shape violations in a syntactically valid JSON document.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SchemaError {
    /// The document is not a JSON object.
    #[error("expected a JSON object at the top level, found {found}")]
    TopLevelNotObject { found: &'static str },

    /// A package maps to something other than an array.
    #[error("dependencies of '{package}' must be an array, found {found}")]
    DependenciesNotArray {
        package: String,
        found: &'static str,
    },

    /// A dependency entry is neither a string nor an integer.
    #[error("dependency #{index} of '{package}' must be a string or integer, found {found}")]
    InvalidDependency {
        package: String,
        index: usize,
        found: &'static str,
    },
}

/// Errors that can occur while reading a dependency specification.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Failed to read the input.
    #[error("Failed to read input: {0}")]
    IoError(#[from] std::io::Error),

    /// The input is not well-formed JSON.
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The JSON is well-formed but does not describe a dependency map.
    #[error("Invalid dependency specification: {0}")]
    SchemaError(#[from] SchemaError),
}

/// Result type alias for parser operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a dependency specification file.
///
/// # Example
///
/// ```ignore
/// use std::path::Path;
/// use deptree::parser::parse_file;
///
/// let graph = parse_file(Path::new("deps.json")).unwrap();
/// println!("{} packages", graph.len());
/// ```
pub fn parse_file(path: &Path) -> ParseResult<AdjacencyMap> {
    let content = fs::read(path)?;
    parse_slice(&content)
}

/// Parses a dependency specification from any reader.
///
/// The reader is consumed to completion before any validation happens.
pub fn parse_reader<R: Read>(mut reader: R) -> ParseResult<AdjacencyMap> {
    let mut content = Vec::new();
    reader.read_to_end(&mut content)?;
    parse_slice(&content)
}

/// Parses a dependency specification from raw bytes.
///
/// Bytes that are not valid UTF-8 are reported as [`ParseError::JsonError`].
pub fn parse_slice(content: &[u8]) -> ParseResult<AdjacencyMap> {
    let value: Value = serde_json::from_slice(content)?;
    Ok(parse_value(&value)?)
}

/// Parses a dependency specification from a string.
///
/// # Example
///
/// ```
/// use deptree::parser::parse_str;
///
/// let graph = parse_str(r#"{"pkg1": [1, "b"], "1": [], "b": []}"#).unwrap();
/// assert_eq!(graph.get("pkg1").unwrap(), &["1".to_string(), "b".to_string()]);
/// assert!(graph.contains("1"));
/// ```
pub fn parse_str(content: &str) -> ParseResult<AdjacencyMap> {
    parse_slice(content.as_bytes())
}

/// Converts an already decoded JSON value into an adjacency map.
pub fn parse_value(value: &Value) -> Result<AdjacencyMap, SchemaError> {
    let Value::Object(object) = value else {
        return Err(SchemaError::TopLevelNotObject {
            found: json_type(value),
        });
    };

    let mut graph = AdjacencyMap::with_capacity(object.len());
    for (package, deps) in object {
        let Value::Array(entries) = deps else {
            return Err(SchemaError::DependenciesNotArray {
                package: package.clone(),
                found: json_type(deps),
            });
        };

        let names = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| dependency_name(package, index, entry))
            .collect::<Result<Vec<_>, _>>()?;

        graph.insert(package.as_str(), names);
    }

    Ok(graph)
}

fn dependency_name(package: &str, index: usize, entry: &Value) -> Result<String, SchemaError> {
    match entry {
        Value::String(name) => return Ok(name.clone()),
        Value::Number(n) => {
            // Requires `arbitrary_precision`, which keeps the literal's digits.
            let text = n.to_string();
            if is_integer_literal(&text) {
                return Ok(text);
            }
        }
        _ => {}
    }

    Err(SchemaError::InvalidDependency {
        package: package.to_string(),
        index,
        found: json_type(entry),
    })
}

/// Matches `-?[0-9]+`, the textual form of a JSON integer of any size.
fn is_integer_literal(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(n) if !is_integer_literal(&n.to_string()) => "a floating-point number",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
