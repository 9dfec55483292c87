//! Dependency manifest parsing.
//!
//! Extracts the set of distinct package names from a `requirements.txt` or
//! `package.json` body. Parsing is deliberately simple: version specifiers
//! are stripped by splitting on the common comparison operators; full PEP 508
//! requirement syntax is out of scope.

use serde_json::Value;

use crate::error::{GatewayError, GatewayResult};

/// Version comparison operators, stripped in this order. Two-character
/// operators come first so `>=` is not mangled by the bare `>` split.
const VERSION_OPERATORS: [&str; 5] = ["==", ">=", "<=", "<", ">"];

/// Package names from `requirements.txt` content: non-empty, non-comment
/// lines with any version pin removed. Duplicates collapse to one entry,
/// first occurrence wins the ordering.
pub fn parse_requirements(content: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut head = line;
        for operator in VERSION_OPERATORS {
            if let Some((before, _)) = head.split_once(operator) {
                head = before;
            }
        }
        let name = head.trim();
        if !name.is_empty() && !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

/// Package names from `package.json` content: the union of `dependencies`
/// and `devDependencies` keys. Malformed JSON or a non-object root is an
/// `InvalidFileFormat` failure before any network activity happens.
pub fn parse_package_json(content: &str) -> GatewayResult<Vec<String>> {
    let data: Value =
        serde_json::from_str(content).map_err(|_| GatewayError::InvalidFileFormat {
            message: "invalid package.json".to_string(),
        })?;
    if !data.is_object() {
        return Err(GatewayError::InvalidFileFormat {
            message: "package.json root is not an object".to_string(),
        });
    }

    let mut names: Vec<String> = Vec::new();
    for section in ["dependencies", "devDependencies"] {
        if let Some(map) = data.get(section).and_then(Value::as_object) {
            for name in map.keys() {
                if !names.iter().any(|n| n == name) {
                    names.push(name.clone());
                }
            }
        }
    }
    Ok(names)
}
