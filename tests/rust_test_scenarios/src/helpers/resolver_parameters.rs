//! Resolver parameters provided as scenario input.

use serde::Deserialize;
use std::path::PathBuf;

/// Resolver parameters.
///
/// Example input:
/// `{"identifier": "java.lang.Class", "bindings": ["simple", "nop"], "detect_multiple_bindings": null}`
#[derive(Clone, Debug, Deserialize)]
pub struct ResolverParameters {
    /// Logger name to resolve.
    pub identifier: String,

    /// Binding names, one marker resource per entry, in search order.
    #[serde(default)]
    pub bindings: Vec<String>,

    /// Multiple-binding detection, `None` leaves it unset.
    #[serde(default)]
    pub detect_multiple_bindings: Option<bool>,

    /// Directory for search path entries.
    /// Synthetic in-memory markers are used if not set.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl ResolverParameters {
    /// Parse parameters from JSON input.
    pub fn from_json(input: &str) -> Result<Self, String> {
        serde_json::from_str(input).map_err(|e| format!("Failed to parse parameters: {e}"))
    }
}
