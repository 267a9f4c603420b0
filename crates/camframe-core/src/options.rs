//! Configuration options for a framing solve.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Options for framing a camera onto objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FramingOptions {
    /// Padding around the frame as a fraction of each half field of view.
    ///
    /// Clamped into `[0, 0.499]` when the solve runs.
    pub padding: f64,

    /// Whether to write the solved translation back to the host camera.
    pub write_back: bool,
}

impl Default for FramingOptions {
    fn default() -> Self {
        Self {
            padding: 0.0,
            write_back: true,
        }
    }
}

impl FramingOptions {
    /// Creates options with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the padding.
    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Sets whether the solved translation is written back.
    #[must_use]
    pub fn with_write_back(mut self, write_back: bool) -> Self {
        self.write_back = write_back;
        self
    }

    /// Parses options from a JSON string. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads options from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}
