//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::Serialize;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a co-author lookup
#[derive(Debug, Serialize)]
pub struct CoAuthorResult {
    /// Whether a co-author trailer was found
    pub present: bool,
    /// The credited identity, verbatim
    pub co_author: Option<String>,
    /// Where the template was read from ("-" for stdin)
    pub source: String,
}

impl CoAuthorResult {
    /// Build a result from an optional identity
    #[must_use]
    pub fn new(co_author: Option<String>, source: impl Into<String>) -> Self {
        Self {
            present: co_author.is_some(),
            co_author,
            source: source.into(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => match &self.co_author {
                Some(identity) => println!("{identity}"),
                None => println!("No co-author trailer found in {}", self.source),
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

/// Result of showing the current configuration
#[derive(Debug, Serialize)]
pub struct ConfigResult {
    /// Path of the config file
    pub config_path: String,
    /// Configured default template
    pub template: Option<String>,
}

impl ConfigResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("Config: {}", self.config_path);
                match &self.template {
                    Some(t) => println!("Template: {t}"),
                    None => println!("Template: (not set, reading stdin)"),
                }
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

/// Generic operation result
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
