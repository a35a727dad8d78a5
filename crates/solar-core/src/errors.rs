//! Structured error types shared across SOLAR crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`SolarError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (dimensions, indices, names, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

/// Canonical error type for the SOLAR engine.
///
/// Every family is local and synchronous: nothing in the numeric core
/// retries, and a failure aborts the operation that raised it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum SolarError {
    /// Operand length mismatches, malformed tableaux and state layouts.
    #[error("shape error: {0}")]
    Shape(ErrorInfo),
    /// Invalid values rejected at construction or validation time.
    #[error("domain error: {0}")]
    Domain(ErrorInfo),
    /// Failures raised while evaluating the force model.
    #[error("numeric error: {0}")]
    Numeric(ErrorInfo),
    /// Operations invoked in an order the callee does not support.
    #[error("sequence error: {0}")]
    Sequence(ErrorInfo),
    /// Configuration loading and validation errors.
    #[error("config error: {0}")]
    Config(ErrorInfo),
    /// Serialization errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl SolarError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            SolarError::Shape(info)
            | SolarError::Domain(info)
            | SolarError::Numeric(info)
            | SolarError::Sequence(info)
            | SolarError::Config(info)
            | SolarError::Serde(info) => info,
        }
    }

    /// Shorthand for a [`SolarError::Shape`] without context.
    pub fn shape(code: &str, message: impl Into<String>) -> Self {
        SolarError::Shape(ErrorInfo::new(code, message))
    }

    /// Shorthand for a [`SolarError::Domain`] without context.
    pub fn domain(code: &str, message: impl Into<String>) -> Self {
        SolarError::Domain(ErrorInfo::new(code, message))
    }

    /// Builds the error raised when two operands disagree on their length.
    pub fn dimension_mismatch(expected: usize, found: usize) -> Self {
        SolarError::Shape(
            ErrorInfo::new("dimension-mismatch", "operands must have the same dimension")
                .with_context("expected", expected)
                .with_context("found", found),
        )
    }

    /// Builds the error raised when an index falls outside `[0, extent)`.
    pub fn out_of_bounds(index: usize, extent: usize) -> Self {
        SolarError::Shape(
            ErrorInfo::new("index-out-of-bounds", "index outside of the valid range")
                .with_context("index", index)
                .with_context("extent", extent),
        )
    }
}
