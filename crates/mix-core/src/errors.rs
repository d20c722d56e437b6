//! Structured error types shared across the simulator crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{NodeId, VertexId};

/// Structured payload attached to every [`MixError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (vertex ids, sizes, times, etc.).
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

/// Canonical error type for the simulator.
///
/// Every family aborts the run that raised it. Nothing inside the workspace
/// retries; a caller may start a fresh run with another seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum MixError {
    /// Invalid run parameters or a topology that does not match them.
    #[error("configuration error: {0}")]
    Configuration(ErrorInfo),
    /// Topology generation failures.
    #[error("topology error: {0}")]
    Topology(ErrorInfo),
    /// Internal consistency failures (out-of-range ids, broken bijection, bad times).
    #[error("invariant violation: {0}")]
    InvariantViolation(ErrorInfo),
    /// Pop attempted on an empty event queue.
    #[error("empty queue: {0}")]
    EmptyQueue(ErrorInfo),
    /// Randomness and distribution parameter errors.
    #[error("rng error: {0}")]
    Rng(ErrorInfo),
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

impl MixError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            MixError::Configuration(info)
            | MixError::Topology(info)
            | MixError::InvariantViolation(info)
            | MixError::EmptyQueue(info)
            | MixError::Rng(info) => info,
        }
    }

    /// Returns the stable error code of the payload.
    pub fn code(&self) -> &str {
        &self.info().code
    }

    /// Vertex reference outside `[0, size)` of a topology or permutation.
    pub fn invalid_vertex(vertex: VertexId, size: usize) -> Self {
        MixError::InvariantViolation(
            ErrorInfo::new("invalid-vertex", "vertex outside [0, size)")
                .with_context("vertex", vertex.as_raw())
                .with_context("size", size),
        )
    }

    /// Identity reference outside `[0, size)` of a permutation or frequency table.
    pub fn invalid_node(node: NodeId, size: usize) -> Self {
        MixError::InvariantViolation(
            ErrorInfo::new("invalid-node", "node outside [0, size)")
                .with_context("node", node.as_raw())
                .with_context("size", size),
        )
    }
}
