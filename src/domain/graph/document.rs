// SPDX-License-Identifier: MPL-2.0
//! Parsed graph-topology documents.
//!
//! A graph's `cyjs` field holds a serialized JSON document describing its
//! topology. The schema is owned by the rendering collaborator; this module
//! only parses the string into structured data and answers shallow questions
//! about it. Parsing is explicit and fallible: a malformed document is a
//! modeled error, never a panic on a read path.

use std::fmt;

use serde_json::Value;

// =============================================================================
// GraphDocumentError
// =============================================================================

/// Errors that can occur while parsing a topology document.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphDocumentError {
    /// The document is not well-formed JSON.
    Malformed(String),
}

impl fmt::Display for GraphDocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphDocumentError::Malformed(msg) => {
                write!(f, "Malformed graph document: {msg}")
            }
        }
    }
}

impl std::error::Error for GraphDocumentError {}

impl From<serde_json::Error> for GraphDocumentError {
    fn from(err: serde_json::Error) -> Self {
        GraphDocumentError::Malformed(err.to_string())
    }
}

// =============================================================================
// GraphDocument
// =============================================================================

/// A parsed topology document.
///
/// Any well-formed JSON is accepted; documents produced by the authoring
/// pipeline carry an `elements` object, but viewer-side callers also feed
/// hand-written fixtures without one, so the presence check is an accessor
/// rather than a parse-time requirement.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphDocument {
    value: Value,
}

impl GraphDocument {
    /// Parses a serialized document.
    ///
    /// # Errors
    ///
    /// Returns [`GraphDocumentError::Malformed`] when the input is not
    /// well-formed JSON.
    pub fn parse(raw: &str) -> Result<Self, GraphDocumentError> {
        let value = serde_json::from_str(raw)?;
        Ok(Self { value })
    }

    /// Returns the parsed JSON value.
    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.value
    }

    /// Consumes the document, returning the parsed JSON value.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.value
    }

    /// Returns `true` when the document carries an `elements` object.
    #[must_use]
    pub fn has_elements(&self) -> bool {
        self.value.get("elements").is_some_and(Value::is_object)
    }
}
