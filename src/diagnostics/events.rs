// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.
//!
//! This module defines the events that can be captured while the viewer
//! runs, for correlating user activity with store state when issues occur.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// User-initiated actions that can be captured for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    /// Load the graph list into the store.
    LoadGraphList {
        /// Optional provenance (e.g., `remote_query`, `route_match`).
        #[serde(default, skip_serializing_if = "Option::is_none")]
        source: Option<String>,
    },

    /// Select a graph by identifier.
    SelectGraph,

    /// Cache a serialized document for the selected graph.
    SetDocument,

    /// Clear the whole store.
    ClearStore,
}

/// Store state changes worth correlating with user actions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum StoreStateEvent {
    /// A graph list finished loading.
    GraphsLoaded {
        /// Number of records in the new list.
        count: usize,
    },

    /// The selection changed.
    SelectionChanged {
        /// Whether the new selection resolves against the loaded list.
        resolved: bool,
    },

    /// The store was cleared.
    StoreCleared,
}

/// Category of a captured error.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// A topology document failed to parse.
    DocumentParse,
    /// Configuration could not be read or written.
    Config,
    /// The graph catalog failed.
    Catalog,
    /// Anything else.
    Other,
}

/// A captured error with its category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorEvent {
    /// Error category.
    pub error_type: ErrorType,
    /// Human-readable description.
    pub message: String,
}

impl ErrorEvent {
    /// Creates a new error event.
    #[must_use]
    pub fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            message: message.into(),
        }
    }
}

/// A diagnostic event with timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock for duration calculations).
    pub timestamp: Instant,
    /// The type and data of the event.
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }

    /// Creates a new diagnostic event with a specific timestamp.
    #[must_use]
    pub fn with_timestamp(kind: DiagnosticEventKind, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// User-initiated action.
    UserAction {
        /// The specific action performed.
        action: UserAction,
        /// Optional additional details (e.g., graph id, error context).
        #[serde(default, skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },

    /// Store state change.
    StoreState {
        /// The state transition that occurred.
        state: StoreStateEvent,
    },

    /// Captured error.
    Error {
        /// The error details.
        event: ErrorEvent,
    },
}
