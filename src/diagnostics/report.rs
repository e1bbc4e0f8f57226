// SPDX-License-Identifier: MPL-2.0
//! Diagnostic report generation and JSON export.
//!
//! This module provides structures for building diagnostic reports that can
//! be exported as JSON for debugging and analysis.

use std::time::Instant;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::{DiagnosticEvent, DiagnosticEventKind};

// =============================================================================
// Report Metadata
// =============================================================================

/// Metadata about a diagnostic report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportMetadata {
    /// When the report was generated (ISO 8601).
    pub generated_at: String,
    /// Version of the crate that generated the report.
    pub graphbook_version: String,
    /// Duration of collection in milliseconds.
    pub collection_duration_ms: u64,
    /// Total number of events in the report.
    pub event_count: usize,
}

impl ReportMetadata {
    /// Creates new report metadata.
    #[must_use]
    pub fn new(collection_duration_ms: u64, event_count: usize) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            graphbook_version: env!("CARGO_PKG_VERSION").to_string(),
            collection_duration_ms,
            event_count,
        }
    }
}

// =============================================================================
// Serializable Event
// =============================================================================

/// A diagnostic event that can be serialized to JSON.
///
/// This wrapper converts [`DiagnosticEvent`] timestamps (which use `Instant`)
/// to relative milliseconds since collection started.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SerializableEvent {
    /// Milliseconds since collection started.
    pub timestamp_ms: u64,
    /// The event data.
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl SerializableEvent {
    /// Creates a serializable event from a diagnostic event.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    pub fn new(event: &DiagnosticEvent, collection_start: Instant) -> Self {
        let timestamp_ms = event
            .timestamp
            .saturating_duration_since(collection_start)
            .as_millis() as u64;

        Self {
            timestamp_ms,
            kind: event.kind.clone(),
        }
    }
}

// =============================================================================
// Report Summary
// =============================================================================

/// Event counts per category, computed from the report's events.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportSummary {
    /// Number of user action events.
    pub user_actions: usize,
    /// Number of store state events.
    pub state_changes: usize,
    /// Number of error events.
    pub errors: usize,
}

impl ReportSummary {
    /// Computes a summary from serialized events.
    #[must_use]
    pub fn from_events(events: &[SerializableEvent]) -> Self {
        let mut summary = Self::default();
        for event in events {
            match event.kind {
                DiagnosticEventKind::UserAction { .. } => summary.user_actions += 1,
                DiagnosticEventKind::StoreState { .. } => summary.state_changes += 1,
                DiagnosticEventKind::Error { .. } => summary.errors += 1,
            }
        }
        summary
    }
}

// =============================================================================
// Diagnostic Report
// =============================================================================

/// A complete diagnostic report ready for JSON export.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticReport {
    /// Report metadata.
    pub metadata: ReportMetadata,
    /// Collected events, oldest first.
    pub events: Vec<SerializableEvent>,
    /// Summary statistics computed from the events.
    pub summary: ReportSummary,
}

impl DiagnosticReport {
    /// Creates a report from collected events.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    pub fn new(events: &[DiagnosticEvent], collection_start: Instant) -> Self {
        let serializable: Vec<SerializableEvent> = events
            .iter()
            .map(|event| SerializableEvent::new(event, collection_start))
            .collect();
        let collection_duration_ms = collection_start.elapsed().as_millis() as u64;

        Self {
            metadata: ReportMetadata::new(collection_duration_ms, serializable.len()),
            summary: ReportSummary::from_events(&serializable),
            events: serializable,
        }
    }

    /// Exports the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
