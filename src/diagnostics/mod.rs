// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting and exporting activity reports.
//!
//! This module provides infrastructure for capturing diagnostic events while
//! the viewer runs, storing them in a memory-bounded circular buffer, and
//! exporting them as JSON reports for analysis.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: The captured event types
//! - [`DiagnosticsHandle`]: Cheap, non-blocking sender handed to call sites
//! - [`DiagnosticsCollector`]: Drains events into the buffer and builds
//!   [`DiagnosticReport`]s

mod buffer;
mod collector;
mod events;
mod report;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle, EVENT_CHANNEL_CAPACITY};
pub use events::{
    DiagnosticEvent, DiagnosticEventKind, ErrorEvent, ErrorType, StoreStateEvent, UserAction,
};
pub use report::{DiagnosticReport, ReportMetadata, ReportSummary, SerializableEvent};
