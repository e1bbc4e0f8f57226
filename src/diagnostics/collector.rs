// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.
//!
//! This module provides the central collector that receives events from the
//! store's call sites and keeps them in a circular buffer. Call sites hold a
//! cheap [`DiagnosticsHandle`]; the host drains the channel whenever it is
//! convenient.

use std::time::Instant;

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

use super::{
    BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind, DiagnosticReport,
    ErrorEvent, StoreStateEvent, UserAction,
};

/// Capacity of the channel between handles and the collector.
///
/// Bounded so a stalled host cannot accumulate unbounded events; senders
/// drop on overflow instead of blocking.
pub const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Handle for sending diagnostic events to the collector.
///
/// This handle is cheap to clone and can be shared across threads.
/// Events are sent via a bounded channel so logging never blocks the caller.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Logs a user action event.
    ///
    /// Non-blocking; drops the event if the internal channel is full.
    pub fn log_action(&self, action: UserAction) {
        self.log_action_with_details(action, None);
    }

    /// Logs a user action event with optional details.
    ///
    /// Non-blocking; drops the event if the internal channel is full.
    pub fn log_action_with_details(&self, action: UserAction, details: Option<String>) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::UserAction { action, details });
        let _ = self.event_tx.try_send(event);
    }

    /// Logs a store state change event.
    ///
    /// Non-blocking; drops the event if the internal channel is full.
    pub fn log_state(&self, state: StoreStateEvent) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::StoreState { state });
        let _ = self.event_tx.try_send(event);
    }

    /// Logs an error event.
    ///
    /// Non-blocking; drops the event if the internal channel is full.
    pub fn log_error(&self, event: ErrorEvent) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::Error { event });
        let _ = self.event_tx.try_send(event);
    }

    /// Attempts to send an action event, reporting whether it was accepted.
    ///
    /// # Errors
    ///
    /// Returns `TrySendError::Full` if the internal channel buffer is full,
    /// or `TrySendError::Disconnected` if the collector has been dropped.
    pub fn try_log_action(&self, action: UserAction) -> Result<(), TrySendError<DiagnosticEvent>> {
        let event = DiagnosticEvent::new(DiagnosticEventKind::UserAction {
            action,
            details: None,
        });
        self.event_tx.try_send(event)
    }
}

/// Central collector for diagnostic events.
///
/// The collector receives events through a channel and stores them in a
/// memory-bounded circular buffer. Old events are automatically evicted when
/// the buffer reaches capacity.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    event_rx: Receiver<DiagnosticEvent>,
    buffer: CircularBuffer<DiagnosticEvent>,
    started_at: Instant,
}

impl DiagnosticsCollector {
    /// Creates a collector with the given buffer capacity, returning the
    /// collector and a handle for call sites.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> (Self, DiagnosticsHandle) {
        let (event_tx, event_rx) = bounded(EVENT_CHANNEL_CAPACITY);
        let collector = Self {
            event_rx,
            buffer: CircularBuffer::new(capacity),
            started_at: Instant::now(),
        };
        (collector, DiagnosticsHandle { event_tx })
    }

    /// Moves all pending events from the channel into the buffer.
    ///
    /// Returns the number of events processed.
    pub fn process_pending(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
            processed += 1;
        }
        processed
    }

    /// Returns the buffered events in chronological order (oldest first).
    pub fn events(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Returns the number of buffered events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if no events are buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Clears all buffered events.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// When this collector started capturing (monotonic).
    #[must_use]
    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// Builds a report from the currently buffered events.
    #[must_use]
    pub fn report(&self) -> DiagnosticReport {
        let events: Vec<DiagnosticEvent> = self.buffer.iter().cloned().collect();
        DiagnosticReport::new(&events, self.started_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::ErrorType;

    fn select_action() -> UserAction {
        UserAction::SelectGraph
    }

    #[test]
    fn logged_actions_reach_the_buffer_after_processing() {
        let (mut collector, handle) = DiagnosticsCollector::new(BufferCapacity::default());
        handle.log_action(select_action());
        handle.log_action_with_details(
            UserAction::LoadGraphList {
                source: Some("remote_query".to_string()),
            },
            Some("42 records".to_string()),
        );

        assert!(collector.is_empty());
        assert_eq!(collector.process_pending(), 2);
        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn state_and_error_events_are_collected() {
        let (mut collector, handle) = DiagnosticsCollector::new(BufferCapacity::default());
        handle.log_state(StoreStateEvent::GraphsLoaded { count: 3 });
        handle.log_error(ErrorEvent::new(ErrorType::DocumentParse, "bad token"));
        collector.process_pending();

        let kinds: Vec<_> = collector.events().map(|e| &e.kind).collect();
        assert!(matches!(kinds[0], DiagnosticEventKind::StoreState { .. }));
        assert!(matches!(kinds[1], DiagnosticEventKind::Error { .. }));
    }

    #[test]
    fn try_log_action_reports_full_channel() {
        let (collector, handle) = DiagnosticsCollector::new(BufferCapacity::default());
        for _ in 0..EVENT_CHANNEL_CAPACITY {
            handle
                .try_log_action(select_action())
                .expect("channel should accept events up to capacity");
        }

        let result = handle.try_log_action(select_action());
        assert!(matches!(result, Err(TrySendError::Full(_))));
        drop(collector);
    }

    #[test]
    fn log_action_drops_silently_when_full() {
        let (mut collector, handle) = DiagnosticsCollector::new(BufferCapacity::default());
        for _ in 0..(EVENT_CHANNEL_CAPACITY + 10) {
            handle.log_action(select_action());
        }

        // Only the channel capacity worth of events survives
        assert_eq!(collector.process_pending(), EVENT_CHANNEL_CAPACITY);
    }

    #[test]
    fn disconnected_collector_is_reported() {
        let (collector, handle) = DiagnosticsCollector::new(BufferCapacity::default());
        drop(collector);
        let result = handle.try_log_action(select_action());
        assert!(matches!(result, Err(TrySendError::Disconnected(_))));
    }

    #[test]
    fn clear_resets_buffer_but_keeps_channel() {
        let (mut collector, handle) = DiagnosticsCollector::new(BufferCapacity::default());
        handle.log_action(select_action());
        collector.process_pending();
        collector.clear();
        assert!(collector.is_empty());

        handle.log_action(select_action());
        collector.process_pending();
        assert_eq!(collector.len(), 1);
    }

    #[test]
    fn report_includes_buffered_events() {
        let (mut collector, handle) = DiagnosticsCollector::new(BufferCapacity::default());
        handle.log_state(StoreStateEvent::StoreCleared);
        collector.process_pending();

        let report = collector.report();
        assert_eq!(report.metadata.event_count, 1);
        assert_eq!(report.events.len(), 1);
    }
}
