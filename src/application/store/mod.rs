// SPDX-License-Identifier: MPL-2.0
//! Graph store for managing the loaded graph list and selection state.
//!
//! This module provides the shared [`GraphStore`] used by the viewer
//! components as the single source of truth for the graph list, the current
//! selection, and the cached topology document string.
//!
//! All operations are synchronous and complete within the caller's turn. The
//! store holds no external resources; in a multi-threaded host it must sit
//! behind one exclusive lock (or an actor) covering every read-modify-write
//! of its state.

use crate::application::port::RemoteGraph;
use crate::domain::graph::{Graph, GraphCollection, GraphDocument, GraphId};
use crate::error::Result;

/// Store state information for UI rendering.
///
/// A snapshot of everything a list or detail view needs to render chrome
/// around the graph content, without direct access to the collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreSnapshot {
    /// Whether a graph list has been loaded (even an empty one).
    pub loaded: bool,
    /// Number of graphs in the loaded list.
    pub total_count: usize,
    /// Whether a selection id is set, resolved or not.
    pub has_selection: bool,
    /// Position of the selected graph in the list, when it resolves.
    pub selected_index: Option<usize>,
    /// Whether a cached document string is present.
    pub has_document_json: bool,
}

/// Holds the graph list, the current selection, and the cached document
/// string.
///
/// The selection is a weak reference by identifier: reloading the list does
/// not touch it, and a selection that no longer matches any loaded graph
/// simply resolves to absent. The list is only ever replaced wholesale.
///
/// # Load pathways
///
/// Two entry points replace the list with identical effect but different
/// caller intent: [`GraphStore::load_from_query`] takes records in the remote
/// catalog's wire shape, [`GraphStore::load_from_matched`] takes entities a
/// routing/matching collaborator already assembled. Call sites stay
/// self-documenting about where their data came from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GraphStore {
    /// Loaded graph records, or not-loaded.
    graphs: GraphCollection,
    /// Identifier of the currently selected graph.
    selected_id: Option<GraphId>,
    /// Cached serialized document for the selected graph.
    selected_document_json: Option<String>,
}

impl GraphStore {
    /// Creates a new store with nothing loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Replaces the graph list with records fetched from the remote catalog.
    ///
    /// Records are normalized from the wire shape before storage. Ordering is
    /// preserved; identifiers are not deduplicated.
    pub fn load_from_query(&mut self, records: Vec<RemoteGraph>) {
        self.graphs = GraphCollection::Loaded(records.into_iter().map(Graph::from).collect());
    }

    /// Replaces the graph list with entities assembled by a routing/matching
    /// collaborator.
    pub fn load_from_matched(&mut self, graphs: Vec<Graph>) {
        self.graphs = GraphCollection::Loaded(graphs);
    }

    /// Sets the selected graph identifier.
    ///
    /// The identifier does not have to match a loaded graph; an unmatched
    /// selection resolves to absent until a list containing it is loaded.
    pub fn select(&mut self, id: impl Into<GraphId>) {
        self.selected_id = Some(id.into());
    }

    /// Caches a serialized document string for the selected graph.
    pub fn set_document_json(&mut self, json: impl Into<String>) {
        self.selected_document_json = Some(json.into());
    }

    /// Drops the graph list, returning the store to the not-loaded state.
    pub fn clear_graphs(&mut self) {
        self.graphs = GraphCollection::NotLoaded;
    }

    /// Drops the selection.
    pub fn clear_selection(&mut self) {
        self.selected_id = None;
    }

    /// Drops the cached document string.
    pub fn clear_document_json(&mut self) {
        self.selected_document_json = None;
    }

    /// Drops the list, the selection, and the cached document string.
    ///
    /// Equivalent to calling the three individual clears; idempotent.
    pub fn clear_all(&mut self) {
        self.clear_graphs();
        self.clear_selection();
        self.clear_document_json();
    }

    // =========================================================================
    // Derived views
    // =========================================================================

    /// Returns `true` once a list has been loaded, even an empty one.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.graphs.is_loaded()
    }

    /// Returns `true` when there are no usable graphs.
    ///
    /// True both before any load and after loading an empty list; use
    /// [`GraphStore::is_loaded`] to tell the two apart.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }

    /// Returns the number of loaded graphs (zero when not loaded).
    #[must_use]
    pub fn len(&self) -> usize {
        self.graphs.len()
    }

    /// Returns the loaded graph list, or `None` when nothing was loaded.
    #[must_use]
    pub fn graphs(&self) -> Option<&[Graph]> {
        self.graphs.as_slice()
    }

    /// Finds the first graph whose identifier equals `id`.
    ///
    /// Linear scan over the loaded list, first match wins. Absent when the
    /// list is not loaded or no record matches.
    #[must_use]
    pub fn graph_by_id(&self, id: &str) -> Option<&Graph> {
        self.graphs.by_id(id)
    }

    /// Returns the graph at `index`, or `None` when out of bounds or not
    /// loaded. Absence is the signal; no error is raised.
    #[must_use]
    pub fn graph_by_index(&self, index: usize) -> Option<&Graph> {
        self.graphs.get(index)
    }

    /// Returns the selected graph identifier, if set.
    #[must_use]
    pub fn selected_id(&self) -> Option<&GraphId> {
        self.selected_id.as_ref()
    }

    /// Resolves the selection against the loaded list.
    ///
    /// Absent when no selection is set, nothing is loaded, or the selection
    /// dangles (its id is not in the current list).
    #[must_use]
    pub fn selected_graph(&self) -> Option<&Graph> {
        self.graphs.by_id(self.selected_id.as_ref()?.as_str())
    }

    /// Returns the position of the selected graph in the list, when the
    /// selection resolves.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.graphs.position_of(self.selected_id.as_ref()?.as_str())
    }

    /// Parses the selected graph's topology document.
    ///
    /// Returns `Ok(None)` when no selection resolves or the selected graph
    /// carries no document.
    ///
    /// # Errors
    ///
    /// Returns an error when the selected graph's document is not well-formed
    /// JSON.
    pub fn selected_document(&self) -> Result<Option<GraphDocument>> {
        let Some(graph) = self.selected_graph() else {
            return Ok(None);
        };
        match graph.cyjs.as_deref() {
            Some(raw) => Ok(Some(GraphDocument::parse(raw)?)),
            None => Ok(None),
        }
    }

    /// Returns the selected graph's content payload, if any.
    #[must_use]
    pub fn selected_content(&self) -> Option<&str> {
        self.selected_graph()?.content.as_deref()
    }

    /// Returns the cached document string, if set.
    #[must_use]
    pub fn document_json(&self) -> Option<&str> {
        self.selected_document_json.as_deref()
    }

    /// Returns a snapshot of the current store state for UI rendering.
    #[must_use]
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            loaded: self.is_loaded(),
            total_count: self.len(),
            has_selection: self.selected_id.is_some(),
            selected_index: self.selected_index(),
            has_document_json: self.selected_document_json.is_some(),
        }
    }
}
