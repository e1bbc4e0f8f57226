// SPDX-License-Identifier: MPL-2.0
//! Core graph types for the domain layer.
//!
//! These types represent pure data without any presentation or transport
//! dependencies. A [`Graph`] is one tutorial graph record; a
//! [`GraphCollection`] is the loaded-or-not state of the whole catalog slice
//! held by the store.

use std::fmt;

// =============================================================================
// GraphId
// =============================================================================

/// Opaque identifier of a graph record.
///
/// Identifiers are expected (not required) to be unique within a collection;
/// lookups are first-match-wins either way.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GraphId(String);

impl GraphId {
    /// Creates an identifier from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for GraphId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for GraphId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

// =============================================================================
// Graph
// =============================================================================

/// A single graph record: identifier, serialized topology, and content.
///
/// The topology lives in `cyjs` as a serialized JSON document that is parsed
/// on demand (see [`GraphDocument`](super::GraphDocument)); `content` carries
/// the descriptive markup shown next to the rendered graph. The remaining
/// fields are descriptive only and not load-bearing for store behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    /// Unique identifier within the collection.
    pub id: GraphId,
    /// Human-readable graph name.
    pub name: String,
    /// URL slug used by the routing collaborator.
    pub url: String,
    /// Ordering hint used when listing graphs.
    pub priority: i32,
    /// Author display names.
    pub authors: Vec<String>,
    /// Category labels.
    pub categories: Vec<String>,
    /// Whether the record is publicly visible.
    pub is_published: bool,
    /// Serialized graph-topology document, parseable on demand.
    pub cyjs: Option<String>,
    /// Associated descriptive payload (text/markup).
    pub content: Option<String>,
}

impl Graph {
    /// Creates a graph record with the given identifier and name.
    ///
    /// All descriptive fields start empty; `cyjs` and `content` start absent.
    #[must_use]
    pub fn new(id: impl Into<GraphId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url: String::new(),
            priority: 0,
            authors: Vec::new(),
            categories: Vec::new(),
            is_published: false,
            cyjs: None,
            content: None,
        }
    }

    /// Sets the serialized topology document.
    #[must_use]
    pub fn with_cyjs(mut self, cyjs: impl Into<String>) -> Self {
        self.cyjs = Some(cyjs.into());
        self
    }

    /// Sets the descriptive content payload.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}

// =============================================================================
// GraphCollection
// =============================================================================

/// The loaded-or-not state of the graph list.
///
/// "No data loaded yet" is a distinct state from "loaded, empty": a router
/// can tell an unfetched catalog apart from a catalog that genuinely has no
/// published graphs. The collection is only ever replaced wholesale; records
/// are never patched in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum GraphCollection {
    /// No list has been loaded.
    #[default]
    NotLoaded,
    /// A list was loaded, possibly empty.
    Loaded(Vec<Graph>),
}

impl GraphCollection {
    /// Returns `true` once a list has been loaded, even an empty one.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        matches!(self, GraphCollection::Loaded(_))
    }

    /// Returns the loaded records, or `None` when nothing was loaded.
    #[must_use]
    pub fn as_slice(&self) -> Option<&[Graph]> {
        match self {
            GraphCollection::NotLoaded => None,
            GraphCollection::Loaded(graphs) => Some(graphs),
        }
    }

    /// Returns the number of loaded records (zero when not loaded).
    #[must_use]
    pub fn len(&self) -> usize {
        self.as_slice().map_or(0, <[Graph]>::len)
    }

    /// Returns `true` when there are no usable records.
    ///
    /// Both the not-loaded state and a loaded-but-empty list count as empty;
    /// use [`GraphCollection::is_loaded`] to distinguish them.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the record at `index`, or `None` when out of bounds or not
    /// loaded.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Graph> {
        self.as_slice().and_then(|graphs| graphs.get(index))
    }

    /// Finds the first record whose identifier equals `id`.
    ///
    /// Linear scan, first match wins.
    #[must_use]
    pub fn by_id(&self, id: &str) -> Option<&Graph> {
        self.as_slice()?.iter().find(|g| g.id.as_str() == id)
    }

    /// Returns the position of the first record whose identifier equals `id`.
    #[must_use]
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.as_slice()?.iter().position(|g| g.id.as_str() == id)
    }
}
