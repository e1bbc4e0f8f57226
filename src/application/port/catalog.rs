// SPDX-License-Identifier: MPL-2.0
//! Graph catalog port definition.
//!
//! This module defines the [`GraphCatalog`] trait for the external
//! collaborator that supplies graph records, together with the remote wire
//! shape it yields. The store never fetches anything itself; an HTTP or
//! routing adapter implements this trait and pushes the results in.

use std::fmt;

use serde::Deserialize;

use crate::domain::graph::{Graph, GraphId};

// =============================================================================
// CatalogError
// =============================================================================

/// Errors that can occur while fetching graph records.
#[derive(Debug, Clone)]
pub enum CatalogError {
    /// The catalog could not be reached.
    Unavailable(String),

    /// The catalog answered with a payload that could not be decoded.
    Decode(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Unavailable(msg) => write!(f, "Catalog unavailable: {msg}"),
            CatalogError::Decode(msg) => write!(f, "Undecodable catalog payload: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

// =============================================================================
// RemoteGraph
// =============================================================================

/// A graph record in the remote catalog's wire shape.
///
/// Field names follow the remote query response (camelCase). Descriptive
/// fields are optional on the wire and default to empty; only `id` and
/// `name` are required.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteGraph {
    /// Unique identifier of the record.
    pub id: String,
    /// Human-readable graph name.
    pub name: String,
    /// URL slug used by the routing collaborator.
    #[serde(default)]
    pub url: String,
    /// Ordering hint used when listing graphs.
    #[serde(default)]
    pub priority: i32,
    /// Author display names.
    #[serde(default)]
    pub authors: Vec<String>,
    /// Category labels.
    #[serde(default)]
    pub categories: Vec<String>,
    /// Whether the record is publicly visible.
    #[serde(default)]
    pub is_published: bool,
    /// Serialized graph-topology document.
    #[serde(default)]
    pub cyjs: Option<String>,
    /// Associated descriptive payload.
    #[serde(default)]
    pub content: Option<String>,
}

impl From<RemoteGraph> for Graph {
    fn from(record: RemoteGraph) -> Self {
        Graph {
            id: GraphId::from(record.id),
            name: record.name,
            url: record.url,
            priority: record.priority,
            authors: record.authors,
            categories: record.categories,
            is_published: record.is_published,
            cyjs: record.cyjs,
            content: record.content,
        }
    }
}

// =============================================================================
// GraphCatalog Trait
// =============================================================================

/// Port toward the external collaborator that supplies graph records.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; adapters are typically shared with
/// whatever task pool performs the actual transport work.
///
/// # Example
///
/// ```
/// use graphbook::application::port::{CatalogError, GraphCatalog, RemoteGraph};
/// use graphbook::GraphStore;
///
/// struct FixtureCatalog(Vec<RemoteGraph>);
///
/// impl GraphCatalog for FixtureCatalog {
///     fn fetch_graphs(&self) -> Result<Vec<RemoteGraph>, CatalogError> {
///         Ok(self.0.clone())
///     }
/// }
///
/// fn refresh(store: &mut GraphStore, catalog: &impl GraphCatalog) -> Result<(), CatalogError> {
///     store.load_from_query(catalog.fetch_graphs()?);
///     Ok(())
/// }
/// ```
pub trait GraphCatalog: Send + Sync {
    /// Fetches the full list of graph records.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the catalog cannot be reached or its
    /// payload cannot be decoded.
    fn fetch_graphs(&self) -> Result<Vec<RemoteGraph>, CatalogError>;
}
