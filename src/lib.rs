// SPDX-License-Identifier: MPL-2.0
//! `graphbook` is the client-side state core of a graph tutorial viewer.
//!
//! It provides a normalized store of graph entities with a selection pointer
//! and derived read-only views, a port toward the remote graph catalog,
//! persisted user preferences, static site metadata, and diagnostics capture.
//! Rendering, routing, and network fetch live in external collaborators that
//! call into the store.

#![doc(html_root_url = "https://docs.rs/graphbook/0.1.0")]

pub mod application;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;

pub use application::port::{CatalogError, GraphCatalog, RemoteGraph};
pub use application::store::{GraphStore, StoreSnapshot};
pub use domain::graph::{Graph, GraphCollection, GraphDocument, GraphDocumentError, GraphId};
pub use error::{Error, Result};
