// SPDX-License-Identifier: MPL-2.0
//! Graph entity types for the domain layer.

pub mod document;
pub mod types;

pub use document::{GraphDocument, GraphDocumentError};
pub use types::{Graph, GraphCollection, GraphId};
