// SPDX-License-Identifier: MPL-2.0
//! Port definitions for dependency inversion.

pub mod catalog;

pub use catalog::{CatalogError, GraphCatalog, RemoteGraph};
