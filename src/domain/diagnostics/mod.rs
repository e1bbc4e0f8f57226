// SPDX-License-Identifier: MPL-2.0
//! Diagnostics value objects.

pub mod newtypes;

pub use newtypes::{buffer_capacity_bounds, BufferCapacity};
