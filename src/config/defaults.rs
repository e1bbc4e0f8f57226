// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants and site metadata.
//!
//! This module serves as the single source of truth for default values used
//! across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Diagnostics**: Event buffer capacity bounds
//! - **Site**: Static site metadata (name, header, navigation, footer)

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default capacity of the diagnostic event buffer.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 500;

/// Minimum diagnostic event buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 50;

/// Maximum diagnostic event buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 5000;

// ==========================================================================
// Site Metadata
// ==========================================================================

/// Display name of the site.
pub const SITE_NAME: &str = "Graphbook";

/// Height of the fixed site header, in pixels.
pub const HEADER_HEIGHT_PX: u32 = 66;

/// Footer markup rendered at the bottom of every page.
pub const FOOTER_HTML: &str = "<div>\u{a9} Graphbook</div> \
    <div class=\"ft\">Interactive tutorials for graph algorithms</div>";

/// One entry in the site's primary navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationEntry {
    /// Label shown to the user (also the route name).
    pub name: &'static str,
    /// Icon identifier in the host's icon set.
    pub icon: &'static str,
}

/// The primary navigation, in display order.
pub const NAVIGATION_ENTRIES: [NavigationEntry; 6] = [
    NavigationEntry {
        name: "Home",
        icon: "mdi-home-circle",
    },
    NavigationEntry {
        name: "Tutorials",
        icon: "mdi-newspaper-variant",
    },
    NavigationEntry {
        name: "Graphs",
        icon: "mdi-graph",
    },
    NavigationEntry {
        name: "About",
        icon: "mdi-clipboard-account-outline",
    },
    NavigationEntry {
        name: "Account",
        icon: "mdi-account-circle",
    },
    NavigationEntry {
        name: "Settings",
        icon: "mdi-cog",
    },
];

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Diagnostics validation
    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(MAX_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);

    // Site validation
    assert!(HEADER_HEIGHT_PX > 0);
    assert!(NAVIGATION_ENTRIES.len() > 0);
};
