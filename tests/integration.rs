// SPDX-License-Identifier: MPL-2.0
use graphbook::application::port::{CatalogError, GraphCatalog, RemoteGraph};
use graphbook::config::{self, Config, DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY};
use graphbook::diagnostics::{
    BufferCapacity, DiagnosticsCollector, StoreStateEvent, UserAction,
};
use graphbook::{Graph, GraphStore};
use tempfile::tempdir;

/// A catalog stub that serves records decoded from a canned payload, the way
/// a transport adapter would.
struct FixtureCatalog {
    payload: &'static str,
}

impl GraphCatalog for FixtureCatalog {
    fn fetch_graphs(&self) -> Result<Vec<RemoteGraph>, CatalogError> {
        serde_json::from_str(self.payload).map_err(|e| CatalogError::Decode(e.to_string()))
    }
}

const CATALOG_PAYLOAD: &str = r#"[
    {
        "id": "dfs",
        "name": "Depth First Search",
        "url": "depth-first-search",
        "priority": 10,
        "isPublished": true,
        "cyjs": "{\"elements\":{\"nodes\":[{\"data\":{\"id\":\"n0\"}}],\"edges\":[]}}",
        "content": "<p>Start at the root and go deep.</p>"
    },
    {
        "id": "bfs",
        "name": "Breadth First Search",
        "url": "breadth-first-search",
        "priority": 9,
        "isPublished": true
    }
]"#;

#[test]
fn catalog_to_store_flow_resolves_selection_and_document() {
    let catalog = FixtureCatalog {
        payload: CATALOG_PAYLOAD,
    };

    let mut store = GraphStore::new();
    let records = catalog.fetch_graphs().expect("fixture payload must decode");
    store.load_from_query(records);

    assert!(store.is_loaded());
    assert_eq!(store.len(), 2);

    store.select("dfs");
    let selected = store.selected_graph().expect("selection must resolve");
    assert_eq!(selected.name, "Depth First Search");
    assert_eq!(
        store.selected_content(),
        Some("<p>Start at the root and go deep.</p>")
    );

    let document = store
        .selected_document()
        .expect("document must parse")
        .expect("dfs carries a document");
    assert!(document.has_elements());
    assert_eq!(
        document.as_value()["elements"]["nodes"][0]["data"]["id"],
        "n0"
    );
}

#[test]
fn catalog_decode_failure_surfaces_as_catalog_error() {
    let catalog = FixtureCatalog {
        payload: "[{\"name\":\"missing id\"}]",
    };
    let err = catalog.fetch_graphs().expect_err("payload must be rejected");
    assert!(matches!(err, CatalogError::Decode(_)));
}

#[test]
fn route_matched_load_then_clear_all_resets_everything() {
    let mut store = GraphStore::new();
    store.load_from_matched(vec![
        Graph::new("dfs", "Depth First Search").with_cyjs(r#"{"nodes":[]}"#),
        Graph::new("bfs", "Breadth First Search"),
    ]);
    store.select("bfs");
    store.set_document_json(r#"{"nodes":[]}"#);

    store.clear_all();

    assert!(!store.is_loaded());
    assert!(store.is_empty());
    assert_eq!(store.selected_id(), None);
    assert_eq!(store.document_json(), None);
    assert_eq!(store.graphs(), None);

    // Clearing again changes nothing
    let cleared = store.clone();
    store.clear_all();
    assert_eq!(store, cleared);
}

#[test]
fn config_round_trip_drives_collector_capacity() {
    let dir = tempdir().expect("failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let config = Config {
        language: Some("en-us".to_string()),
        dark_mode: Some(true),
        diagnostics_buffer_capacity: Some(120),
    };
    config::save_to_path(&config, &config_path).expect("failed to write config file");

    let loaded = config::load_from_path(&config_path).expect("failed to load config from path");
    assert_eq!(loaded, config);

    let capacity = BufferCapacity::new(
        loaded
            .diagnostics_buffer_capacity
            .unwrap_or(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY),
    );
    let (collector, _handle) = DiagnosticsCollector::new(capacity);
    assert!(collector.is_empty());
}

#[test]
fn store_activity_shows_up_in_diagnostic_report() {
    let (mut collector, handle) = DiagnosticsCollector::new(BufferCapacity::default());
    let mut store = GraphStore::new();

    let catalog = FixtureCatalog {
        payload: CATALOG_PAYLOAD,
    };
    let records = catalog.fetch_graphs().expect("fixture payload must decode");
    let count = records.len();
    store.load_from_query(records);
    handle.log_action(UserAction::LoadGraphList {
        source: Some("remote_query".to_string()),
    });
    handle.log_state(StoreStateEvent::GraphsLoaded { count });

    store.select("bfs");
    handle.log_action_with_details(UserAction::SelectGraph, Some("bfs".to_string()));
    handle.log_state(StoreStateEvent::SelectionChanged {
        resolved: store.selected_graph().is_some(),
    });

    collector.process_pending();
    let report = collector.report();
    assert_eq!(report.metadata.event_count, 4);
    assert_eq!(report.summary.user_actions, 2);
    assert_eq!(report.summary.state_changes, 2);

    let json = report.to_json().expect("report must serialize");
    assert!(json.contains("\"action\": \"select_graph\""));
    assert!(json.contains("\"count\": 2"));
}
