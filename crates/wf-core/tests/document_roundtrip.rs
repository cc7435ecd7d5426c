//! Integration tests: export → import round-trip of wireframe documents.
//!
//! Verifies that no data is lost when converting collections → JSON →
//! collections, and that the wire shape matches what the canvas surface
//! expects.

use pretty_assertions::assert_eq;
use smallvec::smallvec;
use time::macros::datetime;
use wf_core::id::ElementId;
use wf_core::model::*;
use wf_core::{export_document, import_document};

// ─── Helpers ─────────────────────────────────────────────────────────────

fn sample_nodes() -> Vec<Node> {
    vec![
        Node::new(
            ElementId::intern("login"),
            Position::new(100.0, 100.0),
            NodeData {
                title: "Login".into(),
                description: "Entry screen".into(),
                actions: smallvec!["submit".to_string(), "forgot password".to_string()],
            },
        ),
        Node::new(
            ElementId::intern("home"),
            Position::new(0.0, 250.0),
            NodeData {
                title: "Home".into(),
                description: String::new(),
                actions: smallvec![],
            },
        ),
    ]
}

fn sample_edges() -> Vec<Edge> {
    let mut plain = Edge::new(
        ElementId::intern("t_login_home"),
        ElementId::intern("login"),
        ElementId::intern("home"),
    );
    plain.data.description = Some(String::new());

    let mut styled = Edge::new(
        ElementId::intern("t_home_login"),
        ElementId::intern("home"),
        ElementId::intern("login"),
    );
    styled.apply(&EdgePatch {
        kind: Some(EdgeKind::SmoothStep),
        description: Some("log out".into()),
        color: Some("#ff0000".into()),
        arrow: Some(ArrowKind::Bidirectional),
    });

    // Endpoint that no longer exists — dangling edges are legal.
    let dangling = Edge::new(
        ElementId::intern("t_orphan"),
        ElementId::intern("deleted_screen"),
        ElementId::intern("home"),
    );

    vec![plain, styled, dangling]
}

// ─── Round-trip law ──────────────────────────────────────────────────────

#[test]
fn roundtrip_preserves_collections() {
    let nodes = sample_nodes();
    let edges = sample_edges();

    let text = export_document(&nodes, &edges, datetime!(2026-08-04 12:00 UTC)).unwrap();
    let (nodes2, edges2) = import_document(&text).unwrap();

    assert_eq!(nodes, nodes2);
    assert_eq!(edges, edges2);
}

#[test]
fn reexport_is_stable_modulo_timestamp() {
    let nodes = sample_nodes();
    let edges = sample_edges();
    let stamp = datetime!(2026-08-04 12:00 UTC);

    let first = export_document(&nodes, &edges, stamp).unwrap();
    let (n, e) = import_document(&first).unwrap();
    let second = export_document(&n, &e, stamp).unwrap();

    assert_eq!(first, second);
}

// ─── Wire shape ──────────────────────────────────────────────────────────

#[test]
fn exported_shape_matches_surface_vocabulary() {
    let text = export_document(
        &sample_nodes(),
        &sample_edges(),
        datetime!(2026-08-04 12:00 UTC),
    )
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(value["metadata"]["version"], "1.0");
    assert_eq!(value["metadata"]["savedAt"], "2026-08-04T12:00:00Z");

    let node = &value["nodes"][0];
    assert_eq!(node["id"], "login");
    assert_eq!(node["type"], "wireframeNode");
    assert_eq!(node["position"]["x"], 100.0);
    assert_eq!(node["data"]["actions"][1], "forgot password");

    let styled = &value["edges"][1];
    assert_eq!(styled["type"], "smoothstep");
    assert_eq!(styled["data"]["arrowType"], "bidirectional");
    assert_eq!(styled["style"]["stroke"], "#ff0000");
    assert_eq!(styled["markerStart"]["type"], "arrow");
    assert_eq!(styled["markerEnd"]["type"], "arrow");

    // The plain edge never had color or arrow set: the derived keys stay
    // off the wire entirely.
    let plain = &value["edges"][0];
    assert!(plain.get("style").is_none());
    assert!(plain.get("markerStart").is_none());
    assert!(plain.get("markerEnd").is_none());
}

#[test]
fn import_defaults_optional_fields() {
    // Minimal entries the way an older export (or a hand-written file)
    // might look.
    let text = r#"{
        "nodes": [{ "id": "a" }],
        "edges": [{ "id": "e", "source": "a", "target": "b" }]
    }"#;
    let (nodes, edges) = import_document(text).unwrap();

    assert_eq!(nodes[0].kind, NodeKind::Wireframe);
    assert_eq!(nodes[0].position, Position::default());
    assert!(nodes[0].data.actions.is_empty());

    assert_eq!(edges[0].kind, EdgeKind::Default);
    assert_eq!(edges[0].data, EdgeData::default());
    assert_eq!(edges[0].marker_end, None);
}
