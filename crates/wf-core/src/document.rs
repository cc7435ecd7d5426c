//! JSON save/load for wireframe documents.
//!
//! The export/import unit is `{ nodes, edges, metadata }`. Import only
//! checks that `nodes` and `edges` are present and array-typed — metadata
//! (including its `version` tag) is accepted uncritically on read and
//! regenerated on every export.

use crate::model::{Edge, Node};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Version tag stamped into exported documents.
pub const FORMAT_VERSION: &str = "1.0";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// RFC 3339 timestamp of the export, not of the last edit.
    #[serde(rename = "savedAt")]
    pub saved_at: String,
    pub version: String,
}

/// A complete saved document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub metadata: DocumentMetadata,
}

/// Serialize the current collections into a pretty-printed document.
pub fn export_document(
    nodes: &[Node],
    edges: &[Edge],
    saved_at: OffsetDateTime,
) -> Result<String, String> {
    let stamp = saved_at
        .format(&Rfc3339)
        .map_err(|e| format!("timestamp formatting failed: {e}"))?;
    let document = Document {
        nodes: nodes.to_vec(),
        edges: edges.to_vec(),
        metadata: DocumentMetadata {
            saved_at: stamp,
            version: FORMAT_VERSION.to_string(),
        },
    };
    serde_json::to_string_pretty(&document)
        .map_err(|e| format!("document serialization failed: {e}"))
}

/// File name for an export performed on `date`: `wireframe-YYYY-MM-DD.json`.
pub fn export_file_name(date: time::Date) -> String {
    format!(
        "wireframe-{:04}-{:02}-{:02}.json",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// Parse and validate a document, returning its collections.
///
/// Rejects any input where `nodes` or `edges` is missing or not an array;
/// the caller's state must stay untouched on error.
pub fn import_document(text: &str) -> Result<(Vec<Node>, Vec<Edge>), String> {
    let value: Value = serde_json::from_str(text).map_err(|e| format!("invalid JSON: {e}"))?;
    let nodes = value
        .get("nodes")
        .filter(|v| v.is_array())
        .ok_or_else(|| "invalid document: `nodes` must be an array".to_string())?;
    let edges = value
        .get("edges")
        .filter(|v| v.is_array())
        .ok_or_else(|| "invalid document: `edges` must be an array".to_string())?;

    let nodes: Vec<Node> =
        serde_json::from_value(nodes.clone()).map_err(|e| format!("malformed node entry: {e}"))?;
    let edges: Vec<Edge> =
        serde_json::from_value(edges.clone()).map_err(|e| format!("malformed edge entry: {e}"))?;
    Ok((nodes, edges))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use time::macros::date;

    #[test]
    fn file_name_uses_export_date() {
        assert_eq!(
            export_file_name(date!(2026-08-04)),
            "wireframe-2026-08-04.json"
        );
        assert_eq!(
            export_file_name(date!(2025-01-31)),
            "wireframe-2025-01-31.json"
        );
    }

    #[test]
    fn import_rejects_non_array_nodes() {
        let err = import_document(r#"{"nodes": {}, "edges": []}"#).unwrap_err();
        assert!(err.contains("nodes"), "unexpected error: {err}");
    }

    #[test]
    fn import_rejects_missing_edges() {
        assert!(import_document(r#"{"nodes": []}"#).is_err());
    }

    #[test]
    fn import_rejects_garbage() {
        assert!(import_document("not json at all").is_err());
    }

    #[test]
    fn import_ignores_metadata_version() {
        // A document from the future is accepted as long as it decodes.
        let text = r#"{"nodes": [], "edges": [], "metadata": {"savedAt": "x", "version": "9.9"}}"#;
        let (nodes, edges) = import_document(text).unwrap();
        assert!(nodes.is_empty());
        assert!(edges.is_empty());
    }
}
