//! Inspector panel data-binding.
//!
//! Widget rendering lives outside this crate. The panel here resolves the
//! current selection against the store snapshot, funnels field edits into
//! single-key patches, and drives JSON export/import. Edits with no
//! matching selection are no-ops.

use time::OffsetDateTime;
use wf_core::document;
use wf_core::model::{ArrowKind, Edge, EdgeKind, EdgePatch, ElementKind, Node, NodePatch, Selection};
use wf_core::store::{GraphState, WireframeStore};

/// An export ready to hand to the surface's download mechanism.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub contents: String,
}

/// Data-binding state for the inspector panel.
#[derive(Debug, Default)]
pub struct InspectorPanel {
    /// Pending text in the "add action" input.
    action_input: String,
}

impl InspectorPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn action_input(&self) -> &str {
        &self.action_input
    }

    /// Widget binding for the action input field.
    pub fn set_action_input(&mut self, text: impl Into<String>) {
        self.action_input = text.into();
    }

    // ─── Selection resolution ────────────────────────────────────────────

    /// The selected node, if the selection points at one.
    pub fn selected_node<'a>(&self, state: &'a GraphState) -> Option<&'a Node> {
        match state.selection {
            Some(Selection {
                kind: ElementKind::Node,
                id,
            }) => state.node(id),
            _ => None,
        }
    }

    /// The selected edge, if the selection points at one.
    pub fn selected_edge<'a>(&self, state: &'a GraphState) -> Option<&'a Edge> {
        match state.selection {
            Some(Selection {
                kind: ElementKind::Edge,
                id,
            }) => state.edge(id),
            _ => None,
        }
    }

    // ─── Node fields ─────────────────────────────────────────────────────

    pub fn set_title(&self, store: &mut WireframeStore, title: &str) {
        let state = store.snapshot();
        if let Some(node) = self.selected_node(&state) {
            let id = node.id;
            store.update_node(id, NodePatch::title(title));
        }
    }

    pub fn set_description(&self, store: &mut WireframeStore, description: &str) {
        let state = store.snapshot();
        if let Some(node) = self.selected_node(&state) {
            let id = node.id;
            store.update_node(id, NodePatch::description(description));
        }
    }

    /// Append the pending action to the selected node. Whitespace-only
    /// input is rejected; the input clears only on success.
    pub fn submit_action(&mut self, store: &mut WireframeStore) -> bool {
        let action = self.action_input.trim().to_string();
        if action.is_empty() {
            return false;
        }
        let state = store.snapshot();
        let Some(node) = self.selected_node(&state) else {
            return false;
        };
        let id = node.id;
        store.add_action(id, action);
        self.action_input.clear();
        true
    }

    /// Remove the action at `index` from the selected node.
    pub fn remove_action(&self, store: &mut WireframeStore, index: usize) {
        let state = store.snapshot();
        if let Some(node) = self.selected_node(&state) {
            let id = node.id;
            store.remove_action(id, index);
        }
    }

    // ─── Edge fields ─────────────────────────────────────────────────────

    pub fn set_edge_description(&self, store: &mut WireframeStore, description: &str) {
        self.patch_selected_edge(store, EdgePatch::description(description));
    }

    pub fn set_edge_kind(&self, store: &mut WireframeStore, kind: EdgeKind) {
        self.patch_selected_edge(store, EdgePatch::kind(kind));
    }

    pub fn set_edge_color(&self, store: &mut WireframeStore, color: &str) {
        self.patch_selected_edge(store, EdgePatch::color(color));
    }

    pub fn set_edge_arrow(&self, store: &mut WireframeStore, arrow: ArrowKind) {
        self.patch_selected_edge(store, EdgePatch::arrow(arrow));
    }

    fn patch_selected_edge(&self, store: &mut WireframeStore, patch: EdgePatch) {
        let state = store.snapshot();
        if let Some(edge) = self.selected_edge(&state) {
            let id = edge.id;
            store.update_edge(id, patch);
        }
    }

    // ─── Save / load ─────────────────────────────────────────────────────

    /// Serialize the current document for download. Returns `None` (and
    /// logs) if serialization fails; no partial file is produced.
    pub fn export(&self, store: &WireframeStore) -> Option<ExportFile> {
        let state = store.snapshot();
        let now = OffsetDateTime::now_utc();
        match document::export_document(&state.nodes, &state.edges, now) {
            Ok(contents) => Some(ExportFile {
                file_name: document::export_file_name(now.date()),
                contents,
            }),
            Err(err) => {
                log::error!("error saving wireframe: {err}");
                None
            }
        }
    }

    /// Replace the whole document from imported text. Returns whether the
    /// import was applied; on failure the store is left untouched.
    pub fn import(&self, store: &mut WireframeStore, text: &str) -> bool {
        match document::import_document(text) {
            Ok((nodes, edges)) => {
                store.set_nodes(nodes);
                store.set_edges(edges);
                true
            }
            Err(err) => {
                log::error!("error loading wireframe: {err}");
                false
            }
        }
    }
}
