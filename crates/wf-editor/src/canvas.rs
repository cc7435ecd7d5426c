//! Binding layer between the diagramming surface and the store.
//!
//! The surface reports interactions as batches of change events. Each batch
//! is translated into store commands here; neither the surface nor the
//! inspector ever touches the collections directly. Change events are a
//! closed vocabulary (position, remove, select), never an open record.

use wf_core::id::ElementId;
use wf_core::model::{Edge, Node, Position, Selection};
use wf_core::store::WireframeStore;

// ─── Change events ───────────────────────────────────────────────────────

/// A change reported by the surface for one node.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeChange {
    /// The node moved. The surface omits the position on drag start/end
    /// bookkeeping frames; only fully-specified positions are applied.
    Position {
        id: ElementId,
        position: Option<Position>,
    },
    /// The node was removed on the surface (e.g. delete key).
    Remove { id: ElementId },
    /// Selection toggle reported by the surface.
    Select { id: ElementId, selected: bool },
}

/// A change reported by the surface for one edge.
#[derive(Debug, Clone, PartialEq)]
pub enum EdgeChange {
    Remove { id: ElementId },
    Select { id: ElementId, selected: bool },
}

/// A completed connection gesture: the user dragged from a source handle
/// to a target handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    pub source: ElementId,
    pub target: ElementId,
}

// ─── Batch application ───────────────────────────────────────────────────

/// Reconcile a batch of node changes into the store.
///
/// Nodes not mentioned in the batch pass through unchanged. A position
/// change without a position is dropped; zero coordinates apply like any
/// other value.
pub fn apply_node_changes(store: &mut WireframeStore, changes: &[NodeChange]) {
    let state = store.snapshot();
    let mut nodes: Vec<Node> = Vec::with_capacity(state.nodes.len());
    for node in &state.nodes {
        let mut node = node.clone();
        let mut removed = false;
        for change in changes {
            match change {
                NodeChange::Position {
                    id,
                    position: Some(position),
                } if *id == node.id => {
                    node.position = *position;
                }
                NodeChange::Remove { id } if *id == node.id => {
                    removed = true;
                }
                _ => {}
            }
        }
        if !removed {
            nodes.push(node);
        }
    }
    store.set_nodes(nodes);

    for change in changes {
        if let NodeChange::Select { id, selected } = change
            && state.node(*id).is_some()
        {
            apply_selection(store, Selection::node(*id), *selected);
        }
    }
}

/// Reconcile a batch of edge changes into the store. Events for unknown
/// ids are dropped — a change can never insert an edge.
pub fn apply_edge_changes(store: &mut WireframeStore, changes: &[EdgeChange]) {
    let state = store.snapshot();
    let edges: Vec<Edge> = state
        .edges
        .iter()
        .filter(|edge| {
            !changes
                .iter()
                .any(|c| matches!(c, EdgeChange::Remove { id } if *id == edge.id))
        })
        .cloned()
        .collect();
    store.set_edges(edges);

    for change in changes {
        if let EdgeChange::Select { id, selected } = change
            && state.edge(*id).is_some()
        {
            apply_selection(store, Selection::edge(*id), *selected);
        }
    }
}

fn apply_selection(store: &mut WireframeStore, selection: Selection, selected: bool) {
    if selected {
        store.set_selected_element(Some(selection));
    } else if store.snapshot().selection == Some(selection) {
        store.set_selected_element(None);
    }
}

// ─── Connections ─────────────────────────────────────────────────────────

/// Append a new edge for a completed connection gesture. The edge starts
/// with an empty description and no styling; the inspector fills it in.
pub fn connect(store: &mut WireframeStore, connection: Connection) {
    let state = store.snapshot();
    let id = fresh_edge_id(&state.edges);
    let mut edge = Edge::new(id, connection.source, connection.target);
    edge.data.description = Some(String::new());

    let mut edges = state.edges.clone();
    edges.push(edge);
    store.set_edges(edges);
}

/// A session-unique edge id, re-rolled past any ids taken by an imported
/// document.
fn fresh_edge_id(edges: &[Edge]) -> ElementId {
    loop {
        let id = ElementId::next_edge();
        if !edges.iter().any(|e| e.id == id) {
            return id;
        }
    }
}

// ─── Auto-arrange ────────────────────────────────────────────────────────

/// Auto-arrange grid shape.
const GRID_COLUMNS: usize = 3;
const GRID_H_SPACING: f32 = 300.0;
const GRID_V_SPACING: f32 = 200.0;
const GRID_ORIGIN: Position = Position::new(100.0, 100.0);

/// Reposition every node into a fixed grid, preserving collection order.
pub fn arrange_grid(store: &mut WireframeStore) {
    let state = store.snapshot();
    let nodes = state
        .nodes
        .iter()
        .enumerate()
        .map(|(i, node)| {
            let mut node = node.clone();
            node.position = Position::new(
                GRID_ORIGIN.x + (i % GRID_COLUMNS) as f32 * GRID_H_SPACING,
                GRID_ORIGIN.y + (i / GRID_COLUMNS) as f32 * GRID_V_SPACING,
            );
            node
        })
        .collect();
    store.set_nodes(nodes);
}

// ─── Click-to-select ─────────────────────────────────────────────────────

/// A node was clicked on the surface.
pub fn select_node(store: &mut WireframeStore, id: ElementId) {
    store.set_selected_element(Some(Selection::node(id)));
}

/// An edge was clicked on the surface.
pub fn select_edge(store: &mut WireframeStore, id: ElementId) {
    store.set_selected_element(Some(Selection::edge(id)));
}

pub fn clear_selection(store: &mut WireframeStore) {
    store.set_selected_element(None);
}
