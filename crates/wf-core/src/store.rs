//! The graph store — single source of truth for nodes, edges, selection.
//!
//! Components never touch the collections directly: they dispatch a
//! [`StoreCommand`], the store applies it against a fresh copy of the state,
//! swaps its snapshot, and notifies listeners. Readers hold
//! `Arc<GraphState>` snapshots and detect change by pointer inequality
//! (`Arc::ptr_eq`), so every applied command — including a merge that
//! matched nothing — produces a new snapshot.
//!
//! Every command is total: unknown ids and out-of-range indices fall
//! through as no-ops, never errors.

use crate::id::ElementId;
use crate::model::{Edge, EdgePatch, Node, NodeData, NodePatch, Position, Selection};
use rand::Rng;
use smallvec::SmallVec;
use std::sync::Arc;

/// Freshly added nodes spawn at a random spot in `0..SPAWN_EXTENT` on both
/// axes.
const SPAWN_EXTENT: f32 = 500.0;

/// Placeholder content for a freshly added node.
const NEW_NODE_TITLE: &str = "New Node";
const NEW_NODE_DESCRIPTION: &str = "Description here";

/// An immutable snapshot of the whole editor state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphState {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub selection: Option<Selection>,
}

impl GraphState {
    /// Look up a node by id.
    pub fn node(&self, id: ElementId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Look up an edge by id.
    pub fn edge(&self, id: ElementId) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }
}

/// A mutation dispatched to the store.
#[derive(Debug, Clone)]
pub enum StoreCommand {
    /// Append a new node with a fresh id, random position, and placeholder
    /// content.
    AddNode,
    /// Shallow-merge a patch into a node's data.
    UpdateNode { id: ElementId, patch: NodePatch },
    /// Merge a patch into an edge and re-derive its presentation.
    UpdateEdge { id: ElementId, patch: EdgePatch },
    /// Atomically replace the selection; `None` clears it.
    SetSelection { selection: Option<Selection> },
    /// Wholesale node replacement (import, position reconciliation).
    SetNodes { nodes: Vec<Node> },
    /// Wholesale edge replacement (import, connection append).
    SetEdges { edges: Vec<Edge> },
    /// Append an action label to a node's list.
    AddAction { node: ElementId, action: String },
    /// Remove the action at `index`; out of range is a no-op.
    RemoveAction { node: ElementId, index: usize },
}

type Listener = Box<dyn Fn(&Arc<GraphState>)>;

/// Owns the canonical document state and its observers.
pub struct WireframeStore {
    state: Arc<GraphState>,
    listeners: Vec<Listener>,
}

impl WireframeStore {
    /// A store seeded with the welcome node.
    pub fn new() -> Self {
        let welcome = Node::new(
            ElementId::next_node(),
            Position::new(100.0, 100.0),
            NodeData {
                title: "Welcome".to_string(),
                description: "Start by adding some nodes".to_string(),
                actions: SmallVec::new(),
            },
        );
        Self {
            state: Arc::new(GraphState {
                nodes: vec![welcome],
                edges: Vec::new(),
                selection: None,
            }),
            listeners: Vec::new(),
        }
    }

    /// The current snapshot. Cheap — bumps a refcount.
    pub fn snapshot(&self) -> Arc<GraphState> {
        Arc::clone(&self.state)
    }

    /// Register a listener invoked with the new snapshot after every
    /// applied command.
    pub fn subscribe(&mut self, listener: impl Fn(&Arc<GraphState>) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Apply one command, swap in the new snapshot, and notify listeners.
    pub fn apply(&mut self, command: StoreCommand) {
        log::trace!("apply {command:?}");
        let mut next = GraphState::clone(&self.state);
        match command {
            StoreCommand::AddNode => {
                let mut rng = rand::thread_rng();
                let position = Position::new(
                    rng.gen_range(0.0..SPAWN_EXTENT),
                    rng.gen_range(0.0..SPAWN_EXTENT),
                );
                let id = fresh_node_id(&next.nodes);
                next.nodes.push(Node::new(
                    id,
                    position,
                    NodeData {
                        title: NEW_NODE_TITLE.to_string(),
                        description: NEW_NODE_DESCRIPTION.to_string(),
                        actions: SmallVec::new(),
                    },
                ));
            }
            StoreCommand::UpdateNode { id, patch } => {
                if let Some(node) = next.nodes.iter_mut().find(|n| n.id == id) {
                    node.data.apply(&patch);
                }
            }
            StoreCommand::UpdateEdge { id, patch } => {
                if let Some(edge) = next.edges.iter_mut().find(|e| e.id == id) {
                    edge.apply(&patch);
                }
            }
            StoreCommand::SetSelection { selection } => {
                next.selection = selection;
            }
            StoreCommand::SetNodes { nodes } => {
                next.nodes = nodes;
            }
            StoreCommand::SetEdges { edges } => {
                next.edges = edges;
            }
            StoreCommand::AddAction { node, action } => {
                if let Some(n) = next.nodes.iter_mut().find(|n| n.id == node) {
                    n.data.actions.push(action);
                }
            }
            StoreCommand::RemoveAction { node, index } => {
                if let Some(n) = next.nodes.iter_mut().find(|n| n.id == node)
                    && index < n.data.actions.len()
                {
                    n.data.actions.remove(index);
                }
            }
        }
        self.state = Arc::new(next);
        for listener in &self.listeners {
            listener(&self.state);
        }
    }

    // ─── Convenience dispatchers ─────────────────────────────────────────

    pub fn add_node(&mut self) {
        self.apply(StoreCommand::AddNode);
    }

    pub fn update_node(&mut self, id: ElementId, patch: NodePatch) {
        self.apply(StoreCommand::UpdateNode { id, patch });
    }

    pub fn update_edge(&mut self, id: ElementId, patch: EdgePatch) {
        self.apply(StoreCommand::UpdateEdge { id, patch });
    }

    pub fn set_selected_element(&mut self, selection: Option<Selection>) {
        self.apply(StoreCommand::SetSelection { selection });
    }

    pub fn set_nodes(&mut self, nodes: Vec<Node>) {
        self.apply(StoreCommand::SetNodes { nodes });
    }

    pub fn set_edges(&mut self, edges: Vec<Edge>) {
        self.apply(StoreCommand::SetEdges { edges });
    }

    pub fn add_action(&mut self, node: ElementId, action: impl Into<String>) {
        self.apply(StoreCommand::AddAction {
            node,
            action: action.into(),
        });
    }

    pub fn remove_action(&mut self, node: ElementId, index: usize) {
        self.apply(StoreCommand::RemoveAction { node, index });
    }
}

impl Default for WireframeStore {
    fn default() -> Self {
        Self::new()
    }
}

/// A node id unique across `nodes`. The session sequence already never
/// repeats; the re-roll skips ids taken by an imported document.
fn fresh_node_id(nodes: &[Node]) -> ElementId {
    loop {
        let id = ElementId::next_node();
        if !nodes.iter().any(|n| n.id == id) {
            return id;
        }
    }
}
