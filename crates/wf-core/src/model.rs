//! Data model for wireframe documents.
//!
//! A document is two flat collections — screen nodes and transition edges —
//! plus a single optional selection. Edges reference nodes by id only: an
//! edge may outlive its endpoints (dangling edges are legal and left to the
//! canvas surface to render or drop). Presentation attributes on an edge
//! (`style`, `markerStart`, `markerEnd`) are never edited directly; they
//! are derived from [`EdgeData`] by [`derive_edge_presentation`].

use crate::id::ElementId;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

// ─── Geometry ────────────────────────────────────────────────────────────

/// 2D canvas coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

// ─── Nodes ───────────────────────────────────────────────────────────────

/// Renderer tag understood by the canvas surface. A single custom node
/// renderer exists today; the tag is kept on the wire for the surface's
/// renderer registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NodeKind {
    #[default]
    #[serde(rename = "wireframeNode")]
    Wireframe,
}

/// Editable content of a screen node.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NodeData {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Ordered action labels. Order is display order; duplicates allowed.
    #[serde(default)]
    pub actions: SmallVec<[String; 4]>,
}

/// A screen on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: ElementId,
    #[serde(rename = "type", default)]
    pub kind: NodeKind,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub data: NodeData,
}

impl Node {
    pub fn new(id: ElementId, position: Position, data: NodeData) -> Self {
        Self {
            id,
            kind: NodeKind::Wireframe,
            position,
            data,
        }
    }
}

// ─── Edges ───────────────────────────────────────────────────────────────

/// How the edge path is drawn between two nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    #[default]
    Default,
    Straight,
    Step,
    SmoothStep,
}

/// Arrow head placement on an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowKind {
    Arrow,
    Bidirectional,
    None,
}

/// Editable content of an edge. Keys absent on the wire stay absent on
/// re-export.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(rename = "arrowType", default, skip_serializing_if = "Option::is_none")]
    pub arrow: Option<ArrowKind>,
}

/// Marker shapes the surface can draw at an edge endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    Arrow,
}

/// An endpoint marker, e.g. `{ "type": "arrow" }` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    #[serde(rename = "type")]
    pub kind: MarkerKind,
}

impl Marker {
    pub const fn arrow() -> Self {
        Self {
            kind: MarkerKind::Arrow,
        }
    }
}

/// Stroke attributes forwarded to the surface.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
}

/// A transition between two screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: ElementId,
    pub source: ElementId,
    pub target: ElementId,
    #[serde(rename = "type", default)]
    pub kind: EdgeKind,
    #[serde(default)]
    pub data: EdgeData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<EdgeStyle>,
    #[serde(rename = "markerStart", default, skip_serializing_if = "Option::is_none")]
    pub marker_start: Option<Marker>,
    #[serde(rename = "markerEnd", default, skip_serializing_if = "Option::is_none")]
    pub marker_end: Option<Marker>,
}

impl Edge {
    /// A bare edge between two nodes, not yet annotated or styled.
    pub fn new(id: ElementId, source: ElementId, target: ElementId) -> Self {
        Self {
            id,
            source,
            target,
            kind: EdgeKind::default(),
            data: EdgeData::default(),
            style: None,
            marker_start: None,
            marker_end: None,
        }
    }

    /// Overlay a patch and re-derive the presentation fields, keeping them
    /// consistent with `data`.
    pub fn apply(&mut self, patch: &EdgePatch) {
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(description) = &patch.description {
            self.data.description = Some(description.clone());
        }
        if let Some(color) = &patch.color {
            self.data.color = Some(color.clone());
        }
        if let Some(arrow) = patch.arrow {
            self.data.arrow = Some(arrow);
        }
        self.refresh_presentation();
    }

    /// Recompute `style` / `markerStart` / `markerEnd` from `data`.
    pub fn refresh_presentation(&mut self) {
        let presentation = derive_edge_presentation(&self.data);
        self.style = presentation.style;
        self.marker_start = presentation.marker_start;
        self.marker_end = presentation.marker_end;
    }
}

// ─── Selection ───────────────────────────────────────────────────────────

/// Which collection a selection points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Node,
    Edge,
}

/// The single element currently targeted by the inspector.
/// Points into exactly one collection — never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub kind: ElementKind,
    pub id: ElementId,
}

impl Selection {
    pub const fn node(id: ElementId) -> Self {
        Self {
            kind: ElementKind::Node,
            id,
        }
    }

    pub const fn edge(id: ElementId) -> Self {
        Self {
            kind: ElementKind::Edge,
            id,
        }
    }
}

// ─── Patches ─────────────────────────────────────────────────────────────

/// Partial update for a node's data. `Some` fields overlay the current
/// value; `None` fields are preserved. The action list is replaced only
/// when the patch carries one.
#[derive(Debug, Clone, Default)]
pub struct NodePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub actions: Option<SmallVec<[String; 4]>>,
}

impl NodePatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn description(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..Default::default()
        }
    }

    pub fn actions(actions: impl IntoIterator<Item = String>) -> Self {
        Self {
            actions: Some(actions.into_iter().collect()),
            ..Default::default()
        }
    }
}

impl NodeData {
    /// Overlay only the `Some` fields of `patch`.
    pub fn apply(&mut self, patch: &NodePatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(actions) = &patch.actions {
            self.actions = actions.clone();
        }
    }
}

/// Partial update for an edge. `kind` swaps the rendering kind; the rest
/// merge into [`EdgeData`], after which presentation is re-derived.
#[derive(Debug, Clone, Default)]
pub struct EdgePatch {
    pub kind: Option<EdgeKind>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub arrow: Option<ArrowKind>,
}

impl EdgePatch {
    pub fn kind(kind: EdgeKind) -> Self {
        Self {
            kind: Some(kind),
            ..Default::default()
        }
    }

    pub fn description(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..Default::default()
        }
    }

    pub fn color(color: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
            ..Default::default()
        }
    }

    pub fn arrow(arrow: ArrowKind) -> Self {
        Self {
            arrow: Some(arrow),
            ..Default::default()
        }
    }
}

// ─── Derived presentation ────────────────────────────────────────────────

/// Derived presentation attributes for an edge.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EdgePresentation {
    pub style: Option<EdgeStyle>,
    pub marker_start: Option<Marker>,
    pub marker_end: Option<Marker>,
}

/// Compute stroke and endpoint markers from edge data.
///
/// | arrow         | marker_end | marker_start |
/// |---------------|------------|--------------|
/// | Arrow         | arrow      | cleared      |
/// | Bidirectional | arrow      | arrow        |
/// | None          | cleared    | cleared      |
///
/// The stroke follows `data.color`. With no color and no arrow the edge
/// carries no presentation overrides and the surface falls back to its
/// defaults.
pub fn derive_edge_presentation(data: &EdgeData) -> EdgePresentation {
    let style = data.color.as_ref().map(|color| EdgeStyle {
        stroke: Some(color.clone()),
    });
    let (marker_start, marker_end) = match data.arrow {
        Some(ArrowKind::Arrow) => (None, Some(Marker::arrow())),
        Some(ArrowKind::Bidirectional) => (Some(Marker::arrow()), Some(Marker::arrow())),
        Some(ArrowKind::None) | None => (None, None),
    };
    EdgePresentation {
        style,
        marker_start,
        marker_end,
    }
}
