pub mod canvas;
pub mod inspector;

pub use canvas::{
    Connection, EdgeChange, NodeChange, apply_edge_changes, apply_node_changes, arrange_grid,
    clear_selection, connect, select_edge, select_node,
};
pub use inspector::{ExportFile, InspectorPanel};
