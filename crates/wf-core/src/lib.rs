pub mod document;
pub mod id;
pub mod model;
pub mod store;

pub use document::{
    Document, DocumentMetadata, FORMAT_VERSION, export_document, export_file_name, import_document,
};
pub use id::ElementId;
pub use model::*;
pub use store::{GraphState, StoreCommand, WireframeStore};
