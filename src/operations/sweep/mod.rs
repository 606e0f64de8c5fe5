mod open_edges;
mod visible_vertices;

pub use open_edges::{EdgeKey, OpenEdges};
pub use visible_vertices::VisibleVertices;
