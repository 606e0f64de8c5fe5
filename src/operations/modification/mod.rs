mod add_edges;
mod add_vertices;
mod merge;

pub use add_edges::AddEdges;
pub use add_vertices::AddVertices;
pub use merge::Merge;
