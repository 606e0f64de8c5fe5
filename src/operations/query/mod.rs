mod connectivity;
mod vertex_visibility;

pub use connectivity::ConnectivityFactor;
pub use vertex_visibility::VertexVisibility;
