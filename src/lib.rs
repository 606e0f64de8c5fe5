//! Visibility graphs over polygonal obstacles and obstacle-avoiding
//! shortest paths between arbitrary points.

pub mod error;
pub mod graph;
pub mod math;
pub mod operations;
pub mod visibility;

pub use error::{Result, SightlineError};
pub use graph::{Edge, Graph, Polygon, PolygonId, Vertex};
pub use operations::modification::{AddEdges, AddVertices, Merge};
pub use operations::path::{Dijkstra, Path, ShortestPath};
pub use operations::query::{ConnectivityFactor, VertexVisibility};
pub use visibility::{VisibilityConfig, VisibilityGraph};
