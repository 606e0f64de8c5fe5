use tracing::debug;

use super::dijkstra::Dijkstra;
use super::Path;
use crate::error::Result;
use crate::graph::{Edge, Graph, Vertex};
use crate::operations::sweep::VisibleVertices;
use crate::visibility::VisibilityGraph;

/// Shortest obstacle-avoiding path between two arbitrary points.
///
/// Endpoints that are not nodes of the visibility graph are linked to it
/// through temporary edges; the graph itself is left unchanged.
pub struct ShortestPath {
    origin: Vertex,
    destination: Vertex,
}

impl ShortestPath {
    /// Creates a new `ShortestPath` query.
    #[must_use]
    pub fn new(origin: Vertex, destination: Vertex) -> Self {
        Self {
            origin,
            destination,
        }
    }

    /// Runs the query against `visibility`.
    ///
    /// # Errors
    ///
    /// Returns `PathError::Unreachable` if no obstacle-free path exists.
    pub fn execute(&self, visibility: &VisibilityGraph) -> Result<Path> {
        let base = visibility.base();
        let origin = base.resolve(&self.origin).unwrap_or(self.origin);
        let destination = base.resolve(&self.destination).unwrap_or(self.destination);

        let has_origin = visibility.contains(&origin);
        let has_destination = visibility.contains(&destination);
        if has_origin && has_destination {
            return Dijkstra::new(origin, destination).execute(visibility.graph());
        }

        let reduced = visibility.config().reduced;
        let mut temporary = Graph::new();
        if !has_origin {
            let mut sweep = VisibleVertices::new(origin).reduced(reduced);
            if !has_destination {
                sweep = sweep.with_destination(destination);
            }
            for v in sweep.execute(base) {
                temporary.add_edge(Edge::new(origin, v));
            }
        }
        if !has_destination {
            let mut sweep = VisibleVertices::new(destination).reduced(reduced);
            if !has_origin {
                sweep = sweep.with_origin(origin);
            }
            for v in sweep.execute(base) {
                temporary.add_edge(Edge::new(destination, v));
            }
        }
        debug!(temporary = temporary.edge_count(), "linked free endpoints");

        Dijkstra::new(origin, destination)
            .with_extra_edges(&temporary)
            .execute(visibility.graph())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{PathError, SightlineError};
    use crate::graph::{Polygon, PolygonId};
    use crate::math::{distance, Point3};
    use crate::visibility::VisibilityConfig;
    use approx::assert_abs_diff_eq;

    fn p(x: f64, y: f64) -> Point3 {
        Point3::new(x, y, 0.0)
    }

    fn v(x: f64, y: f64) -> Vertex {
        Vertex::new(p(x, y))
    }

    fn square(id: usize, min: f64, max: f64) -> Polygon {
        Polygon::new(
            PolygonId(id),
            [p(min, min), p(min, max), p(max, max), p(max, min)],
            false,
        )
        .unwrap()
    }

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter("sightline=debug")
            .try_init();
    }

    #[test]
    fn no_obstacles_gives_direct_edge() {
        init_tracing();
        let vg = VisibilityGraph::from_polygons(Vec::new(), VisibilityConfig::default());
        let path = ShortestPath::new(v(1.0, 2.0), v(4.0, 6.0)).execute(&vg).unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(path.edges()[0], Edge::new(v(1.0, 2.0), v(4.0, 6.0)));
        assert_abs_diff_eq!(path.length(), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn detour_around_one_corner() {
        init_tracing();
        let vg =
            VisibilityGraph::from_polygons([square(0, 0.0, 10.0)], VisibilityConfig::default());
        let origin = v(-5.0, 5.0);
        let destination = v(6.0, 15.0);
        let path = ShortestPath::new(origin, destination).execute(&vg).unwrap();

        let corner = p(0.0, 10.0);
        assert_eq!(path.vertices(), vec![origin, Vertex::new(corner), destination]);
        let expected = distance(origin.point(), &corner) + distance(&corner, destination.point());
        assert_abs_diff_eq!(path.length(), expected, epsilon = 1e-9);

        let opposite = p(0.0, 0.0);
        let via_opposite = distance(origin.point(), &opposite)
            + distance(&opposite, &p(10.0, 0.0))
            + distance(&p(10.0, 0.0), &p(10.0, 10.0))
            + distance(&p(10.0, 10.0), destination.point());
        assert!(path.length() < via_opposite);
    }

    #[test]
    fn detour_around_two_corners() {
        let vg =
            VisibilityGraph::from_polygons([square(0, 0.0, 10.0)], VisibilityConfig::default());
        let path = ShortestPath::new(v(-5.0, 5.0), v(15.0, 5.0)).execute(&vg).unwrap();
        assert_eq!(path.len(), 3);
        assert_abs_diff_eq!(path.length(), 10.0 + 2.0 * 50.0_f64.sqrt(), epsilon = 1e-9);
    }

    #[test]
    fn obstacle_never_shortens_the_path() {
        let origin = v(-10.0, 0.0);
        let destination = v(10.0, 0.0);
        let open = VisibilityGraph::from_polygons(Vec::new(), VisibilityConfig::default());
        let blocked =
            VisibilityGraph::from_polygons([square(0, -5.0, 5.0)], VisibilityConfig::default());

        let free = ShortestPath::new(origin, destination).execute(&open).unwrap();
        let around = ShortestPath::new(origin, destination).execute(&blocked).unwrap();
        assert_abs_diff_eq!(free.length(), 20.0, epsilon = 1e-9);
        assert_abs_diff_eq!(around.length(), 10.0 + 2.0 * 50.0_f64.sqrt(), epsilon = 1e-9);
        assert!(around.length() >= free.length());
    }

    #[test]
    fn path_between_obstacle_corners() {
        let vg =
            VisibilityGraph::from_polygons([square(0, 0.0, 10.0)], VisibilityConfig::default());
        let path = ShortestPath::new(v(0.0, 0.0), v(10.0, 10.0)).execute(&vg).unwrap();
        assert_eq!(path.len(), 2);
        assert_abs_diff_eq!(path.length(), 20.0, epsilon = 1e-9);
    }

    #[test]
    fn destination_inside_obstacle_is_unreachable() {
        let vg =
            VisibilityGraph::from_polygons([square(0, 0.0, 10.0)], VisibilityConfig::default());
        let err = ShortestPath::new(v(-5.0, 5.0), v(5.0, 5.0))
            .execute(&vg)
            .unwrap_err();
        assert!(matches!(err, SightlineError::Path(PathError::Unreachable)));
    }
}
