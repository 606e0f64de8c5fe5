use std::f64::consts::PI;

use tracing::trace;

use super::open_edges::{EdgeKey, OpenEdges};
use crate::graph::{Graph, Vertex};
use crate::math::{
    angle_ccw, midpoint, on_segment, orientation, planar_distance, segment_intersection,
    segments_intersect, sort_radially, translate, Orientation, Point3, SegmentIntersection,
};

/// Radial sweep listing the vertices visible from a centre point.
///
/// Candidates are the obstacle graph's vertices plus the optional origin,
/// destination and extra vertices. The result never contains the centre.
#[derive(Debug, Clone)]
pub struct VisibleVertices {
    centre: Vertex,
    origin: Option<Vertex>,
    destination: Option<Vertex>,
    extra: Vec<Vertex>,
    half_scan: bool,
    reduced: bool,
    max_visibility: bool,
}

impl VisibleVertices {
    /// Creates a full-scan, unpruned sweep around `centre`.
    #[must_use]
    pub fn new(centre: Vertex) -> Self {
        Self {
            centre,
            origin: None,
            destination: None,
            extra: Vec::new(),
            half_scan: false,
            reduced: false,
            max_visibility: false,
        }
    }

    #[must_use]
    pub fn with_origin(mut self, origin: Vertex) -> Self {
        self.origin = Some(origin);
        self
    }

    #[must_use]
    pub fn with_destination(mut self, destination: Vertex) -> Self {
        self.destination = Some(destination);
        self
    }

    /// Adds free vertices to the candidate set.
    #[must_use]
    pub fn with_extra_vertices(mut self, vertices: impl IntoIterator<Item = Vertex>) -> Self {
        self.extra.extend(vertices);
        self
    }

    /// Stops the scan past an angle of `π`.
    ///
    /// Only valid when every vertex of the graph is swept in turn.
    #[must_use]
    pub fn half_scan(mut self, enabled: bool) -> Self {
        self.half_scan = enabled;
        self
    }

    /// Keeps only edges that are extreme at one of their ends.
    #[must_use]
    pub fn reduced(mut self, enabled: bool) -> Self {
        self.reduced = enabled;
        self
    }

    /// Adds projection vertices where rays grazing a corner hit the next edge.
    #[must_use]
    pub fn max_visibility(mut self, enabled: bool) -> Self {
        self.max_visibility = enabled;
        self
    }

    /// Runs the sweep against `graph`, returning visible vertices in scan order.
    #[must_use]
    pub fn execute(&self, graph: &Graph) -> Vec<Vertex> {
        let centre = graph.resolve(&self.centre).unwrap_or(self.centre);
        let c = *centre.point();

        let mut candidates: Vec<Vertex> = graph.vertices().copied().collect();
        for v in self
            .origin
            .iter()
            .chain(self.destination.iter())
            .chain(self.extra.iter())
        {
            if !graph.contains(v) {
                candidates.push(*v);
            }
        }
        if candidates.is_empty() {
            return Vec::new();
        }

        let max_distance = 1.5
            * candidates
                .iter()
                .map(|v| planar_distance(&c, v.point()))
                .fold(0.0, f64::max);
        sort_radially(&c, &mut candidates, |v| *v.point());

        let mut open = seed_open_edges(graph, &c, max_distance);
        trace!(centre = %centre, seeded = open.len(), "seeded open edges");

        let centre_adjacent = graph.adjacent_vertices(&centre);
        let mut visible = Vec::new();
        let mut prev: Option<Vertex> = None;
        let mut prev_visible = false;

        for v in candidates {
            if v == centre || prev == Some(v) {
                continue;
            }
            let p = *v.point();
            if self.half_scan && angle_ccw(&c, &p) > PI {
                break;
            }

            let incident = graph.incident_edges(&v);
            if !open.is_empty() {
                for edge in &incident {
                    if orientation(&c, &p, edge.other(&v).point()) == Orientation::Clockwise {
                        open.remove(&EdgeKey::new(c, p, *edge));
                    }
                }
            }

            let collinear_with_prev = prev.is_some_and(|q| {
                orientation(&c, q.point(), &p) == Orientation::Collinear
                    && on_segment(q.point(), &c, &p)
            });
            let polygon = v.polygon_id().and_then(|id| graph.polygon(id));

            let mut is_visible = match (polygon, prev) {
                (Some(hole), _)
                    if !hole.is_boundary() && !hole.has_vertex(&centre) && hole.contains(&c) =>
                {
                    let mid = midpoint(&c, &p);
                    incident.iter().any(|e| e.contains_point(&mid))
                }
                (_, Some(q)) if collinear_with_prev => {
                    prev_visible
                        && !graph.is_boundary_vertex(&v)
                        && !open.iter().any(|k| {
                            !k.edge().has_endpoint(&q)
                                && segments_intersect(
                                    q.point(),
                                    &p,
                                    k.edge().start().point(),
                                    k.edge().end().point(),
                                )
                        })
                        && !edge_in_polygon(graph, &q, &v)
                }
                _ => match open.nearest() {
                    None => match polygon {
                        Some(outer) if outer.is_boundary() && outer.contains(&c) => {
                            outer.contains(&midpoint(&c, &p))
                        }
                        _ => true,
                    },
                    Some(key) => {
                        let nearest = key.edge();
                        nearest.contains_point(&p)
                            || !segments_intersect(
                                &c,
                                &p,
                                nearest.start().point(),
                                nearest.end().point(),
                            )
                    }
                },
            };

            if is_visible && centre.polygon_id().is_some() && !centre_adjacent.contains(&v) {
                is_visible = if graph.is_boundary_vertex(&centre) && graph.is_boundary_vertex(&v) {
                    edge_in_polygon(graph, &centre, &v)
                } else {
                    !edge_in_polygon(graph, &centre, &v)
                };
            }

            prev = Some(v);
            prev_visible = is_visible;

            if is_visible {
                let keep = !self.reduced
                    || centre.polygon_id() == v.polygon_id()
                    || is_extreme(graph, &v, &centre, &centre_adjacent)
                    || is_extreme(graph, &centre, &v, &graph.adjacent_vertices(&v));
                if keep {
                    visible.push(v);
                }
            }

            for edge in &incident {
                if !edge.contains_point(&c)
                    && orientation(&c, &p, edge.other(&v).point()) == Orientation::CounterClockwise
                {
                    open.insert(EdgeKey::new(c, p, *edge));
                }
            }

            if is_visible && self.max_visibility && v.polygon_id().is_some() {
                if let Some((projection, after)) = project(graph, &open, &c, &v, max_distance) {
                    if after {
                        visible.push(projection);
                    } else {
                        let at = visible.len().saturating_sub(1);
                        visible.insert(at, projection);
                    }
                }
            }
        }

        trace!(centre = %centre, visible = visible.len(), "sweep finished");
        visible
    }
}

/// Open edges crossed by the ray from `centre` along `+x`.
fn seed_open_edges(graph: &Graph, centre: &Point3, max_distance: f64) -> OpenEdges {
    let far = Point3::new(centre.x + max_distance.max(1.0), centre.y, centre.z);
    let mut open = OpenEdges::new();
    for edge in graph.edges() {
        if edge.contains_point(centre) {
            continue;
        }
        let (s, e) = (edge.start().point(), edge.end().point());
        if !segments_intersect(centre, &far, s, e) {
            continue;
        }
        if on_segment(s, centre, &far) || on_segment(e, centre, &far) {
            continue;
        }
        open.insert(EdgeKey::new(*centre, far, edge));
    }
    open
}

/// Whether the segment `a → b` runs through the polygon both ends belong to.
///
/// Boundary polygons count their own ring as inside; holes only their
/// strict interior.
fn edge_in_polygon(graph: &Graph, a: &Vertex, b: &Vertex) -> bool {
    let (Some(pa), Some(pb)) = (a.polygon_id(), b.polygon_id()) else {
        return false;
    };
    if pa != pb {
        return false;
    }
    let Some(polygon) = graph.polygon(pa) else {
        return false;
    };
    let mid = midpoint(a.point(), b.point());
    if polygon.is_boundary() {
        polygon.contains(&mid)
    } else {
        polygon.contains_strictly(&mid)
    }
}

/// Whether every obstacle edge at `at` lies on one side of `from → at`.
///
/// Free vertices and boundary vertices are always extreme.
fn is_extreme(graph: &Graph, from: &Vertex, at: &Vertex, adjacent: &[Vertex]) -> bool {
    if at.polygon_id().is_none() || graph.is_boundary_vertex(at) {
        return true;
    }
    let mut sides = adjacent
        .iter()
        .map(|w| orientation(from.point(), at.point(), w.point()));
    match sides.next() {
        Some(first) => sides.all(|o| o == first),
        None => true,
    }
}

/// Extends `centre → v` past `v` and returns the nearest open-edge crossing.
///
/// Only applies when both obstacle edges at `v` lie on one side of the ray or
/// one of them is collinear with it. The flag tells whether the projection
/// comes after `v` in scan order.
fn project(
    graph: &Graph,
    open: &OpenEdges,
    centre: &Point3,
    v: &Vertex,
    max_distance: f64,
) -> Option<(Vertex, bool)> {
    let neighbours = graph.adjacent_vertices(v);
    let [first, second, ..] = neighbours.as_slice() else {
        return None;
    };
    let p = v.point();
    let o1 = orientation(centre, p, first.point());
    let o2 = orientation(centre, p, second.point());
    if o1 != o2 && o1 != Orientation::Collinear && o2 != Orientation::Collinear {
        return None;
    }

    let ray_end = translate(p, &(p - centre), max_distance).ok()?;
    let hit = open
        .iter()
        .filter_map(|k| {
            let (s, e) = (k.edge().start().point(), k.edge().end().point());
            match segment_intersection(centre, &ray_end, s, e) {
                SegmentIntersection::Point(hit) if Vertex::new(hit) != *v => Some(hit),
                _ => None,
            }
        })
        .filter(|hit| planar_distance(centre, hit) > planar_distance(centre, p))
        .min_by(|a, b| planar_distance(p, a).total_cmp(&planar_distance(p, b)))?;

    let hole = v
        .polygon_id()
        .and_then(|id| graph.polygon(id))
        .filter(|polygon| !polygon.is_boundary());
    if hole.is_some_and(|polygon| polygon.contains_strictly(&midpoint(p, &hit))) {
        return None;
    }

    let after = o1 == Orientation::Clockwise || o2 == Orientation::Clockwise;
    Some((Vertex::new(hit), after))
}
