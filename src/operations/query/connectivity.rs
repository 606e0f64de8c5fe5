use crate::visibility::VisibilityGraph;

/// Scores every visibility edge by how well connected its endpoints are.
///
/// The score of an edge is the sum of its endpoints' degrees, rescaled from
/// the observed range to `[0, 1]`.
#[derive(Debug, Default)]
pub struct ConnectivityFactor;

impl ConnectivityFactor {
    /// Creates a new `ConnectivityFactor` query.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// One factor per edge, in the graph's edge order.
    ///
    /// All factors are `0.0` when every edge has the same degree sum.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self, visibility: &VisibilityGraph) -> Vec<f64> {
        let graph = visibility.graph();
        let sums: Vec<usize> = graph
            .edges()
            .map(|e| graph.degree(e.start()) + graph.degree(e.end()))
            .collect();
        let (Some(&min), Some(&max)) = (sums.iter().min(), sums.iter().max()) else {
            return Vec::new();
        };
        if min == max {
            return vec![0.0; sums.len()];
        }
        let span = (max - min) as f64;
        sums.iter().map(|&s| (s - min) as f64 / span).collect()
    }
}
