/// Options for building a [`VisibilityGraph`](super::VisibilityGraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VisibilityConfig {
    /// Keep only edges that are extreme at one of their ends.
    /// Default: false
    pub reduced: bool,

    /// Sweep each vertex over half a turn and rely on symmetry for the rest.
    /// Default: true
    pub half_scan: bool,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self {
            reduced: false,
            half_scan: true,
        }
    }
}

impl VisibilityConfig {
    #[must_use]
    pub fn with_reduced(mut self, reduced: bool) -> Self {
        self.reduced = reduced;
        self
    }

    #[must_use]
    pub fn with_half_scan(mut self, half_scan: bool) -> Self {
        self.half_scan = half_scan;
        self
    }
}
