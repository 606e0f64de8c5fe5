use crate::graph::{Edge, Vertex};
use crate::math::{angle_at, line_intersection_distance, segments_intersect, Point3, TOLERANCE};

/// An obstacle edge crossing the sweep ray `centre → target`.
#[derive(Debug, Clone, Copy)]
pub struct EdgeKey {
    centre: Point3,
    target: Point3,
    edge: Edge,
}

impl EdgeKey {
    /// Creates a key for `edge` seen along the ray `centre → target`.
    #[must_use]
    pub fn new(centre: Point3, target: Point3, edge: Edge) -> Self {
        Self {
            centre,
            target,
            edge,
        }
    }

    #[must_use]
    pub fn edge(&self) -> &Edge {
        &self.edge
    }

    /// Whether `self` sorts before `other` along this key's ray.
    ///
    /// Keys whose ray misses `other` sort first, so this is not a total order.
    /// It is only meant for the bisect in [`OpenEdges`].
    #[must_use]
    pub fn is_before(&self, other: &Self) -> bool {
        if self.edge == other.edge {
            return false;
        }
        let (a, b) = (other.edge.start().point(), other.edge.end().point());
        if !segments_intersect(&self.centre, &self.target, a, b) {
            return true;
        }

        let own = line_intersection_distance(
            &self.centre,
            &self.target,
            self.edge.start().point(),
            self.edge.end().point(),
        );
        let theirs = line_intersection_distance(&self.centre, &self.target, a, b);
        if own < theirs - TOLERANCE {
            return true;
        }
        if own > theirs + TOLERANCE {
            return false;
        }

        // Tie: both edges leave the same vertex; the one closer to the centre wins.
        let Some(shared) = shared_vertex(&self.edge, &other.edge) else {
            return false;
        };
        let own_angle = angle_at(
            shared.point(),
            &self.centre,
            self.edge.other(&shared).point(),
        );
        let their_angle = angle_at(
            shared.point(),
            &self.centre,
            other.edge.other(&shared).point(),
        );
        own_angle < their_angle
    }
}

fn shared_vertex(a: &Edge, b: &Edge) -> Option<Vertex> {
    if b.has_endpoint(a.start()) {
        Some(*a.start())
    } else if b.has_endpoint(a.end()) {
        Some(*a.end())
    } else {
        None
    }
}

/// Obstacle edges currently crossed by the sweep ray, nearest first.
#[derive(Debug, Clone, Default)]
pub struct OpenEdges {
    keys: Vec<EdgeKey>,
}

impl OpenEdges {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `key` after every key it does not sort before.
    pub fn insert(&mut self, key: EdgeKey) {
        let index = self.bisect(&key);
        self.keys.insert(index, key);
    }

    /// Removes the key holding the same edge as `key`.
    ///
    /// The slot just before the bisect position is checked first, wrapping to
    /// the last key; a linear scan covers the cases where the approximate
    /// ordering put the key elsewhere. Returns whether a key was removed.
    pub fn remove(&mut self, key: &EdgeKey) -> bool {
        if self.keys.is_empty() {
            return false;
        }
        let index = self.bisect(key);
        let slot = index.checked_sub(1).unwrap_or(self.keys.len() - 1);
        if self.keys[slot].edge == key.edge {
            self.keys.remove(slot);
            return true;
        }
        match self.keys.iter().position(|k| k.edge == key.edge) {
            Some(pos) => {
                self.keys.remove(pos);
                true
            }
            None => false,
        }
    }

    /// The open edge nearest to the centre.
    #[must_use]
    pub fn nearest(&self) -> Option<&EdgeKey> {
        self.keys.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EdgeKey> + '_ {
        self.keys.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    fn bisect(&self, key: &EdgeKey) -> usize {
        let (mut lo, mut hi) = (0, self.keys.len());
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if key.is_before(&self.keys[mid]) {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }
        lo
    }
}
