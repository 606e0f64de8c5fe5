use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

/// Binary min-heap with a key index, supporting decrease-key.
///
/// Each key is stored at most once. Lookups are `O(1)`; push, pop and
/// decrease are `O(log n)`.
#[derive(Debug, Clone)]
pub struct MinPriorityQueue<K, P> {
    heap: Vec<(K, P)>,
    positions: HashMap<K, usize>,
}

impl<K, P> Default for MinPriorityQueue<K, P> {
    fn default() -> Self {
        Self {
            heap: Vec::new(),
            positions: HashMap::new(),
        }
    }
}

impl<K, P> MinPriorityQueue<K, P>
where
    K: Eq + Hash + Clone,
    P: PartialOrd + Copy,
{
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `key` with `priority`. Returns `false` if the key is already queued.
    pub fn push(&mut self, key: K, priority: P) -> bool {
        if self.positions.contains_key(&key) {
            return false;
        }
        let index = self.heap.len();
        self.positions.insert(key.clone(), index);
        self.heap.push((key, priority));
        self.sift_up(index);
        true
    }

    /// Removes and returns the entry with the smallest priority.
    pub fn pop(&mut self) -> Option<(K, P)> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let (key, priority) = self.heap.pop()?;
        self.positions.remove(&key);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((key, priority))
    }

    /// Returns the entry with the smallest priority without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<(&K, P)> {
        self.heap.first().map(|(k, p)| (k, *p))
    }

    #[must_use]
    pub fn priority(&self, key: &K) -> Option<P> {
        self.positions.get(key).map(|&i| self.heap[i].1)
    }

    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.positions.contains_key(key)
    }

    /// Lowers the priority of a queued key.
    ///
    /// Returns `false` if the key is absent or `priority` is not lower.
    pub fn decrease_priority(&mut self, key: &K, priority: P) -> bool {
        let Some(&index) = self.positions.get(key) else {
            return false;
        };
        if priority.partial_cmp(&self.heap[index].1) != Some(Ordering::Less) {
            return false;
        }
        self.heap[index].1 = priority;
        self.sift_up(index);
        true
    }

    /// Pushes a new key or lowers the priority of a queued one.
    ///
    /// Returns whether the queue changed.
    pub fn push_or_decrease(&mut self, key: K, priority: P) -> bool {
        if self.contains(&key) {
            self.decrease_priority(&key, priority)
        } else {
            self.push(key, priority)
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.heap[index].1 < self.heap[parent].1 {
                self.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;
            if left < len && self.heap[left].1 < self.heap[smallest].1 {
                smallest = left;
            }
            if right < len && self.heap[right].1 < self.heap[smallest].1 {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.swap(index, smallest);
            index = smallest;
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.heap.swap(a, b);
        if let Some(pos) = self.positions.get_mut(&self.heap[a].0) {
            *pos = a;
        }
        if let Some(pos) = self.positions.get_mut(&self.heap[b].0) {
            *pos = b;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_priority_order() {
        let mut queue = MinPriorityQueue::new();
        for (key, priority) in [("c", 3.0), ("a", 1.0), ("e", 5.0), ("b", 2.0), ("d", 4.0)] {
            assert!(queue.push(key, priority));
        }
        assert_eq!(queue.len(), 5);
        assert_eq!(queue.peek(), Some((&"a", 1.0)));
        let order: Vec<&str> = std::iter::from_fn(|| queue.pop().map(|(k, _)| k)).collect();
        assert_eq!(order, vec!["a", "b", "c", "d", "e"]);
        assert!(queue.is_empty());
        assert!(queue.pop().is_none());
    }

    #[test]
    fn duplicate_push_is_rejected() {
        let mut queue = MinPriorityQueue::new();
        assert!(queue.push(1, 10.0));
        assert!(!queue.push(1, 5.0));
        assert_eq!(queue.priority(&1), Some(10.0));
    }

    #[test]
    fn decrease_priority_reorders() {
        let mut queue = MinPriorityQueue::new();
        queue.push("far", 10.0);
        queue.push("mid", 5.0);
        queue.push("near", 1.0);
        assert!(queue.decrease_priority(&"far", 0.5));
        assert_eq!(queue.pop(), Some(("far", 0.5)));
        assert_eq!(queue.pop(), Some(("near", 1.0)));
    }

    #[test]
    fn decrease_rejects_higher_or_missing() {
        let mut queue = MinPriorityQueue::new();
        queue.push("a", 2.0);
        assert!(!queue.decrease_priority(&"a", 3.0));
        assert!(!queue.decrease_priority(&"a", 2.0));
        assert!(!queue.decrease_priority(&"z", 1.0));
        assert_eq!(queue.priority(&"a"), Some(2.0));
    }

    #[test]
    fn push_or_decrease() {
        let mut queue = MinPriorityQueue::new();
        assert!(queue.push_or_decrease("a", 4.0));
        assert!(queue.push_or_decrease("a", 3.0));
        assert!(!queue.push_or_decrease("a", 7.0));
        assert!(queue.contains(&"a"));
        assert!(!queue.contains(&"b"));
        assert_eq!(queue.priority(&"a"), Some(3.0));
    }

    #[test]
    fn positions_survive_many_operations() {
        let mut queue = MinPriorityQueue::new();
        for i in 0..50_u32 {
            queue.push(i, f64::from(100 - i));
        }
        for i in (0..50_u32).step_by(3) {
            queue.decrease_priority(&i, -f64::from(i));
        }
        let mut last = f64::NEG_INFINITY;
        while let Some((key, priority)) = queue.pop() {
            assert!(priority >= last);
            assert!(!queue.contains(&key));
            last = priority;
        }
    }
}
