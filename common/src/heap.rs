//! Binary min-heap with a key to slot table.
//!
//! Every key is present at most once. Pushing a key that is already queued
//! replaces its priority and moves the entry to its new place, which is what
//! best-first searches need when they find a cheaper route to a node that is
//! still waiting in the open set.

use std::hash::Hash;

use rustc_hash::FxHashMap;

#[derive(Debug, Clone)]
pub struct IndexedHeap<K, P> {
    entries: Vec<(K, P)>,
    slots: FxHashMap<K, usize>,
}

impl<K, P> Default for IndexedHeap<K, P> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            slots: FxHashMap::default(),
        }
    }
}

impl<K, P> IndexedHeap<K, P>
where
    K: Clone + Eq + Hash,
    P: Ord,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.slots.contains_key(key)
    }

    pub fn priority(&self, key: &K) -> Option<&P> {
        self.slots.get(key).map(|&slot| &self.entries[slot].1)
    }

    pub fn peek(&self) -> Option<(&K, &P)> {
        self.entries.first().map(|(k, p)| (k, p))
    }

    /// Inserts `key`, or overwrites its priority if it is already queued.
    pub fn upsert(&mut self, key: K, priority: P) {
        if let Some(&slot) = self.slots.get(&key) {
            self.entries[slot].1 = priority;
            let slot = self.sift_up(slot);
            self.sift_down(slot);
            return;
        }

        let slot = self.entries.len();
        self.slots.insert(key.clone(), slot);
        self.entries.push((key, priority));
        self.sift_up(slot);
    }

    /// Removes the entry with the smallest priority.
    pub fn pop(&mut self) -> Option<(K, P)> {
        if self.entries.is_empty() {
            return None;
        }

        let last = self.entries.len() - 1;
        self.swap(0, last);
        let (key, priority) = self.entries.pop()?;
        self.slots.remove(&key);
        if !self.entries.is_empty() {
            self.sift_down(0);
        }

        Some((key, priority))
    }

    fn less(&self, a: usize, b: usize) -> bool {
        self.entries[a].1 < self.entries[b].1
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }

        self.entries.swap(a, b);
        if let Some(slot) = self.slots.get_mut(&self.entries[a].0) {
            *slot = a;
        }
        if let Some(slot) = self.slots.get_mut(&self.entries[b].0) {
            *slot = b;
        }
    }

    fn sift_up(&mut self, mut slot: usize) -> usize {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !self.less(slot, parent) {
                break;
            }

            self.swap(slot, parent);
            slot = parent;
        }

        slot
    }

    fn sift_down(&mut self, mut slot: usize) -> usize {
        let len = self.entries.len();
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;
            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == slot {
                break;
            }

            self.swap(slot, smallest);
            slot = smallest;
        }

        slot
    }
}
