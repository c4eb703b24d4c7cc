//! A* search over graphs that are described by a neighbor function instead of
//! an explicit edge list.
//!
//! The open set lives in an [`IndexedHeap`], so a node whose cost drops while
//! it is still queued is moved in place instead of being pushed twice. Seeding
//! the heap with several zero-cost start nodes gives a multi-source search for
//! free: the returned path begins at whichever start reaches the goal cheapest.

use std::{cmp::Ordering, hash::Hash, ops::Add};

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::heap::IndexedHeap;

/// Costs must be totally ordered, addable and have a zero (`Default`).
pub trait Cost: Ord + Copy + Add<Output = Self> + Default {}

impl<T> Cost for T where T: Ord + Copy + Add<Output = Self> + Default {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge<K, C> {
    pub to: K,
    pub cost: C,
}

impl<K, C> Edge<K, C> {
    pub fn new(to: K, cost: C) -> Self {
        Self { to, cost }
    }
}

/// Heap priority of an open node.
///
/// Ordered by `g + h`, ties broken by the smaller `g`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score<C> {
    pub g: C,
    pub h: C,
}

impl<C: Cost> Score<C> {
    pub fn new(g: C, h: C) -> Self {
        Self { g, h }
    }

    pub fn f(&self) -> C {
        self.g + self.h
    }
}

impl<C: Cost> Ord for Score<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f()
            .cmp(&other.f())
            .then_with(|| self.g.cmp(&other.g))
    }
}

impl<C: Cost> PartialOrd for Score<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug)]
struct Visit<K, C> {
    g: C,
    parent: Option<K>,
}

/// Search configuration. Use [`search`] when no budget is needed.
#[derive(Debug, Clone, Default)]
pub struct Search {
    max_expansions: Option<usize>,
}

impl Search {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gives up (returning `None`) after popping this many nodes.
    pub fn max_expansions(mut self, count: usize) -> Self {
        self.max_expansions = Some(count);
        self
    }

    /// Finds the cheapest path from any of `starts` to `goal`.
    ///
    /// Returns the path (start first, goal last) and its cost, or `None` when
    /// the goal can't be reached. The heuristic must not overestimate the
    /// remaining cost for the result to be optimal.
    pub fn run<K, C, N, I, H>(
        &self,
        starts: &[K],
        goal: &K,
        mut neighbors: N,
        mut heuristic: H,
    ) -> Option<(Vec<K>, C)>
    where
        K: Clone + Eq + Hash,
        C: Cost,
        N: FnMut(&K) -> I,
        I: IntoIterator<Item = Edge<K, C>>,
        H: FnMut(&K, &K) -> C,
    {
        let mut open = IndexedHeap::new();
        let mut visits: FxHashMap<K, Visit<K, C>> = FxHashMap::default();
        for start in starts {
            open.upsert(start.clone(), Score::new(C::default(), heuristic(start, goal)));
            visits.insert(
                start.clone(),
                Visit {
                    g: C::default(),
                    parent: None,
                },
            );
        }

        let mut expanded_n = 0;
        while let Some((cur_key, cur_score)) = open.pop() {
            if self.max_expansions.is_some_and(|max| expanded_n >= max) {
                debug!(expanded_n, "search budget exhausted");
                return None;
            }
            expanded_n += 1;

            if cur_key == *goal {
                debug!(expanded_n, "reached goal");
                return Some((trace_back(&visits, cur_key), cur_score.g));
            }

            for edge in neighbors(&cur_key) {
                let next_g = cur_score.g + edge.cost;
                if visits
                    .get(&edge.to)
                    .is_some_and(|visit| next_g >= visit.g)
                {
                    continue;
                }

                trace!("open node with better cost");
                let h = heuristic(&edge.to, goal);
                visits.insert(
                    edge.to.clone(),
                    Visit {
                        g: next_g,
                        parent: Some(cur_key.clone()),
                    },
                );
                open.upsert(edge.to, Score::new(next_g, h));
            }
        }

        debug!(expanded_n, "open set exhausted without reaching goal");
        None
    }
}

pub fn search<K, C, N, I, H>(
    starts: &[K],
    goal: &K,
    neighbors: N,
    heuristic: H,
) -> Option<(Vec<K>, C)>
where
    K: Clone + Eq + Hash,
    C: Cost,
    N: FnMut(&K) -> I,
    I: IntoIterator<Item = Edge<K, C>>,
    H: FnMut(&K, &K) -> C,
{
    Search::new().run(starts, goal, neighbors, heuristic)
}

fn trace_back<K, C>(visits: &FxHashMap<K, Visit<K, C>>, goal: K) -> Vec<K>
where
    K: Clone + Eq + Hash,
{
    let mut path = vec![goal];
    while let Some(parent) = path
        .last()
        .and_then(|key| visits.get(key))
        .and_then(|visit| visit.parent.clone())
    {
        path.push(parent);
    }
    path.reverse();

    path
}
