//! All-pairs shortest paths for small, dense, directed graphs.

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::astar::Cost;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedEdge<T, C> {
    pub from: T,
    pub to: T,
    pub cost: C,
}

impl<T, C> WeightedEdge<T, C> {
    pub fn new(from: T, to: T, cost: C) -> Self {
        Self { from, to, cost }
    }
}

/// Shortest distances between every ordered pair of nodes.
#[derive(Debug, Clone)]
pub struct Distances<T, C> {
    ids: FxHashMap<T, usize>,
    costs: Vec<Option<C>>,
}

impl<T, C> Distances<T, C>
where
    T: Eq + Hash,
    C: Cost,
{
    /// `None` if `to` is unreachable from `from` or either node is unknown.
    pub fn cost(&self, from: &T, to: &T) -> Option<C> {
        let from_id = *self.ids.get(from)?;
        let to_id = *self.ids.get(to)?;
        self.costs[from_id * self.ids.len() + to_id]
    }

    pub fn node_n(&self) -> usize {
        self.ids.len()
    }
}

/// Computes shortest distances between all pairs of `nodes`.
///
/// Edges whose endpoints are missing from `nodes` are ignored. When an edge
/// is listed twice the later one wins.
pub fn floyd_warshall<T, C>(nodes: &[T], edges: &[WeightedEdge<T, C>]) -> Distances<T, C>
where
    T: Clone + Eq + Hash,
    C: Cost,
{
    let mut ids = FxHashMap::default();
    for node in nodes {
        let next_id = ids.len();
        ids.entry(node.clone()).or_insert(next_id);
    }

    let node_n = ids.len();
    let mut costs = vec![None; node_n * node_n];
    for edge in edges {
        if let (Some(&from_id), Some(&to_id)) = (ids.get(&edge.from), ids.get(&edge.to)) {
            costs[from_id * node_n + to_id] = Some(edge.cost);
        }
    }
    for id in 0..node_n {
        costs[id * node_n + id] = Some(C::default());
    }

    for k in 0..node_n {
        for i in 0..node_n {
            let Some(cost_ik) = costs[i * node_n + k] else {
                continue;
            };
            for j in 0..node_n {
                let Some(cost_kj) = costs[k * node_n + j] else {
                    continue;
                };
                let via_k = cost_ik + cost_kj;
                let cost_ij = &mut costs[i * node_n + j];
                if cost_ij.map_or(true, |cost| cost > via_k) {
                    *cost_ij = Some(via_k);
                }
            }
        }
    }

    Distances { ids, costs }
}
