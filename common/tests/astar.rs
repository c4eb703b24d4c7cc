use std::collections::HashMap;

use common::{
    astar::{search, Edge, Search},
    floyd_warshall::{floyd_warshall, WeightedEdge},
};

fn graph(edges: &[(char, char, u32)]) -> HashMap<char, Vec<Edge<char, u32>>> {
    let mut adjacency: HashMap<char, Vec<Edge<char, u32>>> = HashMap::new();
    for &(from, to, cost) in edges {
        adjacency.entry(from).or_default().push(Edge::new(to, cost));
    }

    adjacency
}

fn zero(_: &char, _: &char) -> u32 {
    0
}

#[test]
fn diamond_prefers_cheaper_branch() {
    let g = graph(&[('A', 'B', 1), ('A', 'C', 1), ('B', 'D', 1), ('C', 'D', 5)]);
    let found = search(&['A'], &'D', |k| g.get(k).cloned().unwrap_or_default(), zero);

    assert_eq!(found, Some((vec!['A', 'B', 'D'], 2)));
}

#[test]
fn multi_start_uses_start_that_reaches_goal() {
    let g = graph(&[('B', 'C', 3), ('A', 'X', 1)]);
    let found = search(&['A', 'B'], &'C', |k| g.get(k).cloned().unwrap_or_default(), zero);

    assert_eq!(found, Some((vec!['B', 'C'], 3)));
}

#[test]
fn goal_equal_to_start_needs_no_expansion() {
    let mut expanded = Vec::new();
    let found = search(
        &['S'],
        &'S',
        |k: &char| {
            expanded.push(*k);
            Vec::<Edge<char, u32>>::new()
        },
        zero,
    );

    assert_eq!(found, Some((vec!['S'], 0)));
    assert!(expanded.is_empty());
}

#[test]
fn unreachable_goal_is_none() {
    let g = graph(&[('A', 'B', 1), ('B', 'A', 1)]);
    let found = search(&['A'], &'Z', |k| g.get(k).cloned().unwrap_or_default(), zero);

    assert_eq!(found, None);
}

#[test]
fn grid_with_manhattan_heuristic() {
    // 0 is open, 1 is a wall
    let grid = [
        [0, 0, 0, 0, 0],
        [1, 1, 1, 1, 0],
        [0, 0, 0, 0, 0],
        [0, 1, 1, 1, 1],
        [0, 0, 0, 0, 0],
    ];
    let neighbors = |&(r, c): &(usize, usize)| {
        let mut edges = Vec::new();
        for (dr, dc) in [(-1isize, 0isize), (0, 1), (1, 0), (0, -1)] {
            let (Some(nr), Some(nc)) = (r.checked_add_signed(dr), c.checked_add_signed(dc)) else {
                continue;
            };
            if nr < 5 && nc < 5 && grid[nr][nc] == 0 {
                edges.push(Edge::new((nr, nc), 1usize));
            }
        }
        edges
    };
    let manhattan = |a: &(usize, usize), b: &(usize, usize)| a.0.abs_diff(b.0) + a.1.abs_diff(b.1);

    let (path, cost) = search(&[(0, 0)], &(4, 4), neighbors, manhattan).unwrap();
    assert_eq!(cost, 16);
    assert_eq!(path.len(), cost + 1);
    assert_eq!(path.first(), Some(&(0, 0)));
    assert_eq!(path.last(), Some(&(4, 4)));
    for pair in path.windows(2) {
        assert_eq!(manhattan(&pair[0], &pair[1]), 1);
    }
}

#[test]
fn budget_stops_search() {
    let line = |k: &u32| vec![Edge::new(k + 1, 1u32)];

    assert_eq!(Search::new().max_expansions(5).run(&[0], &100, line, |_, _| 0), None);
    assert_eq!(
        Search::new()
            .max_expansions(200)
            .run(&[0], &100, line, |a: &u32, b: &u32| b - a)
            .map(|(_, cost)| cost),
        Some(100)
    );
}

struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: u64) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 33) % bound
    }
}

#[test]
fn matches_all_pairs_distances_on_random_graphs() {
    let mut rng = Lcg(7);
    for _ in 0..50 {
        let node_n = 2 + rng.next(10) as u32;
        let nodes: Vec<u32> = (0..node_n).collect();
        // one cost per (from, to) pair
        let mut costs: HashMap<(u32, u32), u64> = HashMap::new();
        for _ in 0..rng.next(30) {
            let from = rng.next(node_n as u64) as u32;
            let to = rng.next(node_n as u64) as u32;
            costs.insert((from, to), rng.next(9));
        }
        let edges: Vec<_> = costs
            .iter()
            .map(|(&(from, to), &cost)| WeightedEdge::new(from, to, cost))
            .collect();
        let mut adjacency: HashMap<u32, Vec<Edge<u32, u64>>> = HashMap::new();
        for edge in &edges {
            adjacency
                .entry(edge.from)
                .or_default()
                .push(Edge::new(edge.to, edge.cost));
        }
        let distances = floyd_warshall(&nodes, &edges);

        for start in &nodes {
            for goal in &nodes {
                let found = search(
                    &[*start],
                    goal,
                    |k| adjacency.get(k).cloned().unwrap_or_default(),
                    |_, _| 0,
                );
                assert_eq!(found.as_ref().map(|(_, cost)| *cost), distances.cost(start, goal));
                if let Some((path, cost)) = found {
                    assert_eq!(path.first(), Some(start));
                    assert_eq!(path.last(), Some(goal));
                    let walked: u64 = path
                        .windows(2)
                        .map(|pair| costs[&(pair[0], pair[1])])
                        .sum();
                    assert_eq!(walked, cost);
                }
            }
        }
    }
}
