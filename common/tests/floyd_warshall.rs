use common::floyd_warshall::{floyd_warshall, WeightedEdge};

#[test]
fn shortest_distances_between_valves() {
    let nodes = ["AA", "BB", "CC", "DD"];
    let edges = [
        WeightedEdge::new("AA", "BB", 1u32),
        WeightedEdge::new("BB", "AA", 1),
        WeightedEdge::new("BB", "CC", 1),
        WeightedEdge::new("CC", "BB", 1),
        WeightedEdge::new("AA", "DD", 5),
        WeightedEdge::new("CC", "DD", 1),
    ];
    let distances = floyd_warshall(&nodes, &edges);

    assert_eq!(distances.node_n(), 4);
    assert_eq!(distances.cost(&"AA", &"AA"), Some(0));
    assert_eq!(distances.cost(&"AA", &"CC"), Some(2));
    assert_eq!(distances.cost(&"AA", &"DD"), Some(3));
    assert_eq!(distances.cost(&"CC", &"AA"), Some(2));
    assert_eq!(distances.cost(&"DD", &"AA"), None);
    assert_eq!(distances.cost(&"AA", &"ZZ"), None);
}

#[test]
fn later_duplicate_edge_wins() {
    let nodes = [1, 2];
    let edges = [WeightedEdge::new(1, 2, 9u32), WeightedEdge::new(1, 2, 4)];

    assert_eq!(floyd_warshall(&nodes, &edges).cost(&1, &2), Some(4));
}

#[test]
fn edges_to_unknown_nodes_are_ignored() {
    let nodes = [1, 2];
    let edges = [WeightedEdge::new(1, 3, 1u32), WeightedEdge::new(3, 2, 1)];

    assert_eq!(floyd_warshall(&nodes, &edges).cost(&1, &2), None);
}
