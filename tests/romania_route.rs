use routegraph::graph::MutableGraph;
use routegraph::{
    Error, HeapDijkstra, MinScanDijkstra, ShortestPathAlgorithm, WeightedGraph,
};

// The canonical reference graph: eight Romanian cities, nine weighted
// undirected roads
fn romania() -> WeightedGraph<&'static str, u32> {
    let mut graph = WeightedGraph::new();

    for city in [
        "Arad",
        "Zerind",
        "Oradea",
        "Sibiu",
        "Fagaras",
        "Bucharest",
        "Pitesti",
        "Rimnicu Vilcea",
    ] {
        graph.add_node(city);
    }

    graph.add_undirected_edge("Arad", "Zerind", 75);
    graph.add_undirected_edge("Arad", "Sibiu", 140);
    graph.add_undirected_edge("Zerind", "Oradea", 71);
    graph.add_undirected_edge("Oradea", "Sibiu", 151);
    graph.add_undirected_edge("Sibiu", "Fagaras", 99);
    graph.add_undirected_edge("Sibiu", "Rimnicu Vilcea", 80);
    graph.add_undirected_edge("Fagaras", "Bucharest", 211);
    graph.add_undirected_edge("Bucharest", "Pitesti", 101);
    graph.add_undirected_edge("Pitesti", "Rimnicu Vilcea", 97);

    graph
}

#[test]
fn arad_to_bucharest_shortest_route() {
    let route = romania().full_path(&"Arad", &"Bucharest").unwrap();

    assert_eq!(route.distance, 418, "shortest Arad-Bucharest road is 418km");
    assert_eq!(
        route.nodes,
        vec!["Arad", "Sibiu", "Rimnicu Vilcea", "Pitesti", "Bucharest"],
        "route should run through Rimnicu Vilcea and Pitesti"
    );
}

#[test]
fn route_distance_matches_distance_label() {
    let graph = romania();
    let result = MinScanDijkstra::new()
        .compute(&graph, "Arad")
        .unwrap();

    let route = result.path_to(&"Bucharest").unwrap();
    assert_eq!(result.distance_to(&"Bucharest"), Some(route.distance));
}

#[test]
fn all_city_distances_from_arad() {
    let graph = romania();
    let result = MinScanDijkstra::new()
        .compute(&graph, "Arad")
        .unwrap();

    assert_eq!(result.distance_to(&"Arad"), Some(0));
    assert_eq!(result.distance_to(&"Zerind"), Some(75));
    assert_eq!(result.distance_to(&"Sibiu"), Some(140));
    assert_eq!(result.distance_to(&"Oradea"), Some(146));
    assert_eq!(result.distance_to(&"Rimnicu Vilcea"), Some(220));
    assert_eq!(result.distance_to(&"Fagaras"), Some(239));
    assert_eq!(result.distance_to(&"Pitesti"), Some(317));
    assert_eq!(result.distance_to(&"Bucharest"), Some(418));
}

#[test]
fn both_engines_agree_on_romania() {
    let graph = romania();

    let scan = MinScanDijkstra::new().compute(&graph, "Arad").unwrap();
    let heap = HeapDijkstra::new().compute(&graph, "Arad").unwrap();

    assert_eq!(scan.distances, heap.distances);

    let scan_route = scan.path_to(&"Bucharest").unwrap();
    let heap_route = heap.path_to(&"Bucharest").unwrap();
    assert_eq!(scan_route.distance, heap_route.distance);
}

#[test]
fn origin_equals_destination_is_a_single_node_route() {
    let route = romania().full_path(&"Arad", &"Arad").unwrap();

    assert_eq!(route.distance, 0);
    assert_eq!(route.nodes, vec!["Arad"]);
}

#[test]
fn disconnected_city_yields_no_path() {
    let mut graph = romania();
    graph.add_node("Iasi");

    let err = graph.full_path(&"Arad", &"Iasi").unwrap_err();
    assert!(matches!(err, Error::NoPath { .. }));
    assert!(err.to_string().contains("Iasi"));
    assert!(err.to_string().contains("Arad"));
}

#[test]
fn never_added_city_yields_no_path() {
    let err = romania().full_path(&"Arad", &"Cluj").unwrap_err();
    assert!(matches!(err, Error::NoPath { .. }));
}

#[test]
fn unknown_source_reaches_only_itself() {
    let graph = romania();
    let result = MinScanDijkstra::new()
        .compute(&graph, "Timisoara")
        .unwrap();

    assert_eq!(result.distance_to(&"Timisoara"), Some(0));
    assert_eq!(result.distances.len(), 1);
    assert!(result.predecessors.is_empty());
    assert!(matches!(
        result.path_to(&"Arad"),
        Err(Error::NoPath { .. })
    ));
}
