use routegraph::graph::MutableGraph;
use routegraph::WeightedGraph;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let mut romania: WeightedGraph<&str, u32> = WeightedGraph::new();

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
        romania.add_node(city);
    }

    romania.add_undirected_edge("Arad", "Zerind", 75);
    romania.add_undirected_edge("Arad", "Sibiu", 140);
    romania.add_undirected_edge("Zerind", "Oradea", 71);
    romania.add_undirected_edge("Oradea", "Sibiu", 151);
    romania.add_undirected_edge("Sibiu", "Fagaras", 99);
    romania.add_undirected_edge("Sibiu", "Rimnicu Vilcea", 80);
    romania.add_undirected_edge("Fagaras", "Bucharest", 211);
    romania.add_undirected_edge("Bucharest", "Pitesti", 101);
    romania.add_undirected_edge("Pitesti", "Rimnicu Vilcea", 97);

    let route = romania.full_path(&"Arad", &"Bucharest")?;

    println!(
        "From Arad to Bucharest, distance: {}km, path: {}",
        route.distance,
        route.nodes.join(" -> ")
    );

    Ok(())
}
