use weighted_network::shortest_path::probability::{add_probability_edge, weight_to_probability};
use weighted_network::shortest_path::{Dijkstra, LeastCostPathFinder};
use weighted_network::Graph;

fn main() -> weighted_network::Result<()> {
    env_logger::init();

    let mut graph = Graph::new(3);
    add_probability_edge(&mut graph, 0, 1, 0.9)?;
    add_probability_edge(&mut graph, 1, 2, 0.95)?;

    let paths = Dijkstra::default().compute(&graph, 0)?;
    match paths.distance(2) {
        Some(cost) => {
            println!("safest probability: {}", weight_to_probability(cost));
            println!("path: {:?}", paths.path_to(2).unwrap_or_default());
        }
        None => println!("node 2 is unreachable"),
    }
    Ok(())
}
