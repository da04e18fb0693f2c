use weighted_network::maximum_flow::{minimum_cut, EdmondsKarp, MaxFlowSolver};
use weighted_network::Graph;

fn main() -> weighted_network::Result<()> {
    env_logger::init();

    let mut graph = Graph::new(4);
    let edges = vec![
        graph.add_edge(0, 1, 10)?,
        graph.add_edge(0, 2, 10)?,
        graph.add_edge(1, 2, 2)?,
        graph.add_edge(1, 3, 8)?,
        graph.add_edge(2, 3, 9)?,
    ];

    let flow = EdmondsKarp::default().solve(&mut graph, 0, 3)?;
    println!("maximum flow: {}", flow);
    for edge_id in edges {
        if let Some(edge) = graph.edge(edge_id) {
            println!("{} -> {}: {}/{}", edge.from(), edge.to(), edge.flow(), edge.weight());
        }
    }
    println!("source side of minimum cut: {:?}", minimum_cut(&graph, 0)?);
    Ok(())
}
