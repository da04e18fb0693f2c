use rstest::{fixture, rstest};
use weighted_network::shortest_path::probability::{add_probability_edge, probability_to_weight, safest_path_probability, weight_to_probability};
use weighted_network::shortest_path::{Dijkstra, LeastCostPathFinder};
use weighted_network::{Graph, InvalidArgument};

const EPS: f64 = 1e-9;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[fixture]
fn network() -> Graph<i64> {
    //      1 ---2--> 3
    //    4/ ^       ^ \1
    //    0  |1     3|  5
    //    1\ |       |
    //      2 --7--> 4     6 (isolated)
    let mut graph = Graph::new(7);
    for (from, to, weight) in [(0, 1, 4), (0, 2, 1), (2, 1, 1), (1, 3, 2), (2, 4, 7), (4, 3, 3), (3, 5, 1)] {
        graph.add_edge(from, to, weight).unwrap();
    }
    graph
}

#[rstest]
fn least_costs_from_source(network: Graph<i64>) {
    init_logger();
    let paths = Dijkstra::default().compute(&network, 0).unwrap();

    assert_eq!(paths.source(), 0);
    assert_eq!(paths.distances(), &[Some(0), Some(2), Some(1), Some(4), Some(8), Some(5), None]);
    assert_eq!(paths.path_to(5), Some(vec![0, 2, 1, 3, 5]));
    assert_eq!(paths.path_to(0), Some(vec![0]));
    assert_eq!(paths.path_to(6), None);
}

#[rstest]
fn relaxation_reaches_a_fixpoint(network: Graph<i64>) {
    for source in 0..network.num_nodes() {
        let paths = Dijkstra::default().compute(&network, source).unwrap();
        assert_eq!(paths.distance(source), Some(0));
        for edge in network.edges() {
            if let Some(du) = paths.distance(edge.from()) {
                let dv = paths.distance(edge.to()).unwrap();
                assert!(dv <= du + edge.weight());
            }
        }
    }
}

#[rstest]
fn unreachable_nodes_have_no_cost(network: Graph<i64>) {
    let paths = Dijkstra::default().compute(&network, 4).unwrap();
    for v in [0, 1, 2, 6] {
        assert!(!paths.is_reachable(v));
        assert_eq!(paths.distance(v), None);
    }
    assert_eq!(paths.distance(5), Some(4));
}

#[test]
fn isolated_source_reaches_only_itself() {
    let mut graph = Graph::new(3);
    graph.add_edge(1, 2, 1.5).unwrap();

    let paths = Dijkstra::default().compute(&graph, 0).unwrap();
    assert_eq!(paths.distances(), &[Some(0.0), None, None]);
}

#[test]
fn repeated_improvements_skip_stale_entries() {
    // node 3 is pushed three times as its cost drops from 10 to 6 to 3
    let mut graph = Graph::new(4);
    graph.add_edge(0, 3, 10).unwrap();
    graph.add_edge(0, 1, 1).unwrap();
    graph.add_edge(0, 2, 2).unwrap();
    graph.add_edge(1, 3, 5).unwrap();
    graph.add_edge(2, 3, 1).unwrap();

    let paths = Dijkstra::default().compute(&graph, 0).unwrap();
    assert_eq!(paths.distance(3), Some(3));
    assert_eq!(paths.path_to(3), Some(vec![0, 2, 3]));
}

#[test]
fn zero_weight_cycles_terminate() {
    let mut graph = Graph::new(3);
    graph.add_edge(0, 1, 0u32).unwrap();
    graph.add_edge(1, 0, 0).unwrap();
    graph.add_edge(1, 2, 0).unwrap();
    graph.add_edge(2, 1, 0).unwrap();

    let paths = Dijkstra::default().compute(&graph, 0).unwrap();
    assert_eq!(paths.distances(), &[Some(0), Some(0), Some(0)]);
}

#[test]
fn overflowing_path_costs_are_unreachable() {
    let mut graph = Graph::new(4);
    graph.add_edge(0, 1, u32::MAX).unwrap();
    graph.add_edge(1, 2, 1).unwrap();
    graph.add_edge(0, 3, u32::MAX - 1).unwrap();
    graph.add_edge(3, 2, 1).unwrap();

    let paths = Dijkstra::default().compute(&graph, 0).unwrap();
    assert_eq!(paths.distance(1), Some(u32::MAX));
    assert_eq!(paths.distance(2), Some(u32::MAX));
    assert_eq!(paths.path_to(2), Some(vec![0, 3, 2]));

    let mut chain = Graph::new(3);
    chain.add_edge(0, 1, u32::MAX).unwrap();
    chain.add_edge(1, 2, 1).unwrap();
    let paths = Dijkstra::default().compute(&chain, 0).unwrap();
    assert_eq!(paths.distance(2), None);
}

#[test]
fn infinite_float_costs_are_unreachable() {
    let mut graph: Graph<f64> = Graph::new(3);
    graph.add_edge(0, 1, f64::MAX).unwrap();
    graph.add_edge(1, 2, f64::MAX).unwrap();

    let paths = Dijkstra::default().compute(&graph, 0).unwrap();
    assert_eq!(paths.distance(1), Some(f64::MAX));
    assert_eq!(paths.distance(2), None);
}

#[rstest]
fn early_exit_at_target_keeps_target_cost(network: Graph<i64>) {
    let paths = Dijkstra::default().with_target(3).compute(&network, 0).unwrap();
    assert_eq!(paths.distance(3), Some(4));
    assert_eq!(paths.path_to(3), Some(vec![0, 2, 1, 3]));
}

#[rstest]
#[case(7)]
#[case(100)]
fn out_of_range_source_is_rejected(network: Graph<i64>, #[case] source: usize) {
    let err = Dijkstra::default().compute(&network, source).unwrap_err();
    assert_eq!(err, InvalidArgument::NodeOutOfRange { node: source, num_nodes: 7 });
}

#[rstest]
fn out_of_range_target_is_rejected(network: Graph<i64>) {
    assert!(Dijkstra::default().with_target(9).compute(&network, 0).is_err());
}

#[test]
fn chain_probability_round_trip() {
    init_logger();
    let mut graph = Graph::new(3);
    add_probability_edge(&mut graph, 0, 1, 0.9).unwrap();
    add_probability_edge(&mut graph, 1, 2, 0.95).unwrap();

    let paths = Dijkstra::default().compute(&graph, 0).unwrap();
    let probability = weight_to_probability(paths.distance(2).unwrap());
    assert!((probability - 0.855).abs() < EPS);
}

#[test]
fn safest_path_prefers_highest_product_over_fewest_hops() {
    let mut graph = Graph::new(4);
    add_probability_edge(&mut graph, 0, 3, 0.5).unwrap();
    add_probability_edge(&mut graph, 0, 1, 0.9).unwrap();
    add_probability_edge(&mut graph, 1, 2, 0.9).unwrap();
    add_probability_edge(&mut graph, 2, 3, 0.9).unwrap();

    let probability = safest_path_probability(&graph, 0, 3).unwrap().unwrap();
    assert!((probability - 0.729).abs() < EPS);
}

#[test]
fn safest_path_to_unreachable_node_is_none() {
    let mut graph = Graph::new(3);
    add_probability_edge(&mut graph, 0, 1, 1.0).unwrap();

    assert_eq!(safest_path_probability(&graph, 0, 2), Ok(None));
    assert_eq!(safest_path_probability(&graph, 0, 1), Ok(Some(1.0)));
}

#[rstest]
#[case(0.0)]
#[case(-0.1)]
#[case(1.5)]
#[case(f64::NAN)]
fn probabilities_outside_unit_interval_are_rejected(#[case] probability: f64) {
    assert!(matches!(probability_to_weight(probability), Err(InvalidArgument::InvalidProbability(_))));
}

#[rstest]
#[case(1.0, 0.0)]
#[case(0.5, std::f64::consts::LN_2)]
fn probability_weights_are_non_negative(#[case] probability: f64, #[case] weight: f64) {
    let w = probability_to_weight(probability).unwrap();
    assert!(w >= 0.0);
    assert!((w - weight).abs() < EPS);
}
