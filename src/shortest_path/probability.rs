//! Most-probable paths expressed as least-cost paths.
//!
//! A path's probability is the product of its edge probabilities. Storing `-ln p` as the edge
//! weight turns that product into a sum of non-negative weights, so the least-cost path is the
//! most probable one and `exp(-cost)` recovers its probability.

use crate::error::{InvalidArgument, Result};
use crate::graph::Graph;
use crate::shortest_path::{Dijkstra, LeastCostPathFinder};

pub fn probability_to_weight(probability: f64) -> Result<f64> {
    if !(probability > 0.0 && probability <= 1.0) {
        return Err(InvalidArgument::InvalidProbability(probability));
    }
    // -ln(1) is -0.0
    Ok((-probability.ln()).max(0.0))
}

#[inline]
pub fn weight_to_probability(weight: f64) -> f64 {
    (-weight).exp()
}

pub fn add_probability_edge(graph: &mut Graph<f64>, from: usize, to: usize, probability: f64) -> Result<usize> {
    graph.add_edge(from, to, probability_to_weight(probability)?)
}

/// Highest product of edge probabilities over all paths from `source` to `target`.
///
/// Returns `None` when `target` is unreachable.
pub fn safest_path_probability(graph: &Graph<f64>, source: usize, target: usize) -> Result<Option<f64>> {
    let paths = Dijkstra::default().with_target(target).compute(graph, source)?;
    Ok(paths.distance(target).map(weight_to_probability))
}
