pub mod dinic;
pub mod edmonds_karp;

use crate::error::{InvalidArgument, Result};
use crate::graph::Graph;
use num_traits::NumAssign;
use std::collections::VecDeque;

pub use dinic::Dinic;
pub use edmonds_karp::EdmondsKarp;

/// Maximum flow from `source` to `sink` over the graph's residual capacities.
///
/// Solving mutates the residual capacities in place. A second call on the same graph returns only
/// the flow that can be pushed on top of the current residual state (zero once saturated), not a
/// fresh maximum; clone the graph or call [`Graph::reset_flow`] to start over.
pub trait MaxFlowSolver<F> {
    fn solve(&mut self, graph: &mut Graph<F>, source: usize, sink: usize) -> Result<F>;
}

pub(crate) fn check_terminals<F>(graph: &Graph<F>, source: usize, sink: usize) -> Result<()>
where
    F: NumAssign + PartialOrd + Copy,
{
    graph.check_node(source)?;
    graph.check_node(sink)?;
    if source == sink {
        return Err(InvalidArgument::SourceIsSink(source));
    }
    Ok(())
}

/// Source side of a minimum cut: nodes reachable from `source` through arcs with positive
/// residual capacity, in ascending order.
///
/// Only meaningful after a solver has saturated the graph.
pub fn minimum_cut<F>(graph: &Graph<F>, source: usize) -> Result<Vec<usize>>
where
    F: NumAssign + PartialOrd + Copy,
{
    graph.check_node(source)?;
    let mut visited = vec![false; graph.num_nodes()];
    let mut que = VecDeque::from([source]);
    visited[source] = true;

    while let Some(u) = que.pop_front() {
        for &arc_id in graph.arc_ids(u) {
            let arc = &graph.arcs[arc_id];
            if !visited[arc.to] && arc.residual > F::zero() {
                visited[arc.to] = true;
                que.push_back(arc.to);
            }
        }
    }

    Ok((0..graph.num_nodes()).filter(|&u| visited[u]).collect())
}
