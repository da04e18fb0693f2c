use crate::error::Result;
use crate::graph::Graph;
use crate::maximum_flow::{check_terminals, MaxFlowSolver};
use log::debug;
use num_traits::NumAssign;
use std::collections::VecDeque;
use std::fmt::Debug;

/// Blocking flows over the BFS level graph.
#[derive(Default)]
pub struct Dinic {
    levels: Vec<usize>,
    current_edge: Vec<usize>,
    que: VecDeque<usize>,
}

impl Dinic {
    // O(n + m)
    // level of u in the residual network seen from source; unreachable nodes get num_nodes
    fn update_levels<F>(&mut self, graph: &Graph<F>, source: usize)
    where
        F: NumAssign + PartialOrd + Copy,
    {
        let num_nodes = graph.num_nodes();
        self.levels.clear();
        self.levels.resize(num_nodes, num_nodes);
        self.levels[source] = 0;
        self.que.clear();
        self.que.push_back(source);

        while let Some(u) = self.que.pop_front() {
            for &arc_id in graph.arc_ids(u) {
                let arc = &graph.arcs[arc_id];
                if arc.residual > F::zero() && self.levels[arc.to] == num_nodes {
                    self.levels[arc.to] = self.levels[u] + 1;
                    self.que.push_back(arc.to);
                }
            }
        }
    }

    // `upper == None` leaves the path unbounded until its first arc
    fn dfs<F>(&mut self, graph: &mut Graph<F>, u: usize, sink: usize, upper: Option<F>) -> F
    where
        F: NumAssign + PartialOrd + Copy,
    {
        if u == sink {
            return upper.unwrap_or_else(F::zero);
        }

        while self.current_edge[u] < graph.arc_ids(u).len() {
            let arc_id = graph.arc_ids(u)[self.current_edge[u]];
            let (to, residual) = (graph.arcs[arc_id].to, graph.arcs[arc_id].residual);

            if residual > F::zero() && self.levels[to] == self.levels[u] + 1 {
                let limit = match upper {
                    Some(upper) if upper < residual => upper,
                    _ => residual,
                };
                let d = self.dfs(graph, to, sink, Some(limit));
                if d > F::zero() {
                    graph.push_flow(arc_id, d);
                    return d;
                }
            }
            self.current_edge[u] += 1;
        }

        F::zero()
    }
}

impl<F> MaxFlowSolver<F> for Dinic
where
    F: NumAssign + PartialOrd + Copy + Debug,
{
    fn solve(&mut self, graph: &mut Graph<F>, source: usize, sink: usize) -> Result<F> {
        check_terminals(graph, source, sink)?;
        let num_nodes = graph.num_nodes();

        let mut flow = F::zero();
        let mut phases = 0;
        loop {
            self.update_levels(graph, source);

            // no s-t path
            if self.levels[sink] >= num_nodes {
                break;
            }

            self.current_edge.clear();
            self.current_edge.resize(num_nodes, 0);
            loop {
                let d = self.dfs(graph, source, sink, None);
                if d == F::zero() {
                    break;
                }
                flow += d;
            }
            phases += 1;
        }

        debug!("dinic {} -> {}: {:?} after {} phases", source, sink, flow, phases);
        Ok(flow)
    }
}
