use crate::error::Result;
use crate::graph::Graph;
use crate::maximum_flow::{check_terminals, MaxFlowSolver};
use log::debug;
use num_traits::NumAssign;
use std::collections::VecDeque;
use std::fmt::Debug;

/// Augments along shortest (fewest-arc) residual paths found by breadth-first search.
#[derive(Default)]
pub struct EdmondsKarp {
    prev: Vec<Option<(usize, usize)>>,
    visited: Vec<bool>,
    que: VecDeque<usize>,
}

impl EdmondsKarp {
    // bfs over arcs with positive residual capacity, recording (parent, arc) per visited node
    fn bfs<F>(&mut self, graph: &Graph<F>, source: usize, sink: usize) -> bool
    where
        F: NumAssign + PartialOrd + Copy,
    {
        self.prev.clear();
        self.prev.resize(graph.num_nodes(), None);
        self.visited.clear();
        self.visited.resize(graph.num_nodes(), false);
        self.que.clear();

        self.que.push_back(source);
        self.visited[source] = true;
        while let Some(u) = self.que.pop_front() {
            if u == sink {
                break;
            }

            for &arc_id in graph.arc_ids(u) {
                let arc = &graph.arcs[arc_id];
                if self.visited[arc.to] || arc.residual == F::zero() {
                    continue;
                }

                self.visited[arc.to] = true;
                self.prev[arc.to] = Some((u, arc_id));
                self.que.push_back(arc.to);
            }
        }

        self.visited[sink]
    }
}

impl<F> MaxFlowSolver<F> for EdmondsKarp
where
    F: NumAssign + PartialOrd + Copy + Debug,
{
    fn solve(&mut self, graph: &mut Graph<F>, source: usize, sink: usize) -> Result<F> {
        check_terminals(graph, source, sink)?;

        let mut flow = F::zero();
        let mut augmentations = 0;
        while self.bfs(graph, source, sink) {
            // calculate delta
            let mut delta: Option<F> = None;
            let mut length = 0;
            let mut v = sink;
            while let Some((u, arc_id)) = self.prev[v] {
                let residual = graph.arcs[arc_id].residual;
                if delta.map_or(true, |d| residual < d) {
                    delta = Some(residual);
                }
                length += 1;
                v = u;
            }
            debug_assert_eq!(v, source);
            let Some(delta) = delta else { break };

            // update flow
            let mut v = sink;
            while let Some((u, arc_id)) = self.prev[v] {
                graph.push_flow(arc_id, delta);
                v = u;
            }

            debug!("augmenting path of {} arcs carries {:?}", length, delta);
            flow += delta;
            augmentations += 1;
        }

        debug!("edmonds-karp {} -> {}: {:?} after {} augmentations", source, sink, flow, augmentations);
        Ok(flow)
    }
}
