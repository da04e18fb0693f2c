use crate::error::{InvalidArgument, Result};
use crate::graph::Graph;
use crate::shortest_path::{LeastCostPathFinder, PathCost, ShortestPaths};
use log::{debug, trace};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt::Debug;

#[derive(Default, Debug, Clone)]
pub struct Dijkstra {
    target: Option<usize>,
}

impl Dijkstra {
    /// Stops the search as soon as `target` is finalized.
    ///
    /// Only the cost of `target` and of nodes finalized before it are minimal in the result.
    pub fn with_target(mut self, target: usize) -> Self {
        self.target = Some(target);
        self
    }
}

// min-heap entry; ties are broken by node index
struct Candidate<W> {
    cost: W,
    node: usize,
}

impl<W: PartialOrd> PartialEq for Candidate<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: PartialOrd> Eq for Candidate<W> {}

impl<W: PartialOrd> Ord for Candidate<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.partial_cmp(&self.cost).unwrap_or(Ordering::Equal).then_with(|| other.node.cmp(&self.node))
    }
}

impl<W: PartialOrd> PartialOrd for Candidate<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W> LeastCostPathFinder<W> for Dijkstra
where
    W: PathCost + Debug,
{
    fn compute(&mut self, graph: &Graph<W>, source: usize) -> Result<ShortestPaths<W>> {
        graph.check_node(source)?;
        if let Some(target) = self.target {
            graph.check_node(target)?;
        }
        // add_edge already rejects these; guards the crate-internal weight invariant
        if let Some(edge) = graph.edges().find(|e| !(e.weight() >= W::zero())) {
            return Err(InvalidArgument::NegativeWeight { from: edge.from(), to: edge.to() });
        }

        let num_nodes = graph.num_nodes();
        let mut dist: Vec<Option<W>> = vec![None; num_nodes];
        let mut prev = vec![None; num_nodes];
        let mut finalized = vec![false; num_nodes];
        let mut bh = BinaryHeap::new();

        dist[source] = Some(W::zero());
        bh.push(Candidate { cost: W::zero(), node: source });

        while let Some(Candidate { cost, node: u }) = bh.pop() {
            // stale entry left behind by a later improvement
            if finalized[u] {
                continue;
            }
            finalized[u] = true;

            if self.target == Some(u) {
                break;
            }

            for &arc_id in graph.arc_ids(u) {
                let edge = &graph.arcs[arc_id];
                if edge.is_reverse || finalized[edge.to] {
                    continue;
                }

                // an unrepresentable sum is beyond every representable cost
                let Some(new_dist) = cost.checked_cost_add(edge.weight) else {
                    continue;
                };
                if dist[edge.to].map_or(true, |d| new_dist < d) {
                    trace!("relax {} -> {}: {:?}", u, edge.to, new_dist);
                    dist[edge.to] = Some(new_dist);
                    prev[edge.to] = Some((u, arc_id / 2));
                    bh.push(Candidate { cost: new_dist, node: edge.to });
                }
            }
        }

        debug!("least-cost search from {} finalized {} of {} nodes", source, finalized.iter().filter(|&&f| f).count(), num_nodes);
        Ok(ShortestPaths { source, distances: dist, prev })
    }
}
