use crate::error::{InvalidArgument, Result};
use num_traits::NumAssign;

/// A directed arc of the graph.
///
/// Every edge added by the caller is stored together with a paired reverse arc of weight zero.
/// Reverse arcs only carry residual capacity for flow computations and are never yielded by
/// [`Graph::neighbors`] or [`Graph::edges`].
#[derive(PartialEq, Debug, Clone)]
pub struct Edge<W> {
    pub(crate) from: usize,
    pub(crate) to: usize,
    pub(crate) weight: W,
    pub(crate) residual: W,
    pub(crate) rev: usize,
    pub(crate) is_reverse: bool,
}

impl<W> Edge<W>
where
    W: NumAssign + PartialOrd + Copy,
{
    #[inline]
    pub fn from(&self) -> usize {
        self.from
    }

    #[inline]
    pub fn to(&self) -> usize {
        self.to
    }

    /// Additive cost in path search, capacity in flow search.
    #[inline]
    pub fn weight(&self) -> W {
        self.weight
    }

    #[inline]
    pub fn residual_capacity(&self) -> W {
        self.residual
    }

    /// Flow currently pushed across this edge.
    #[inline]
    pub fn flow(&self) -> W {
        self.weight - self.residual
    }
}

#[derive(Debug, Clone)]
pub struct Graph<W> {
    num_nodes: usize,
    num_edges: usize,
    // edge `i` lives at arc `2 * i`, its reverse at `2 * i + 1`
    pub(crate) arcs: Vec<Edge<W>>,
    pub(crate) adjacency: Vec<Vec<usize>>,
}

impl<W> Default for Graph<W> {
    fn default() -> Self {
        Self { num_nodes: 0, num_edges: 0, arcs: Vec::new(), adjacency: Vec::new() }
    }
}

impl<W> Graph<W>
where
    W: NumAssign + PartialOrd + Copy,
{
    pub fn new(num_nodes: usize) -> Self {
        let mut graph = Self::default();
        graph.add_nodes(num_nodes);
        graph
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    pub fn add_node(&mut self) -> usize {
        self.adjacency.push(Vec::new());
        self.num_nodes += 1;
        self.num_nodes - 1
    }

    pub fn add_nodes(&mut self, num_nodes: usize) -> Vec<usize> {
        self.adjacency.resize_with(self.num_nodes + num_nodes, Vec::new);
        self.num_nodes += num_nodes;
        ((self.num_nodes - num_nodes)..self.num_nodes).collect()
    }

    // return edge index
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<usize> {
        self.check_node(from)?;
        self.check_node(to)?;
        // also rejects NaN
        if !(weight >= W::zero()) {
            return Err(InvalidArgument::NegativeWeight { from, to });
        }

        let forward = self.arcs.len();
        let backward = forward + 1;
        self.arcs.push(Edge { from, to, weight, residual: weight, rev: backward, is_reverse: false });
        self.arcs.push(Edge { from: to, to: from, weight: W::zero(), residual: W::zero(), rev: forward, is_reverse: true });
        self.adjacency[from].push(forward);
        self.adjacency[to].push(backward);

        self.num_edges += 1;
        Ok(self.num_edges - 1)
    }

    pub fn edge(&self, edge_id: usize) -> Option<&Edge<W>> {
        if edge_id >= self.num_edges {
            return None;
        }
        Some(&self.arcs[2 * edge_id])
    }

    /// All caller edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge<W>> + Clone + '_ {
        self.arcs.iter().step_by(2)
    }

    /// Outgoing edges of `u` in the order they were added.
    ///
    /// The returned iterator borrows the graph and can be cloned to restart the walk.
    pub fn neighbors(&self, u: usize) -> Result<impl Iterator<Item = &Edge<W>> + Clone + '_> {
        self.check_node(u)?;
        Ok(self.adjacency[u].iter().map(move |&arc_id| &self.arcs[arc_id]).filter(|e| !e.is_reverse))
    }

    /// Net flow currently leaving `source`.
    pub fn total_flow(&self, source: usize) -> W {
        self.edges().fold(W::zero(), |mut flow, edge| {
            if edge.from == source {
                flow += edge.flow();
            } else if edge.to == source {
                flow -= edge.flow();
            }
            flow
        })
    }

    /// Restores every residual capacity to its value right after construction.
    pub fn reset_flow(&mut self) {
        for arc in self.arcs.iter_mut() {
            arc.residual = arc.weight;
        }
    }

    pub(crate) fn check_node(&self, u: usize) -> Result<()> {
        if u >= self.num_nodes {
            return Err(InvalidArgument::NodeOutOfRange { node: u, num_nodes: self.num_nodes });
        }
        Ok(())
    }

    // all arcs leaving u, reverse arcs included
    #[inline]
    pub(crate) fn arc_ids(&self, u: usize) -> &[usize] {
        &self.adjacency[u]
    }

    #[inline]
    pub(crate) fn push_flow(&mut self, arc_id: usize, flow: W) {
        let rev = self.arcs[arc_id].rev;
        self.arcs[arc_id].residual -= flow;
        self.arcs[rev].residual += flow;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_arcs_are_paired() {
        let mut graph = Graph::new(2);
        let edge_id = graph.add_edge(0, 1, 5).unwrap();
        let (forward, backward) = (&graph.arcs[2 * edge_id], &graph.arcs[2 * edge_id + 1]);
        assert_eq!(forward.rev, 2 * edge_id + 1);
        assert_eq!(backward.rev, 2 * edge_id);
        assert_eq!((backward.from, backward.to, backward.residual), (1, 0, 0));
    }

    #[test]
    fn push_flow_moves_residual_to_reverse_arc() {
        let mut graph = Graph::new(2);
        graph.add_edge(0, 1, 5).unwrap();
        graph.push_flow(0, 3);
        assert_eq!(graph.arcs[0].residual, 2);
        assert_eq!(graph.arcs[1].residual, 3);
        assert_eq!(graph.arcs[0].residual + graph.arcs[1].residual, 5);

        graph.push_flow(1, 1);
        assert_eq!(graph.edge(0).unwrap().flow(), 2);
    }
}
