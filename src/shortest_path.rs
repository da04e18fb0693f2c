pub mod dijkstra;
pub mod probability;

use crate::error::Result;
use crate::graph::Graph;
use num_traits::{CheckedAdd, NumAssign};

pub use dijkstra::Dijkstra;

/// Weight type usable as an additive path cost.
///
/// `checked_cost_add` returns `None` when the sum is not representable; such a path is treated as
/// costlier than any representable one.
pub trait PathCost: NumAssign + PartialOrd + Copy {
    fn checked_cost_add(self, other: Self) -> Option<Self>;
}

macro_rules! integral_path_cost {
    ($($t:ty),*) => {
        $(
            impl PathCost for $t {
                #[inline]
                fn checked_cost_add(self, other: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &other)
                }
            }
        )*
    };
}

macro_rules! float_path_cost {
    ($($t:ty),*) => {
        $(
            impl PathCost for $t {
                #[inline]
                fn checked_cost_add(self, other: Self) -> Option<Self> {
                    let sum = self + other;
                    sum.is_finite().then_some(sum)
                }
            }
        )*
    };
}

integral_path_cost!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
float_path_cost!(f32, f64);

/// Single-source least-cost path search over non-negative additive weights.
pub trait LeastCostPathFinder<W> {
    fn compute(&mut self, graph: &Graph<W>, source: usize) -> Result<ShortestPaths<W>>;
}

/// Minimum costs from one source; `None` marks a node with no path from it.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths<W> {
    pub(crate) source: usize,
    pub(crate) distances: Vec<Option<W>>,
    // (previous node, edge id) on a least-cost path
    pub(crate) prev: Vec<Option<(usize, usize)>>,
}

impl<W> ShortestPaths<W>
where
    W: Copy,
{
    #[inline]
    pub fn source(&self) -> usize {
        self.source
    }

    pub fn distance(&self, v: usize) -> Option<W> {
        self.distances.get(v).copied().flatten()
    }

    pub fn is_reachable(&self, v: usize) -> bool {
        self.distance(v).is_some()
    }

    pub fn distances(&self) -> &[Option<W>] {
        &self.distances
    }

    /// Node sequence of a least-cost path from the source to `target`.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target];
        let mut v = target;
        while let Some((u, _)) = self.prev[v] {
            path.push(u);
            v = u;
        }
        debug_assert_eq!(v, self.source);
        path.reverse();
        Some(path)
    }
}
