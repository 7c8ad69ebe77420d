pub mod astar;
pub mod bfs;
pub mod dijkstra;
pub mod ida_star;


use std::hash::Hash;

use crate::grid::Pos;

/// Edge and path costs, stored in half-point units so the half-cost
/// terrain classes stay integral and totally ordered in the priority
/// queues. One full movement point is [`STEP`].
pub type Cost = u32;

/// One full movement point, in half-point units.
pub const STEP: Cost = 2;

/// A solved route: total cost plus the ordered coordinate sequence from
/// a start cell to the goal cell, both inclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct PathSummary {
    pub cost: Cost,
    pub path: Vec<Pos>,
}

impl PathSummary {
    /// Number of transitions along the path.
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Total cost in movement points.
    pub fn points(&self) -> f64 {
        self.cost as f64 / STEP as f64
    }
}

/// Variant-specific binding of state shape, successor generation, goal
/// test and heuristic. The four search algorithms are written once,
/// generic over this interface; state equality doubles as the
/// visited/closed-set key, so it must cover every active field.
pub trait SearchSpace {
    type State: Clone + Eq + Hash;

    /// Seed states. Multi-source variants return more than one.
    fn start_states(&self) -> Vec<Self::State>;

    /// Appends `(successor, edge cost)` pairs to `out`. The caller
    /// clears the buffer; costs must be non-negative.
    fn successors(&self, state: &Self::State, out: &mut Vec<(Self::State, Cost)>);

    fn is_goal(&self, state: &Self::State) -> bool;

    /// Admissible lower bound on the remaining cost. Zero for the
    /// BFS/Dijkstra variants.
    fn heuristic(&self, _state: &Self::State) -> Cost {
        0
    }

    /// Grid coordinate of a state, for path reconstruction.
    fn position(&self, state: &Self::State) -> Pos;
}

pub(crate) const NO_PARENT: usize = usize::MAX;

/// Arena of search nodes indexed by stable handles. Parent handles
/// always point at earlier entries, so reconstruction terminates at the
/// sentinel root without any cycle risk.
pub(crate) struct Arena<S> {
    states: Vec<S>,
    costs: Vec<Cost>,
    parents: Vec<usize>,
}

impl<S: Clone> Arena<S> {
    pub fn new() -> Self {
        Arena {
            states: Vec::new(),
            costs: Vec::new(),
            parents: Vec::new(),
        }
    }

    pub fn push(&mut self, state: S, cost: Cost, parent: usize) -> usize {
        self.states.push(state);
        self.costs.push(cost);
        self.parents.push(parent);
        self.states.len() - 1
    }

    pub fn state(&self, idx: usize) -> &S {
        &self.states[idx]
    }

    pub fn cost(&self, idx: usize) -> Cost {
        self.costs[idx]
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Walks parent handles back to the root and returns the coordinate
    /// sequence in start-to-goal order, paired with the node's cost.
    pub fn reconstruct<A>(&self, space: &A, goal_idx: usize) -> PathSummary
    where
        A: SearchSpace<State = S>,
    {
        let mut path = Vec::new();
        let mut idx = goal_idx;
        while idx != NO_PARENT {
            path.push(space.position(&self.states[idx]));
            idx = self.parents[idx];
        }
        path.reverse();
        PathSummary {
            cost: self.costs[goal_idx],
            path,
        }
    }
}
