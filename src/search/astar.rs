use crate::search::{dijkstra, PathSummary, SearchSpace};

/// A* over the adapter's state space: Dijkstra's relaxation with the
/// frontier prioritized by `g + heuristic`.
///
/// The adapter's heuristic must never overestimate the true remaining
/// cost, or the first goal pop is not guaranteed optimal. A state
/// reached again with a strictly lower `g` is reopened.
pub fn astar<A: SearchSpace>(space: &A) -> Option<PathSummary> {
    dijkstra::search(space, true)
}
