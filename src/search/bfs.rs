use std::collections::VecDeque;

use log::debug;
use rustc_hash::FxHashSet;

use crate::search::{Arena, PathSummary, SearchSpace, NO_PARENT};

/// Breadth-first search over the adapter's state space.
///
/// Requires uniform edge costs; the first time a goal state is
/// generated it lies on a minimum-hop path. States are marked visited
/// on enqueue, keyed by full state equality.
///
/// Returns `None` when the frontier drains without reaching a goal;
/// that means unreachable, not an error.
pub fn bfs<A: SearchSpace>(space: &A) -> Option<PathSummary> {
    let mut arena = Arena::new();
    let mut visited: FxHashSet<A::State> = FxHashSet::default();
    let mut frontier: VecDeque<usize> = VecDeque::new();

    for state in space.start_states() {
        if !visited.insert(state.clone()) {
            continue;
        }
        let idx = arena.push(state, 0, NO_PARENT);
        if space.is_goal(arena.state(idx)) {
            return Some(arena.reconstruct(space, idx));
        }
        frontier.push_back(idx);
    }

    let mut succ = Vec::new();
    while let Some(idx) = frontier.pop_front() {
        let state = arena.state(idx).clone();
        let cost = arena.cost(idx);

        succ.clear();
        space.successors(&state, &mut succ);
        for (next, edge) in succ.drain(..) {
            if !visited.insert(next.clone()) {
                continue;
            }
            let nidx = arena.push(next, cost + edge, idx);
            if space.is_goal(arena.state(nidx)) {
                debug!("bfs: goal after expanding {} states", arena.len());
                return Some(arena.reconstruct(space, nidx));
            }
            frontier.push_back(nidx);
        }
    }

    debug!("bfs: frontier exhausted after {} states", arena.len());
    None
}
