use log::debug;

use crate::search::{Cost, SearchSpace};

/// Iterative-deepening A* over the adapter's state space.
///
/// Explores depth-first under an `f = g + heuristic` bound that grows
/// to the smallest pruned value each iteration, so no exponential
/// visited set is stored; only the current path is kept, and a state
/// already on it is never re-entered. Used by the resource-bounded
/// variant, where the budget dimension multiplies the state space.
///
/// Returns the goal cost and the full state sequence (so callers can
/// read resource fields off the final state), or `None` once the next
/// bound would exceed `max_bound` or nothing is left to prune.
/// Bound-exceeded is reported exactly like an unreachable goal.
pub fn ida_star<A: SearchSpace>(space: &A, max_bound: Cost) -> Option<(Cost, Vec<A::State>)> {
    let starts = space.start_states();
    if starts.is_empty() {
        return None;
    }

    let mut bound = starts.iter().map(|s| space.heuristic(s)).min().unwrap_or(0);

    loop {
        if bound > max_bound {
            debug!("ida_star: bound {} exceeds cap {}", bound, max_bound);
            return None;
        }

        let mut next_bound: Option<Cost> = None;
        for start in &starts {
            let mut path = vec![start.clone()];
            if let Some(cost) = probe(space, start, 0, bound, &mut path, &mut next_bound) {
                debug!("ida_star: goal at cost {} under bound {}", cost, bound);
                return Some((cost, path));
            }
        }

        match next_bound {
            // Nothing was pruned by the bound: the reachable space is
            // exhausted and the goal is unreachable at any bound.
            None => return None,
            Some(nb) => bound = nb,
        }
    }
}

fn probe<A: SearchSpace>(
    space: &A,
    state: &A::State,
    g: Cost,
    bound: Cost,
    path: &mut Vec<A::State>,
    next_bound: &mut Option<Cost>,
) -> Option<Cost> {
    let f = g + space.heuristic(state);
    if f > bound {
        *next_bound = Some(next_bound.map_or(f, |nb| nb.min(f)));
        return None;
    }
    if space.is_goal(state) {
        return Some(g);
    }

    let mut succ = Vec::new();
    space.successors(state, &mut succ);
    for (next, edge) in succ {
        if path.contains(&next) {
            continue;
        }
        path.push(next.clone());
        if let Some(cost) = probe(space, &next, g + edge, bound, path, next_bound) {
            return Some(cost);
        }
        path.pop();
    }
    None
}
