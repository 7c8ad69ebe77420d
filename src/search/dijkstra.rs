use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::debug;
use rustc_hash::FxHashMap;

use crate::search::{Arena, Cost, PathSummary, SearchSpace, NO_PARENT};

/// Priority-queue entry. `BinaryHeap` is a max-heap, so `Ord` is
/// implemented in reverse; ties fall back to insertion order (`seq`),
/// which keeps repeated solves of the same input deterministic.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) struct HeapEntry {
    pub cost: Cost,
    pub seq: u64,
    pub idx: usize,
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        match other.cost.cmp(&self.cost) {
            Ordering::Equal => other.seq.cmp(&self.seq),
            ordering => ordering,
        }
    }
}

/// Dijkstra relaxation over the adapter's state space.
///
/// A state is finalized the first time it is popped; improvements push
/// fresh entries and stale ones are skipped against the best-cost map
/// (lazy deletion). The goal test runs at pop time so that with
/// multiple goal states the cheapest one wins.
pub fn dijkstra<A: SearchSpace>(space: &A) -> Option<PathSummary> {
    search(space, false)
}

pub(crate) fn search<A: SearchSpace>(space: &A, use_heuristic: bool) -> Option<PathSummary> {
    let mut arena = Arena::new();
    let mut best: FxHashMap<A::State, Cost> = FxHashMap::default();
    let mut open: BinaryHeap<HeapEntry> = BinaryHeap::new();
    let mut seq = 0u64;

    for state in space.start_states() {
        if best.get(&state).is_some() {
            continue;
        }
        best.insert(state.clone(), 0);
        let priority = if use_heuristic {
            space.heuristic(&state)
        } else {
            0
        };
        let idx = arena.push(state, 0, NO_PARENT);
        open.push(HeapEntry {
            cost: priority,
            seq,
            idx,
        });
        seq += 1;
    }

    let mut succ = Vec::new();
    while let Some(entry) = open.pop() {
        let state = arena.state(entry.idx).clone();
        let g = arena.cost(entry.idx);

        // Stale entry: a cheaper route to this state was found after
        // this one was pushed.
        if best.get(&state).is_some_and(|&b| g > b) {
            continue;
        }

        if space.is_goal(&state) {
            debug!(
                "{}: goal at cost {} after {} nodes",
                if use_heuristic { "astar" } else { "dijkstra" },
                g,
                arena.len()
            );
            return Some(arena.reconstruct(space, entry.idx));
        }

        succ.clear();
        space.successors(&state, &mut succ);
        for (next, edge) in succ.drain(..) {
            let ng = g + edge;
            // Relax only on strict improvement. This also reopens a
            // previously finalized state if a cheaper route appears,
            // which A* relies on near heuristic ties.
            if best.get(&next).is_some_and(|&b| ng >= b) {
                continue;
            }
            best.insert(next.clone(), ng);
            let priority = if use_heuristic {
                ng + space.heuristic(&next)
            } else {
                ng
            };
            let nidx = arena.push(next, ng, entry.idx);
            open.push(HeapEntry {
                cost: priority,
                seq,
                idx: nidx,
            });
            seq += 1;
        }
    }

    None
}
