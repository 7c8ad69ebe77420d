use crate::grid::{Grid, Pos, DIR8};
use crate::loader::InputError;
use crate::search::astar::astar;
use crate::search::{Cost, PathSummary, SearchSpace, STEP};

fn altitude(ch: char) -> Option<u32> {
    match ch {
        'S' | 'H' => Some(0),
        d if d.is_ascii_digit() => d.to_digit(10),
        _ => None,
    }
}

// Uphill effort scales with the climb; flat and downhill moves cost
// one point.
fn movement_cost(from: u32, to: u32) -> Cost {
    if to > from {
        STEP.max((to - from) * 2 * STEP)
    } else {
        STEP
    }
}

/// Altitude rescue routing: 8-directional movement from base camp `S`
/// to the hiker `H` over digit-coded terrain, `#` cliffs impassable.
/// Solved with A*; Chebyshev distance times the minimum step cost is a
/// lower bound because a diagonal move reduces it by at most one.
struct RescueSpace<'g> {
    grid: &'g Grid,
    start: Pos,
    hiker: Pos,
}

impl SearchSpace for RescueSpace<'_> {
    type State = Pos;

    fn start_states(&self) -> Vec<Pos> {
        vec![self.start]
    }

    fn successors(&self, state: &Pos, out: &mut Vec<(Pos, Cost)>) {
        let from = match self.grid.get(*state).and_then(altitude) {
            Some(alt) => alt,
            None => return,
        };
        for (dr, dc) in DIR8 {
            if let Some(next) = self.grid.step(*state, dr, dc) {
                if let Some(to) = self.grid.get(next).and_then(altitude) {
                    out.push((next, movement_cost(from, to)));
                }
            }
        }
    }

    fn is_goal(&self, state: &Pos) -> bool {
        *state == self.hiker
    }

    fn heuristic(&self, state: &Pos) -> Cost {
        state.chebyshev(&self.hiker) as Cost * STEP
    }

    fn position(&self, state: &Pos) -> Pos {
        *state
    }
}

/// Minimum-effort rescue route, or `None` when cliffs cut the hiker
/// off. Requires `S` and `H` markers.
pub fn find_rescue_path(grid: &Grid) -> Result<Option<PathSummary>, InputError> {
    let start = grid.find_one('S')?;
    let hiker = grid.find_one('H')?;
    Ok(astar(&RescueSpace { grid, start, hiker }))
}
