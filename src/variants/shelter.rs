use crate::grid::{Grid, Pos, DIR4};
use crate::loader::InputError;
use crate::search::dijkstra::dijkstra;
use crate::search::{Cost, PathSummary, SearchSpace, STEP};

fn cell_cost(ch: char) -> Option<Cost> {
    match ch {
        '.' => Some(STEP),
        'F' => Some(5 * STEP),
        'S' | 'H' => Some(STEP),
        _ => None,
    }
}

/// Nearest-shelter routing: 4-directional movement from `S` to
/// whichever shelter `H` is cheapest to reach through clear ground and
/// dense fog. Dijkstra finalizes states cheapest-first, so the first
/// shelter popped ends the search with the global minimum.
struct ShelterSpace<'g> {
    grid: &'g Grid,
    start: Pos,
}

impl SearchSpace for ShelterSpace<'_> {
    type State = Pos;

    fn start_states(&self) -> Vec<Pos> {
        vec![self.start]
    }

    fn successors(&self, state: &Pos, out: &mut Vec<(Pos, Cost)>) {
        for (dr, dc) in DIR4 {
            if let Some(next) = self.grid.step(*state, dr, dc) {
                if let Some(cost) = self.grid.get(next).and_then(cell_cost) {
                    out.push((next, cost));
                }
            }
        }
    }

    fn is_goal(&self, state: &Pos) -> bool {
        self.grid.get(*state) == Some('H')
    }

    fn position(&self, state: &Pos) -> Pos {
        *state
    }
}

/// Cheapest route to the nearest shelter, or `None` when none is
/// reachable. Requires `S` and at least one `H`.
pub fn find_nearest_shelter(grid: &Grid) -> Result<Option<PathSummary>, InputError> {
    let start = grid.find_one('S')?;
    grid.find_one('H')?;
    Ok(dijkstra(&ShelterSpace { grid, start }))
}
