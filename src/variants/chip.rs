use crate::grid::{Grid, Pos, DIR8};
use crate::loader::InputError;
use crate::search::dijkstra::dijkstra;
use crate::search::{Cost, PathSummary, SearchSpace, STEP};

// Power cost per routed cell, in half-point units. Clock regions burn
// dynamic power, rails are nearly free, blocked macros are impassable.
fn cell_cost(ch: char) -> Option<Cost> {
    match ch {
        '.' => Some(STEP),
        'C' => Some(4 * STEP),
        'M' => Some(2 * STEP),
        'P' => Some(STEP / 2),
        'S' | 'O' => Some(STEP),
        _ => None,
    }
}

/// Chip routing: cheapest 8-directional route from input pin `S` to
/// output pin `O` across the five terrain classes of the floorplan.
struct ChipSpace<'g> {
    grid: &'g Grid,
    start: Pos,
    output: Pos,
}

impl SearchSpace for ChipSpace<'_> {
    type State = Pos;

    fn start_states(&self) -> Vec<Pos> {
        vec![self.start]
    }

    fn successors(&self, state: &Pos, out: &mut Vec<(Pos, Cost)>) {
        for (dr, dc) in DIR8 {
            if let Some(next) = self.grid.step(*state, dr, dc) {
                if let Some(cost) = self.grid.get(next).and_then(cell_cost) {
                    out.push((next, cost));
                }
            }
        }
    }

    fn is_goal(&self, state: &Pos) -> bool {
        *state == self.output
    }

    fn position(&self, state: &Pos) -> Pos {
        *state
    }
}

/// Minimum-power routing path, or `None` when macros block every
/// route. Requires `S` and `O` markers.
pub fn find_chip_route(grid: &Grid) -> Result<Option<PathSummary>, InputError> {
    let start = grid.find_one('S')?;
    let output = grid.find_one('O')?;
    Ok(dijkstra(&ChipSpace {
        grid,
        start,
        output,
    }))
}
