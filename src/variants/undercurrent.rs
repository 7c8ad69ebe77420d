use crate::grid::{Grid, Pos, DIR4};
use crate::loader::InputError;
use crate::search::ida_star::ida_star;
use crate::search::{Cost, PathSummary, SearchSpace, STEP};

fn current_direction(ch: char) -> Option<(i32, i32)> {
    match ch {
        '>' => Some((0, 1)),
        '<' => Some((0, -1)),
        '^' => Some((-1, 0)),
        'v' => Some((1, 0)),
        _ => None,
    }
}

/// Resource-budgeted forced-movement routing: 4-directional movement
/// from `S` to the surface `U`. Entering a current cell either costs
/// one budget unit to resist (the move ends on the current cell) or
/// carries the swimmer one extra step with the flow for free; a carry
/// into a wall or off the grid invalidates that move. Currents do not
/// chain: a carry that lands on another current cell stops there.
///
/// The budget multiplies the state space by `budget + 1`, so this
/// variant runs under IDA* instead of a stored closed set.
struct CurrentSpace<'g> {
    grid: &'g Grid,
    start: Pos,
    surface: Pos,
    budget: u32,
}

impl SearchSpace for CurrentSpace<'_> {
    type State = (Pos, u32);

    fn start_states(&self) -> Vec<(Pos, u32)> {
        vec![(self.start, self.budget)]
    }

    fn successors(&self, &(pos, budget): &(Pos, u32), out: &mut Vec<((Pos, u32), Cost)>) {
        for (dr, dc) in DIR4 {
            let next = match self.grid.step(pos, dr, dc) {
                Some(next) => next,
                None => continue,
            };
            let ch = match self.grid.get(next) {
                Some('#') | None => continue,
                Some(ch) => ch,
            };
            match current_direction(ch) {
                None => out.push(((next, budget), STEP)),
                Some((cr, cc)) => {
                    if budget > 0 {
                        out.push(((next, budget - 1), STEP));
                    }
                    // Ride the current: one forced extra step, two
                    // cells covered, no budget spent.
                    if let Some(carried) = self.grid.step(next, cr, cc) {
                        if self.grid.get(carried) != Some('#') {
                            out.push(((carried, budget), 2 * STEP));
                        }
                    }
                }
            }
        }
    }

    fn is_goal(&self, &(pos, _): &(Pos, u32)) -> bool {
        pos == self.surface
    }

    fn heuristic(&self, &(pos, _): &(Pos, u32)) -> Cost {
        pos.manhattan(&self.surface) as Cost * STEP
    }

    fn position(&self, &(pos, _): &(Pos, u32)) -> Pos {
        pos
    }
}

/// A solved current route: the path summary plus how much of the
/// budget the swimmer spent resisting.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentRoute {
    pub summary: PathSummary,
    pub resists_used: u32,
}

/// Cheapest route to the surface within the resist budget, or `None`
/// when no budget allocation gets there. A ridden current appears in
/// the path as a single two-cell transition.
pub fn find_current_escape(
    grid: &Grid,
    budget: u32,
) -> Result<Option<CurrentRoute>, InputError> {
    let start = grid.find_one('S')?;
    let surface = grid.find_one('U')?;
    let space = CurrentSpace {
        grid,
        start,
        surface,
        budget,
    };
    // Every reachable state is visitable at most once along a path, and
    // no transition costs more than two steps.
    let state_count = grid.rows() as u64 * grid.cols() as u64 * (budget as u64 + 1);
    let max_bound = (state_count * 2 * STEP as u64).min(Cost::MAX as u64) as Cost;

    Ok(ida_star(&space, max_bound).map(|(cost, states)| {
        let path = states.iter().map(|&(pos, _)| pos).collect();
        let final_budget = states.last().map_or(budget, |&(_, b)| b);
        CurrentRoute {
            summary: PathSummary { cost, path },
            resists_used: budget - final_budget,
        }
    }))
}
