use crate::grid::{Grid, Pos, DIR8};
use crate::loader::InputError;
use crate::search::dijkstra::dijkstra;
use crate::search::{Cost, PathSummary, SearchSpace, STEP};

// Destination-cell traversal costs, in half-point units.
fn cell_cost(ch: char) -> Option<Cost> {
    match ch {
        '.' => Some(STEP),
        '*' => Some(3 * STEP),
        '~' => Some(STEP / 2),
        'S' | 'C' | 'D' => Some(STEP),
        _ => None,
    }
}

/// Weighted multi-objective routing: cheapest 8-directional route from
/// `S` to the charger `C` that passes through at least one dirty zone
/// `D` first. The visited-dirty flag is part of the state, so the
/// closed set distinguishes "at the charger" from "at the charger,
/// having cleaned".
struct CleaningSpace<'g> {
    grid: &'g Grid,
    start: Pos,
}

impl SearchSpace for CleaningSpace<'_> {
    type State = (Pos, bool);

    fn start_states(&self) -> Vec<(Pos, bool)> {
        vec![(self.start, false)]
    }

    fn successors(&self, &(pos, cleaned): &(Pos, bool), out: &mut Vec<((Pos, bool), Cost)>) {
        for (dr, dc) in DIR8 {
            if let Some(next) = self.grid.step(pos, dr, dc) {
                let ch = match self.grid.get(next) {
                    Some(ch) => ch,
                    None => continue,
                };
                if let Some(cost) = cell_cost(ch) {
                    out.push(((next, cleaned || ch == 'D'), cost));
                }
            }
        }
    }

    fn is_goal(&self, &(pos, cleaned): &(Pos, bool)) -> bool {
        cleaned && self.grid.get(pos) == Some('C')
    }

    fn position(&self, &(pos, _): &(Pos, bool)) -> Pos {
        pos
    }
}

/// Minimum-cost cleaning route, or `None` when no dirty zone and
/// charger are jointly reachable. Requires `S` and `C` markers.
pub fn find_cleaning_route(grid: &Grid) -> Result<Option<PathSummary>, InputError> {
    let start = grid.find_one('S')?;
    grid.find_one('C')?;
    Ok(dijkstra(&CleaningSpace { grid, start }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::parse_grid;

    #[test]
    fn charger_without_cleaning_does_not_finish() {
        // The only dirty zone sits behind the charger; the route must
        // overshoot and come back.
        let grid = parse_grid("S.C.D\n").unwrap();
        let summary = find_cleaning_route(&grid).unwrap().unwrap();
        // Out to D (4 steps) and back to C (2 steps), one point each.
        assert_eq!(summary.cost, 6 * STEP);
        assert_eq!(summary.path.last(), Some(&Pos { r: 0, c: 2 }));
        assert!(summary.path.contains(&Pos { r: 0, c: 4 }));
    }

    #[test]
    fn slow_and_slippery_cells_change_the_winner() {
        // Top row crosses carpet (3 points per cell), bottom row is
        // slippery (half a point per cell): the detour wins.
        let grid = parse_grid("S*D*C\n.~.~.\n").unwrap();
        let summary = find_cleaning_route(&grid).unwrap().unwrap();
        // Diagonals make the slippery row reachable without carpet:
        // S -> (1,1)~ 0.5 -> D 1 -> (1,3)~ 0.5 -> C 1 = 3 points.
        assert_eq!(summary.cost, 3 * STEP);
    }

    #[test]
    fn no_dirty_zone_means_unreachable() {
        let grid = parse_grid("S..C\n").unwrap();
        assert_eq!(find_cleaning_route(&grid).unwrap(), None);
    }

    #[test]
    fn missing_charger_is_fatal() {
        let grid = parse_grid("S..D\n").unwrap();
        assert!(matches!(
            find_cleaning_route(&grid),
            Err(InputError::MissingMarker('C'))
        ));
    }
}
