use rustc_hash::FxHashSet;

use crate::grid::{Grid, Pos, DIR4};
use crate::hazard::{exclusion_zone, ESCAPE_RADIUS};
use crate::loader::InputError;
use crate::search::bfs::bfs;
use crate::search::{Cost, PathSummary, SearchSpace, STEP};

fn is_wall(ch: char) -> bool {
    matches!(ch, '#' | '|' | '_')
}

/// Uniform-cost escape routing: 4-directional movement from `S` to any
/// `E`, blocked by walls and by every cell within Manhattan distance 2
/// of a hazard marker `x`. Exits inside the exclusion zone cannot be
/// entered and therefore cannot be reached.
struct EscapeSpace<'g> {
    grid: &'g Grid,
    start: Pos,
    excluded: FxHashSet<Pos>,
}

impl SearchSpace for EscapeSpace<'_> {
    type State = Pos;

    fn start_states(&self) -> Vec<Pos> {
        vec![self.start]
    }

    fn successors(&self, state: &Pos, out: &mut Vec<(Pos, Cost)>) {
        for (dr, dc) in DIR4 {
            if let Some(next) = self.grid.step(*state, dr, dc) {
                let ch = match self.grid.get(next) {
                    Some(ch) => ch,
                    None => continue,
                };
                if is_wall(ch) || self.excluded.contains(&next) {
                    continue;
                }
                out.push((next, STEP));
            }
        }
    }

    fn is_goal(&self, state: &Pos) -> bool {
        self.grid.get(*state) == Some('E')
    }

    fn position(&self, state: &Pos) -> Pos {
        *state
    }
}

/// Shortest escape route in steps, or `None` when every exit is cut
/// off. Requires an `S` marker and at least one `E`.
pub fn find_escape_path(grid: &Grid) -> Result<Option<PathSummary>, InputError> {
    let start = grid.find_one('S')?;
    grid.find_one('E')?;
    let hazards = grid.find_all('x');
    let excluded = exclusion_zone(grid, &hazards, ESCAPE_RADIUS);
    Ok(bfs(&EscapeSpace {
        grid,
        start,
        excluded,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::parse_grid;

    #[test]
    fn walks_straight_without_hazards() {
        let grid = parse_grid("S....E\n").unwrap();
        let summary = find_escape_path(&grid).unwrap().unwrap();
        assert_eq!(summary.steps(), 5);
    }

    #[test]
    fn hazard_block_forces_a_detour() {
        // 10x10 open room, exit at (6,5), a 2x2 fire block at rows 3-4
        // cols 3-4. The dilated exclusion zone forces the route well
        // past the straight-line distance of 9.
        let mut rows = vec![vec!['.'; 10]; 10];
        rows[1][1] = 'S';
        rows[6][5] = 'E';
        for (r, c) in [(3, 3), (3, 4), (4, 3), (4, 4)] {
            rows[r][c] = 'x';
        }
        let grid = Grid::from_rows(rows).unwrap();
        let summary = find_escape_path(&grid).unwrap().expect("detour exists");
        assert!(summary.steps() > 9, "got {} steps", summary.steps());

        let hazards = grid.find_all('x');
        for pos in &summary.path {
            for h in &hazards {
                assert!(pos.manhattan(h) > ESCAPE_RADIUS, "path enters the zone");
            }
        }
    }

    #[test]
    fn fully_enclosed_exit_is_unreachable() {
        let grid = parse_grid("S..x..E\n").unwrap();
        assert_eq!(find_escape_path(&grid).unwrap(), None);
    }

    #[test]
    fn all_wall_flavors_block() {
        let grid = parse_grid("S#E\n.|.\n._.\n").unwrap();
        assert_eq!(find_escape_path(&grid).unwrap(), None);
    }

    #[test]
    fn missing_start_is_fatal() {
        let grid = parse_grid("...E\n").unwrap();
        assert!(matches!(
            find_escape_path(&grid),
            Err(InputError::MissingMarker('S'))
        ));
    }

    #[test]
    fn nearest_of_several_exits_wins() {
        let grid = parse_grid("E..S.E\n").unwrap();
        let summary = find_escape_path(&grid).unwrap().unwrap();
        assert_eq!(summary.steps(), 2);
        assert_eq!(summary.path.last(), Some(&Pos { r: 0, c: 5 }));
    }
}
