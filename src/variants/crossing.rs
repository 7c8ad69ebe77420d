use crate::grid::{Grid, Pos, DIR8};
use crate::loader::InputError;
use crate::search::bfs::bfs;
use crate::search::{Cost, PathSummary, SearchSpace, STEP};

/// Stepping-stone crossing: fewest 8-directional steps from any west
/// bank cell `S` to any east bank cell `E`. Stable stones `.` can be
/// revisited freely; an unstable stone `s` collapses after one visit,
/// tracked as a bitmask of consumed stone indices in the state. Deep
/// water `~` and boulders `#` are impassable.
struct CrossingSpace<'g> {
    grid: &'g Grid,
    starts: Vec<Pos>,
    stones: Vec<Pos>,
}

impl CrossingSpace<'_> {
    fn stone_bit(&self, pos: Pos) -> u64 {
        // Stones are few; a linear scan beats a map here.
        let idx = self
            .stones
            .iter()
            .position(|&s| s == pos)
            .unwrap_or_default();
        1u64 << idx
    }
}

impl SearchSpace for CrossingSpace<'_> {
    type State = (Pos, u64);

    fn start_states(&self) -> Vec<(Pos, u64)> {
        self.starts.iter().map(|&s| (s, 0)).collect()
    }

    fn successors(&self, &(pos, consumed): &(Pos, u64), out: &mut Vec<((Pos, u64), Cost)>) {
        for (dr, dc) in DIR8 {
            let next = match self.grid.step(pos, dr, dc) {
                Some(next) => next,
                None => continue,
            };
            match self.grid.get(next) {
                Some('.') | Some('S') | Some('E') => out.push(((next, consumed), STEP)),
                Some('s') => {
                    let bit = self.stone_bit(next);
                    if consumed & bit == 0 {
                        out.push(((next, consumed | bit), STEP));
                    }
                }
                _ => {}
            }
        }
    }

    fn is_goal(&self, &(pos, _): &(Pos, u64)) -> bool {
        self.grid.get(pos) == Some('E')
    }

    fn position(&self, &(pos, _): &(Pos, u64)) -> Pos {
        pos
    }
}

/// Shortest crossing in steps, or `None` when the banks are not
/// connected. Requires at least one `S` and one `E`.
pub fn find_crossing_path(grid: &Grid) -> Result<Option<PathSummary>, InputError> {
    let starts = grid.find_all('S');
    if starts.is_empty() {
        return Err(InputError::MissingMarker('S'));
    }
    grid.find_one('E')?;
    let stones = grid.find_all('s');
    if stones.len() > 64 {
        return Err(InputError::TooManyConsumables(stones.len()));
    }
    Ok(bfs(&CrossingSpace {
        grid,
        starts,
        stones,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::parse_grid;
    use rustc_hash::FxHashMap;

    #[test]
    fn crosses_through_exactly_one_unstable_stone() {
        // Three unstable stones in the channel; one suffices.
        let grid = parse_grid("S~E\nSsE\nS~E\n~s~\ns~~\n").unwrap();
        let summary = find_crossing_path(&grid).unwrap().unwrap();
        assert_eq!(summary.steps(), 2);

        let mut visits: FxHashMap<Pos, usize> = FxHashMap::default();
        for &pos in &summary.path {
            if grid.get(pos) == Some('s') {
                *visits.entry(pos).or_default() += 1;
            }
        }
        assert_eq!(visits.len(), 1);
        assert!(visits.values().all(|&n| n == 1));
    }

    #[test]
    fn consumed_stone_is_not_offered_again() {
        let grid = parse_grid("S.s.E\n").unwrap();
        let starts = grid.find_all('S');
        let stones = grid.find_all('s');
        let space = CrossingSpace {
            grid: &grid,
            starts,
            stones,
        };
        let stone = Pos { r: 0, c: 2 };
        let bit = space.stone_bit(stone);

        // Standing next to the consumed stone: the stone is gone, the
        // stable neighbor is still offered.
        let mut succ = Vec::new();
        space.successors(&(Pos { r: 0, c: 1 }, bit), &mut succ);
        let offered: Vec<Pos> = succ.iter().map(|((p, _), _)| *p).collect();
        assert!(!offered.contains(&stone));
        assert!(offered.contains(&Pos { r: 0, c: 0 }));

        // With a fresh mask the stone is offered and gets consumed.
        succ.clear();
        space.successors(&(Pos { r: 0, c: 1 }, 0), &mut succ);
        assert!(succ
            .iter()
            .any(|&((p, mask), _)| p == stone && mask == bit));
    }

    #[test]
    fn any_start_and_any_exit_pair_counts() {
        let grid = parse_grid("S~~E\nS..E\n").unwrap();
        let summary = find_crossing_path(&grid).unwrap().unwrap();
        assert_eq!(summary.steps(), 3);
        assert_eq!(grid.get(summary.path[0]), Some('S'));
        assert_eq!(grid.get(*summary.path.last().unwrap()), Some('E'));
    }

    #[test]
    fn deep_water_and_boulders_are_impassable() {
        let grid = parse_grid("S~E\n~#~\n").unwrap();
        assert_eq!(find_crossing_path(&grid).unwrap(), None);
    }
}
