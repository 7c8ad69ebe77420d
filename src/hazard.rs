use rustc_hash::FxHashSet;

use crate::grid::{Grid, Pos};

/// Manhattan radius used by the escape-routing variant.
pub const ESCAPE_RADIUS: usize = 2;

/// Dilates hazard markers into the set of all grid cells within
/// Manhattan distance `radius` of any marker, clipped to the grid.
/// Computed once per solve; the result is never mutated.
pub fn exclusion_zone(grid: &Grid, markers: &[Pos], radius: usize) -> FxHashSet<Pos> {
    let mut excluded = FxHashSet::default();
    let radius = radius as i32;
    for &m in markers {
        for dr in -radius..=radius {
            for dc in -radius..=radius {
                if dr.abs() + dc.abs() <= radius {
                    if let Some(pos) = grid.step(m, dr, dc) {
                        excluded.insert(pos);
                    }
                }
            }
        }
    }
    excluded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::parse_grid;

    #[test]
    fn zone_is_exactly_the_manhattan_ball() {
        let grid = parse_grid(&(".......\n".repeat(7))).unwrap();
        let markers = vec![Pos { r: 3, c: 3 }, Pos { r: 0, c: 6 }];
        let zone = exclusion_zone(&grid, &markers, ESCAPE_RADIUS);

        for r in 0..7 {
            for c in 0..7 {
                let pos = Pos { r, c };
                let near = markers.iter().any(|m| pos.manhattan(m) <= ESCAPE_RADIUS);
                assert_eq!(zone.contains(&pos), near, "mismatch at {:?}", pos);
            }
        }
    }

    #[test]
    fn zone_is_clipped_to_bounds() {
        let grid = parse_grid("...\n...\n...\n").unwrap();
        let zone = exclusion_zone(&grid, &[Pos { r: 0, c: 0 }], ESCAPE_RADIUS);
        // The ball around a corner keeps only its in-bounds quarter.
        assert_eq!(zone.len(), 6);
    }
}
