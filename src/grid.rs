use crate::loader::InputError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: usize,
    pub c: usize,
}

impl Pos {
    pub fn manhattan(&self, other: &Pos) -> usize {
        self.r.abs_diff(other.r) + self.c.abs_diff(other.c)
    }

    pub fn chebyshev(&self, other: &Pos) -> usize {
        self.r.abs_diff(other.r).max(self.c.abs_diff(other.c))
    }
}

/// 4-directional movement deltas (up, down, left, right).
pub const DIR4: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// 8-directional movement deltas, including diagonals.
pub const DIR8: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Immutable rectangular character grid. Row lengths are validated at
/// construction time and never change afterwards.
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<char>>,
}

impl Grid {
    /// Builds a grid from pre-split rows, enforcing the rectangularity
    /// invariant.
    pub fn from_rows(cells: Vec<Vec<char>>) -> Result<Self, InputError> {
        if cells.is_empty() || cells[0].is_empty() {
            return Err(InputError::EmptyGrid);
        }
        let cols = cells[0].len();
        for (r, row) in cells.iter().enumerate() {
            if row.len() != cols {
                return Err(InputError::RaggedGrid {
                    row: r,
                    expected: cols,
                    found: row.len(),
                });
            }
        }
        Ok(Grid {
            rows: cells.len(),
            cols,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Bounds-checked cell lookup; `None` for out-of-range coordinates.
    pub fn get(&self, pos: Pos) -> Option<char> {
        self.cells.get(pos.r).and_then(|row| row.get(pos.c)).copied()
    }

    /// Applies a signed movement delta to `pos`, returning the landing
    /// position if it stays on the grid.
    pub fn step(&self, pos: Pos, dr: i32, dc: i32) -> Option<Pos> {
        let nr = pos.r as i32 + dr;
        let nc = pos.c as i32 + dc;
        if nr >= 0 && nr < self.rows as i32 && nc >= 0 && nc < self.cols as i32 {
            Some(Pos {
                r: nr as usize,
                c: nc as usize,
            })
        } else {
            None
        }
    }

    /// All positions holding `ch`, in row-major order.
    pub fn find_all(&self, ch: char) -> Vec<Pos> {
        let mut positions = Vec::new();
        for (r, row) in self.cells.iter().enumerate() {
            for (c, &cell) in row.iter().enumerate() {
                if cell == ch {
                    positions.push(Pos { r, c });
                }
            }
        }
        positions
    }

    /// The unique marker `ch`; a missing marker is a hard precondition
    /// failure, extras are ignored in favor of the first.
    pub fn find_one(&self, ch: char) -> Result<Pos, InputError> {
        self.find_all(ch)
            .into_iter()
            .next()
            .ok_or(InputError::MissingMarker(ch))
    }

    /// Renders the grid with `*` overlaid on intermediate path cells.
    /// The first and last cells keep their own markers.
    pub fn render_path(&self, path: &[Pos]) -> String {
        let mut canvas = self.cells.clone();
        for (i, pos) in path.iter().enumerate() {
            if i == 0 || i + 1 == path.len() {
                continue;
            }
            canvas[pos.r][pos.c] = '*';
        }
        let mut out = String::with_capacity(self.rows * (self.cols + 1));
        for row in &canvas {
            out.extend(row.iter());
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(lines: &[&str]) -> Grid {
        Grid::from_rows(lines.iter().map(|l| l.chars().collect()).collect()).unwrap()
    }

    #[test]
    fn lookup_is_bounds_checked() {
        let g = grid(&["S.#", "..E"]);
        assert_eq!(g.get(Pos { r: 0, c: 2 }), Some('#'));
        assert_eq!(g.get(Pos { r: 2, c: 0 }), None);
        assert_eq!(g.get(Pos { r: 0, c: 3 }), None);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let rows = vec![vec!['.', '.'], vec!['.']];
        assert!(matches!(
            Grid::from_rows(rows),
            Err(InputError::RaggedGrid {
                row: 1,
                expected: 2,
                found: 1,
            })
        ));
    }

    #[test]
    fn find_all_is_row_major() {
        let g = grid(&["E.E", ".E."]);
        assert_eq!(
            g.find_all('E'),
            vec![
                Pos { r: 0, c: 0 },
                Pos { r: 0, c: 2 },
                Pos { r: 1, c: 1 }
            ]
        );
    }

    #[test]
    fn missing_marker_is_an_error() {
        let g = grid(&["..", ".."]);
        assert!(matches!(g.find_one('S'), Err(InputError::MissingMarker('S'))));
    }

    #[test]
    fn step_clips_to_bounds() {
        let g = grid(&["..", ".."]);
        let origin = Pos { r: 0, c: 0 };
        assert_eq!(g.step(origin, -1, 0), None);
        assert_eq!(g.step(origin, 1, 1), Some(Pos { r: 1, c: 1 }));
    }
}
