use std::fmt;

use log::info;

use crate::grid::{Grid, Pos};
use crate::patrol::Guard;

/// Malformed-input conditions. These are fatal to the solve call that
/// hit them; an unreachable goal is never reported through this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    EmptyGrid,
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },
    MissingMarker(char),
    BadMetadata(String),
    TooManyConsumables(usize),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::EmptyGrid => write!(f, "grid is empty"),
            InputError::RaggedGrid {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has {} cells, expected {}",
                row, found, expected
            ),
            InputError::MissingMarker(ch) => {
                write!(f, "required marker '{}' not found in grid", ch)
            }
            InputError::BadMetadata(line) => write!(f, "unparseable metadata line: {}", line),
            InputError::TooManyConsumables(n) => {
                write!(f, "too many one-time tiles: {} (limit 64)", n)
            }
        }
    }
}

impl std::error::Error for InputError {}

/// Parses a plain grid: non-blank lines of equal length.
pub fn parse_grid(text: &str) -> Result<Grid, InputError> {
    let rows: Vec<Vec<char>> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.chars().collect())
        .collect();
    let grid = Grid::from_rows(rows)?;
    info!("loaded {}x{} grid", grid.rows(), grid.cols());
    Ok(grid)
}

/// Parses a grid followed by a `GUARDS` section, one patrol per line:
/// `<id> <start_row> <start_col> <comma-separated letters from U,D,L,R>`.
pub fn parse_grid_and_guards(text: &str) -> Result<(Grid, Vec<Guard>), InputError> {
    let mut grid_rows: Vec<Vec<char>> = Vec::new();
    let mut guards = Vec::new();
    let mut in_guards = false;

    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        if line.starts_with("GUARDS") {
            in_guards = true;
            continue;
        }
        if !in_guards {
            grid_rows.push(line.chars().collect());
        } else {
            guards.push(parse_guard_line(line)?);
        }
    }

    let grid = Grid::from_rows(grid_rows)?;
    info!(
        "loaded {}x{} grid with {} guard(s)",
        grid.rows(),
        grid.cols(),
        guards.len()
    );
    Ok((grid, guards))
}

fn parse_guard_line(line: &str) -> Result<Guard, InputError> {
    let bad = || InputError::BadMetadata(line.to_string());
    let mut parts = line.split_whitespace();
    let id = parts.next().ok_or_else(bad)?.to_string();
    let r: usize = parts.next().and_then(|s| s.parse().ok()).ok_or_else(bad)?;
    let c: usize = parts.next().and_then(|s| s.parse().ok()).ok_or_else(bad)?;
    let moves = parts.next().ok_or_else(bad)?;

    let mut patrol = Vec::new();
    for token in moves.split(',') {
        match token.trim() {
            "U" => patrol.push((-1, 0)),
            "D" => patrol.push((1, 0)),
            "L" => patrol.push((0, -1)),
            "R" => patrol.push((0, 1)),
            "" => {}
            _ => return Err(bad()),
        }
    }
    Ok(Guard::new(id, Pos { r, c }, patrol))
}

/// Parses a leading budget line (single non-negative integer) followed
/// by the grid.
pub fn parse_grid_and_budget(text: &str) -> Result<(Grid, u32), InputError> {
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());
    let first = lines.next().ok_or(InputError::EmptyGrid)?;
    let budget: u32 = first
        .trim()
        .parse()
        .map_err(|_| InputError::BadMetadata(first.to_string()))?;
    let rows: Vec<Vec<char>> = lines.map(|line| line.chars().collect()).collect();
    let grid = Grid::from_rows(rows)?;
    info!(
        "loaded {}x{} grid with budget {}",
        grid.rows(),
        grid.cols(),
        budget
    );
    Ok((grid, budget))
}
