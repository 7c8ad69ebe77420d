//! Shortest/cheapest-route solving over 2-D character grids.
//!
//! Eight routing problems (escape routing around hazard zones, a
//! multi-objective cleaning route, time-expanded routing around
//! patrolling guards, altitude-aware rescue, budgeted routing against
//! water currents, chip floorplan routing, nearest-shelter routing and
//! a stepping-stone river crossing) share one generic state-space
//! search core. Each variant binds its own state shape, successor
//! rule, cost table and heuristic to the [`search::SearchSpace`]
//! interface; the algorithms in [`search`] (BFS, Dijkstra, A*, IDA*)
//! are written once against that interface.

pub mod config;
pub mod grid;
pub mod hazard;
pub mod loader;
pub mod patrol;
pub mod report;
pub mod search;
pub mod variants;

pub use grid::{Grid, Pos};
pub use loader::InputError;
pub use search::{Cost, PathSummary};
