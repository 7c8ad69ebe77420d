//! The eight state-space adapters, one per routing problem, each
//! binding a state shape, successor rule, goal test and heuristic to
//! the generic algorithms in [`crate::search`].

pub mod chip;
pub mod cleaning;
pub mod crossing;
pub mod escape;
pub mod guarded;
pub mod rescue;
pub mod shelter;
pub mod undercurrent;

pub use chip::find_chip_route;
pub use cleaning::find_cleaning_route;
pub use crossing::find_crossing_path;
pub use escape::find_escape_path;
pub use guarded::find_guarded_path;
pub use rescue::find_rescue_path;
pub use shelter::find_nearest_shelter;
pub use undercurrent::{find_current_escape, CurrentRoute};
