use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Problem variant: escape, cleaning, guarded, rescue, current,
    /// chip, shelter or crossing
    pub variant: String,

    /// Input file: the grid, plus variant-specific metadata (a GUARDS
    /// section for `guarded`, a leading budget line for `current`)
    pub input: PathBuf,

    /// Render the grid with the found path overlaid
    #[arg(long, default_value_t = false)]
    pub show_grid: bool,

    /// Only print the result line
    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}
