use std::process::exit;

use clap::Parser;

use gridroute::config::Config;
use gridroute::grid::Grid;
use gridroute::loader::{self, InputError};
use gridroute::report::RouteReport;
use gridroute::search::PathSummary;
use gridroute::variants;

struct Solved {
    grid: Grid,
    summary: Option<PathSummary>,
    note: Option<String>,
}

fn solve(config: &Config, text: &str) -> Result<Solved, InputError> {
    match config.variant.as_str() {
        "escape" => {
            let grid = loader::parse_grid(text)?;
            let summary = variants::find_escape_path(&grid)?;
            Ok(Solved {
                grid,
                summary,
                note: None,
            })
        }
        "cleaning" => {
            let grid = loader::parse_grid(text)?;
            let summary = variants::find_cleaning_route(&grid)?;
            Ok(Solved {
                grid,
                summary,
                note: None,
            })
        }
        "guarded" => {
            let (grid, guards) = loader::parse_grid_and_guards(text)?;
            let summary = variants::find_guarded_path(&grid, &guards)?;
            Ok(Solved {
                grid,
                summary,
                note: None,
            })
        }
        "rescue" => {
            let grid = loader::parse_grid(text)?;
            let summary = variants::find_rescue_path(&grid)?;
            Ok(Solved {
                grid,
                summary,
                note: None,
            })
        }
        "current" => {
            let (grid, budget) = loader::parse_grid_and_budget(text)?;
            let route = variants::find_current_escape(&grid, budget)?;
            let (summary, note) = match route {
                Some(route) => (
                    Some(route.summary),
                    Some(format!(
                        "Budget: {} of {} resists used",
                        route.resists_used, budget
                    )),
                ),
                None => (None, None),
            };
            Ok(Solved {
                grid,
                summary,
                note,
            })
        }
        "chip" => {
            let grid = loader::parse_grid(text)?;
            let summary = variants::find_chip_route(&grid)?;
            Ok(Solved {
                grid,
                summary,
                note: None,
            })
        }
        "shelter" => {
            let grid = loader::parse_grid(text)?;
            let summary = variants::find_nearest_shelter(&grid)?;
            Ok(Solved {
                grid,
                summary,
                note: None,
            })
        }
        "crossing" => {
            let grid = loader::parse_grid(text)?;
            let summary = variants::find_crossing_path(&grid)?;
            Ok(Solved {
                grid,
                summary,
                note: None,
            })
        }
        other => {
            eprintln!(
                "Unknown variant '{}'. Expected one of: escape, cleaning, guarded, \
                 rescue, current, chip, shelter, crossing",
                other
            );
            exit(2);
        }
    }
}

fn main() {
    env_logger::init();
    let config = Config::parse();

    let text = match std::fs::read_to_string(&config.input) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Failed to read {}: {}", config.input.display(), e);
            exit(1);
        }
    };

    if !config.quiet {
        println!("Solving '{}' from {}", config.variant, config.input.display());
        println!();
    }

    let solved = match solve(&config, &text) {
        Ok(solved) => solved,
        Err(e) => {
            eprintln!("Malformed input: {}", e);
            exit(1);
        }
    };

    let report = RouteReport {
        variant: &config.variant,
        outcome: solved.summary.as_ref(),
        note: solved.note,
    };
    print!("{}", report);

    if config.show_grid {
        if let Some(summary) = &solved.summary {
            println!();
            print!("{}", solved.grid.render_path(&summary.path));
        }
    }
}
