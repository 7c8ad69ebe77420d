use std::fmt;

use crate::search::PathSummary;

/// Human-readable solve report for the CLI. The engine itself only
/// produces `(cost, path)` or unreachable; everything here is
/// presentation.
pub struct RouteReport<'a> {
    pub variant: &'a str,
    pub outcome: Option<&'a PathSummary>,
    pub note: Option<String>,
}

impl fmt::Display for RouteReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Variant: {}", self.variant)?;
        match self.outcome {
            None => {
                writeln!(f, "Result: no route (goal unreachable within bounds)")?;
            }
            Some(summary) => {
                writeln!(f, "Result: route found")?;
                writeln!(f, "Total cost: {} points", format_points(summary.points()))?;
                writeln!(f, "Steps: {}", summary.steps())?;
                let cells: Vec<String> = summary
                    .path
                    .iter()
                    .map(|p| format!("({},{})", p.r, p.c))
                    .collect();
                writeln!(f, "Path: {}", cells.join(" -> "))?;
            }
        }
        if let Some(note) = &self.note {
            writeln!(f, "{}", note)?;
        }
        Ok(())
    }
}

fn format_points(points: f64) -> String {
    if points.fract() == 0.0 {
        format!("{}", points as u64)
    } else {
        format!("{:.1}", points)
    }
}
