//! Human-readable model listing.

use linmod_expr::format_number;

use crate::model::Model;
use crate::types::{Bounds, VariableKind};

const PREVIEW_CONSTRAINTS: usize = 20;

/// Formatting controls for pretty-print output.
#[derive(Debug, Clone, Copy)]
pub struct PrettyPrintOptions {
    /// Maximum number of constraints to render.
    pub constraints: Option<usize>,
}

impl PrettyPrintOptions {
    /// Preview mode used by terse displays.
    pub fn preview() -> Self {
        Self {
            constraints: Some(PREVIEW_CONSTRAINTS),
        }
    }

    /// Full mode with no truncation.
    pub fn full() -> Self {
        Self { constraints: None }
    }
}

impl Model {
    /// Render the model as an LP-like listing.
    pub fn format_ascii(&self, options: PrettyPrintOptions) -> String {
        let mut lines = Vec::new();
        if let Some(name) = self.name() {
            lines.push(format!("model {name}"));
        }
        match self.objective() {
            Some(objective) => lines.push(objective.to_string()),
            None => lines.push("objective: (not set)".to_string()),
        }

        lines.push("subject to".to_string());
        let total = self.num_constraints();
        let limit = options.constraints.unwrap_or(total).min(total);
        if total == 0 {
            lines.push(" (none)".to_string());
        }
        for (_, constraint) in self.constraints().take(limit) {
            lines.push(format!(" {constraint}"));
        }
        if limit < total {
            lines.push(format!(" ... ({} more constraints)", total - limit));
        }

        let mut bounds_lines = Vec::new();
        let mut integers = Vec::new();
        let mut binaries = Vec::new();
        for (_, def) in self.variables() {
            let name = def.variable.name();
            match def.kind {
                VariableKind::Binary => {
                    binaries.push(name.to_string());
                    continue;
                }
                VariableKind::Integer => integers.push(name.to_string()),
                VariableKind::Continuous => {}
            }
            bounds_lines.push(format_bounds_line(name, def.bounds));
        }

        if !bounds_lines.is_empty() {
            lines.push("bounds".to_string());
            lines.extend(bounds_lines.into_iter().map(|line| format!(" {line}")));
        }
        if !integers.is_empty() {
            lines.push("integers".to_string());
            lines.push(format!(" {}", integers.join(" ")));
        }
        if !binaries.is_empty() {
            lines.push("binaries".to_string());
            lines.push(format!(" {}", binaries.join(" ")));
        }

        lines.join("\n")
    }
}

fn format_bounds_line(name: &str, bounds: Bounds) -> String {
    match (bounds.lower, bounds.upper) {
        (Some(l), Some(u)) if l == u => format!("{name} = {}", format_number(l)),
        (Some(l), Some(u)) => format!("{} <= {name} <= {}", format_number(l), format_number(u)),
        (Some(l), None) => format!("{name} >= {}", format_number(l)),
        (None, Some(u)) => format!("{name} <= {}", format_number(u)),
        (None, None) => format!("{name} free"),
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_ascii(PrettyPrintOptions::full()))
    }
}
