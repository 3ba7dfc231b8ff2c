use prettytable::{Cell, Row, Table};

use crate::solver::{
    engine::{ConstraintId, PerConstraintStats, SearchStats},
    puzzle::Puzzle,
};

/// Renders the per-constraint counters of a finished search as a text table,
/// one row per constraint, cheapest first.
pub fn render_stats_table(stats: &SearchStats, puzzle: &Puzzle) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Constraint"),
        Cell::new("ID"),
        Cell::new("Description"),
        Cell::new("Runs"),
        Cell::new("Prunings"),
        Cell::new("Total Time (ms)"),
    ]));

    let mut sorted_stats: Vec<(&ConstraintId, &PerConstraintStats)> =
        stats.constraint_stats.iter().collect();
    sorted_stats.sort_by_key(|(id, entry)| (entry.time_spent_micros, **id));

    let constraints = puzzle.constraints();
    for (constraint_id, constraint_stats) in sorted_stats {
        let Some(constraint) = constraints.get(*constraint_id) else {
            continue;
        };
        let descriptor = constraint.descriptor();
        table.add_row(Row::new(vec![
            Cell::new(&descriptor.name),
            Cell::new(&constraint_id.to_string()),
            Cell::new(&descriptor.description),
            Cell::new(&constraint_stats.revisions.to_string()),
            Cell::new(&constraint_stats.prunings.to_string()),
            Cell::new(&format!(
                "{:.2}",
                constraint_stats.time_spent_micros as f64 / 1000.0
            )),
        ]));
    }

    table.to_string()
}
