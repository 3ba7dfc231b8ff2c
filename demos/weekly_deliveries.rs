//! The README's delivery-roster puzzle: five runs pairing couriers (A),
//! vans (B), loads (C), and departure slots (D).

use logicgrid::{
    constraints::{
        either_or::EitherOr, equality::Equality, inequality::Inequality,
        rank_exact_diff::RankExactDiff, rank_greater::RankGreater,
    },
    render_stats_table, Puzzle, SolvedGrid, SolverEngine,
};
use prettytable::{Cell, Row, Table};

fn build_puzzle() -> Puzzle {
    let mut puzzle = Puzzle::new(5).expect("5 rows is a valid size");
    for tag in ["A", "B", "C", "D"] {
        puzzle.add_category(tag).expect("tags are unique");
    }

    // 1. Courier A1 drives van B2.
    puzzle.add_constraint(Equality::new("A1", "B2"));
    // 2. Van B4 carries load C5.
    puzzle.add_constraint(Equality::new("B4", "C5"));
    // 3. Load C3 leaves in slot D1.
    puzzle.add_constraint(Equality::new("C3", "D1"));
    // 4. Courier A5 hauls load C1.
    puzzle.add_constraint(Equality::new("A5", "C1"));
    // 5. Courier A2 departs exactly one slot before courier A1.
    puzzle.add_constraint(RankExactDiff::new("A2", "A1", "D", -1));
    // 6. Courier A3 departs exactly one slot before courier A2.
    puzzle.add_constraint(RankExactDiff::new("A3", "A2", "D", -1));
    // 7. Load C2 rides a van exactly one size smaller than load C1's van.
    puzzle.add_constraint(RankExactDiff::new("C2", "C1", "B", -1));
    // 8. Load C5 rides a bigger van than load C4.
    puzzle.add_constraint(RankGreater::new("C5", "C4", "B"));
    // 9. Either A4 takes slot D1 and A2 drives van B1, or A4 takes slot D2
    //    and A2 drives van B3.
    puzzle.add_constraint(
        EitherOr::new(vec![
            vec![
                ("A4".to_string(), "D1".to_string()),
                ("A2".to_string(), "B1".to_string()),
            ],
            vec![
                ("A4".to_string(), "D2".to_string()),
                ("A2".to_string(), "B3".to_string()),
            ],
        ])
        .expect("alternatives are non-empty"),
    );
    // 10. Courier A3 does not take slot D2.
    puzzle.add_constraint(Inequality::new("A3", "D2"));

    puzzle
}

fn render_grid(grid: &SolvedGrid) -> String {
    let mut table = Table::new();
    let mut header = vec![Cell::new("Row")];
    if let Some(first) = grid.row(0) {
        header.extend(first.keys().map(|tag| Cell::new(tag)));
    }
    table.add_row(Row::new(header));
    for (index, row) in grid.rows().iter().enumerate() {
        let mut cells = vec![Cell::new(&index.to_string())];
        cells.extend(row.values().map(|name| Cell::new(name)));
        table.add_row(Row::new(cells));
    }
    table.to_string()
}

pub fn main() {
    let _ = tracing_subscriber::fmt::try_init();

    let puzzle = build_puzzle();
    let engine = SolverEngine::default();
    let (solved, stats) = engine.solve(&puzzle).expect("well-formed puzzle");

    match solved {
        Some(solution) => {
            let grid = SolvedGrid::from_puzzle(&solution).expect("solution is complete");
            println!("Solution found!\n{}", render_grid(&grid));
            println!(
                "Visited {} nodes, {} backtracks.\n",
                stats.nodes_visited, stats.backtracks
            );
            println!("{}", render_stats_table(&stats, &puzzle));
        }
        None => println!("No solution found."),
    }
}
