use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

/// A reference name the divider got wrong.
#[derive(Debug, Clone)]
pub struct Miss {
    pub expected: String,
    pub predicted: String,
    /// None when the divider rejected the name.
    pub score: Option<f64>,
    pub algorithm: String,
}

pub fn accuracy(total: usize, misses: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (total - misses) as f64 / total as f64
}

pub fn print_accuracy_report(total: usize, misses: &[Miss]) {
    println!("{:.4}", accuracy(total, misses.len()));
    if misses.is_empty() {
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("True").add_attribute(Attribute::Bold),
        Cell::new("Pred").fg(Color::Red),
        Cell::new("Score"),
        Cell::new("Algorithm"),
    ]);

    for miss in misses {
        let score = miss
            .score
            .map_or_else(|| "-".to_string(), |s| format!("{:.4}", s));
        table.add_row(vec![
            Cell::new(&miss.expected).add_attribute(Attribute::Bold),
            Cell::new(&miss.predicted).fg(Color::Red),
            Cell::new(score).set_alignment(CellAlignment::Right),
            Cell::new(&miss.algorithm),
        ]);
    }

    println!("\n❌ {} of {} names missed", misses.len(), total);
    println!("{}", table);
}
