use crate::types::TouchOutcome;
use colored::Colorize;
use comfy_table::{Attribute, Cell, Table};

/// Renders the post-run summary table: one row per touched file with its size
/// and the mtime it had before the run.
pub fn print_summary(outcome: &TouchOutcome) {
    println!("\n{}", "=== Touch Summary ===".cyan());

    if outcome.touched.is_empty() {
        println!("No regular files found.");
    } else {
        let mut table = Table::new();
        table.load_preset(comfy_table::presets::UTF8_HORIZONTAL_ONLY);
        table.set_header(vec![
            Cell::new("File").add_attribute(Attribute::Bold),
            Cell::new("Size").add_attribute(Attribute::Bold),
            Cell::new("Previous mtime").add_attribute(Attribute::Bold),
        ]);

        let mut total_bytes: u64 = 0;
        for record in &outcome.touched {
            total_bytes += record.size;
            table.add_row(vec![
                record.name.clone(),
                human_bytes::human_bytes(record.size as f64),
                record
                    .previous_modified
                    .format("%Y-%m-%d %H:%M:%S")
                    .to_string(),
            ]);
        }

        println!("{table}");
        println!(
            "Touched {} across {} files, new mtime {}.",
            human_bytes::human_bytes(total_bytes as f64).green(),
            outcome.touched.len().to_string().green(),
            outcome.timestamp.format("%Y-%m-%d %H:%M:%S")
        );
    }

    if outcome.skipped_dirs > 0 || outcome.skipped_special > 0 {
        println!(
            "Skipped: {} directories, {} special entries.",
            outcome.skipped_dirs, outcome.skipped_special
        );
    }
}
