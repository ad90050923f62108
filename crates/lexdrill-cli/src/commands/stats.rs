//! The `lexdrill stats` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use lexdrill_store::history::{HistoryLog, PracticeStats};

/// Most recent sessions shown in the table.
const RECENT_LIMIT: usize = 10;

pub fn execute(history_path: PathBuf) -> Result<()> {
    let entries = HistoryLog::new(history_path).load()?;
    if entries.is_empty() {
        println!("No practice history yet.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["When", "Activity", "Score", "Percent"]);
    for entry in entries.iter().rev().take(RECENT_LIMIT) {
        let percent = if entry.total > 0 {
            entry.score as f64 / entry.total as f64 * 100.0
        } else {
            0.0
        };
        table.add_row(vec![
            Cell::new(entry.completed_at.format("%Y-%m-%d %H:%M")),
            Cell::new(entry.activity),
            Cell::new(format!("{}/{}", entry.score, entry.total)),
            Cell::new(format!("{percent:.0}%")),
        ]);
    }
    println!("{table}");

    let stats = PracticeStats::compute(&entries);
    println!(
        "\nSessions: {} | Questions: {} | Accuracy: {:.1}%",
        stats.total_sessions, stats.total_questions, stats.accuracy_percent
    );
    for (activity, count) in &stats.sessions_by_activity {
        println!("  {activity}: {count} session(s)");
    }
    Ok(())
}
