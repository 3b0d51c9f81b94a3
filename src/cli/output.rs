//! Report formatting for CLI output

use std::fmt::Write;

use crate::simulation::{RemainingHistogram, SearchResult, SimulationStats};

/// Text report for a simulation batch
pub fn format_simulation_report(stats: &SimulationStats) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = writeln!(
        out,
        "--- Strategy: {} ({} games) ---",
        stats.strategy, stats.games
    );
    let _ = writeln!(out, "Avg Empty Cells Left: {:.2}", stats.average_empty);
    let _ = writeln!(out, "Best Game (Min Empty): {}", stats.min_empty);
    let _ = writeln!(
        out,
        "Wins (Strict 0 left): {} ({:.2}%)",
        stats.strict_wins, stats.strict_win_pct
    );
    let _ = writeln!(
        out,
        "Wins (Relaxed <=3 left): {} ({:.2}%)",
        stats.relaxed_wins, stats.relaxed_win_pct
    );
    out
}

/// Text report for a successful perfect-game search, 1-based coordinates
pub fn format_search_report(result: &SearchResult) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "FOUND PERFECT GAME after {} attempts!",
        result.attempts
    );
    let _ = writeln!(out, "Winning sequence (1-based coordinates):");
    for record in &result.history {
        let (col, row) = record.placement.one_based();
        let _ = writeln!(
            out,
            "Turn {}: Place at ({col}, {row}) [Col {col}, Row {row}] -> Wind {} (Filled {} cells, {} left)",
            record.turn, record.direction, record.filled, record.remaining
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", result.final_state);
    out
}

/// Histogram of empty cells left, one bar per non-empty bucket
pub fn format_histogram(histogram: &RemainingHistogram) -> String {
    const WIDTH: u64 = 40;

    let mut out = String::new();
    let peak = histogram.counts.iter().copied().max().unwrap_or(0).max(1);
    let _ = writeln!(out, "Empty cells left  Games");
    for (empty, count) in histogram.buckets() {
        let bar = "#".repeat((count * WIDTH).div_ceil(peak) as usize);
        let _ = writeln!(out, "{empty:>16}  {:>9} {bar}", format_number(count));
    }
    out
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Format a number with thousands separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}
