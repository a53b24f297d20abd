//! Progress reporting and result rendering
//!
//! Provides a live spinner using indicatif while a lookup walks the tree,
//! a header and summary on stderr, and the text or JSON rendering of
//! results for stdout.

use crate::config::OutputFormat;
use crate::error::Result;
use crate::search::{LookupResult, NOT_FOUND_MESSAGE};
use crate::walker::{WalkProgress, WalkStats};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt::Write as _;
use std::time::Duration;

/// Progress reporter that displays walk status
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();

        if let Ok(spinner) = ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}") {
            bar.set_style(spinner.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "));
        }

        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar }
    }

    /// Update the progress display
    pub fn update(&self, progress: &WalkProgress) {
        let msg = format!(
            "Dirs: {} | Files: {} | Matches: {} | Rate: {:.0}/s{}",
            format_number(progress.dirs),
            format_number(progress.files),
            format_number(progress.matches),
            progress.entries_per_second(),
            if progress.errors > 0 {
                format!(" | Skipped: {}", format_number(progress.errors))
            } else {
                String::new()
            },
        );

        self.bar.set_message(msg);
    }

    /// Set a status message
    pub fn set_status(&self, status: &str) {
        self.bar.set_message(status.to_string());
    }

    /// Finish and clear the progress display
    pub fn finish_and_clear(&self) {
        self.bar.finish_and_clear();
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a number with thousands separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let bytes: Vec<_> = s.bytes().rev().collect();

    let chunks: Vec<String> = bytes
        .chunks(3)
        .map(|chunk| chunk.iter().rev().map(|&b| b as char).collect::<String>())
        .collect();

    chunks.into_iter().rev().collect::<Vec<_>>().join(",")
}

/// Print a header at the start of the lookup
pub fn print_header(root: &str, query: &str) {
    eprintln!();
    eprintln!(
        "{} {}",
        style("file-lookup").cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    eprintln!("{}", style("─".repeat(50)).dim());
    eprintln!("  {} {}", style("Root:").bold(), root);
    eprintln!("  {} {}", style("Query:").bold(), query);
    eprintln!();
}

/// Print a summary of the lookup
pub fn print_summary(stats: &WalkStats, found: usize) {
    let duration_secs = stats.duration.as_secs_f64();
    let rate = if duration_secs > 0.0 {
        stats.entries() as f64 / duration_secs
    } else {
        0.0
    };

    eprintln!();
    eprintln!("{}", style("Lookup Complete").green().bold());
    eprintln!("{}", style("─".repeat(50)).dim());
    eprintln!("  {} {}", style("Directories:").bold(), format_number(stats.dirs));
    eprintln!("  {} {}", style("Files:").bold(), format_number(stats.files));
    eprintln!("  {} {}", style("Matches:").bold(), format_number(found as u64));
    eprintln!(
        "  {} {:.1}s ({:.0} entries/sec)",
        style("Duration:").bold(),
        duration_secs,
        rate
    );
    if stats.errors > 0 {
        eprintln!(
            "  {} {}",
            style("Skipped:").yellow().bold(),
            format_number(stats.errors)
        );
    }
    eprintln!();
}

/// Render one lookup result
pub fn render_result(result: &LookupResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Text => Ok(text_block(result)),
    }
}

/// Render a collection result, labelling each item with its query
pub fn render_results(queries: &[String], results: &[LookupResult], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(results)?),
        OutputFormat::Text => {
            let mut out = String::new();
            for (query, result) in queries.iter().zip(results) {
                let _ = writeln!(out, "[{}]", query);
                out.push_str(&text_block(result));
            }
            Ok(out)
        }
    }
}

fn text_block(result: &LookupResult) -> String {
    match result.matches() {
        Some(matches) => matches
            .iter()
            .fold(String::new(), |mut out, (name, descriptor)| {
                let _ = writeln!(out, "{}\t{}", name, descriptor);
                out
            }),
        None => format!("{}\n", NOT_FOUND_MESSAGE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walker::{Descriptor, EntryKind};
    use std::collections::BTreeMap;

    fn found() -> LookupResult {
        let mut matches = BTreeMap::new();
        matches.insert(
            "song.mp3".to_string(),
            Descriptor::new("/home/a/song.mp3", EntryKind::File),
        );
        LookupResult::Found(matches)
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_render_text() {
        let text = render_result(&found(), OutputFormat::Text).unwrap();
        assert_eq!(text, "song.mp3\t/home/a/song.mp3 :File\n");

        let text = render_result(&LookupResult::NotFound, OutputFormat::Text).unwrap();
        assert_eq!(text, format!("{}\n", NOT_FOUND_MESSAGE));
    }

    #[test]
    fn test_render_collection_json() {
        let queries = vec![".mp3".to_string(), ".wav".to_string()];
        let results = vec![found(), LookupResult::NotFound];
        let json = render_results(&queries, &results, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                { "song.mp3": "/home/a/song.mp3 :File" },
                { "message": NOT_FOUND_MESSAGE }
            ])
        );
    }

    #[test]
    fn test_render_collection_text() {
        let queries = vec![".mp3".to_string(), ".wav".to_string()];
        let results = vec![found(), LookupResult::NotFound];
        let text = render_results(&queries, &results, OutputFormat::Text).unwrap();
        assert_eq!(
            text,
            format!(
                "[.mp3]\nsong.mp3\t/home/a/song.mp3 :File\n[.wav]\n{}\n",
                NOT_FOUND_MESSAGE
            )
        );
    }
}
