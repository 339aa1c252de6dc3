use std::fmt::Write;

use crate::comparisons;
use crate::models::{AggregateStats, ComparisonEntry, Extraction, PersonaResult};

/// Assembles the markdown dashboard report from the engine's plain-data
/// outputs. Presentation only; every number here was computed upstream.
pub fn build_report(
    extraction: &Extraction,
    stats: &AggregateStats,
    persona: &PersonaResult,
    entries: &[ComparisonEntry],
) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# TikTok Reality Check");
    let _ = writeln!(output);
    let _ = writeln!(output, "## The Damage");
    let _ = writeln!(output, "- Videos watched: {}", stats.total_events);
    let _ = writeln!(
        output,
        "- Time lost: {:.1} hours ({:.1} days)",
        stats.total_hours(),
        stats.total_days()
    );
    if let Some(peak) = stats.peak_hour {
        let _ = writeln!(
            output,
            "- Peak scrolling hour: {:02}:00-{:02}:59 ({} videos)",
            peak,
            peak,
            stats.hour_histogram[peak as usize]
        );
    }
    if extraction.skipped > 0 {
        let _ = writeln!(
            output,
            "- Skipped {} unreadable record(s) from the export",
            extraction.skipped
        );
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Your Persona: {}", persona.title);
    let _ = writeln!(output, "{}", persona.description);

    let _ = writeln!(output);
    let _ = writeln!(output, "## In That Time You Could Have...");
    for entry in entries {
        let _ = writeln!(
            output,
            "- {}: {} {}",
            entry.name,
            comparisons::format_quantity(entry.quantity),
            entry.unit
        );
    }

    output
}
