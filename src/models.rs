use chrono::NaiveDateTime;
use serde::Serialize;

/// One watched video from the export: when it was opened and how long
/// it is assumed to have held the screen.
#[derive(Debug, Clone)]
pub struct WatchEvent {
    pub timestamp: NaiveDateTime,
    pub duration_seconds: u32,
}

/// Result of walking the export: the valid events plus how many records
/// had to be skipped, kept for user-facing diagnostics.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub events: Vec<WatchEvent>,
    pub skipped: usize,
}

/// Summary statistics over one export, computed in a single pass.
///
/// Invariant: `hour_histogram` sums to `total_events`, and `peak_hour`
/// is `None` exactly when `total_events` is zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateStats {
    pub total_events: u64,
    pub total_duration_seconds: u64,
    pub hour_histogram: [u64; 24],
    pub peak_hour: Option<u8>,
}

impl AggregateStats {
    pub fn total_hours(&self) -> f64 {
        self.total_duration_seconds as f64 / 3600.0
    }

    pub fn total_days(&self) -> f64 {
        self.total_hours() / 24.0
    }
}

/// The four behavioural labels derived from the peak scrolling hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Persona {
    NightOwl,
    EarlyBird,
    LunchtimeScroller,
    EveningBinger,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonaResult {
    pub label: Persona,
    pub title: &'static str,
    pub description: &'static str,
}

/// One entry from the comparison catalog, with the quantity already
/// computed for a given total watch duration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonEntry {
    pub name: &'static str,
    pub quantity: f64,
    pub unit: &'static str,
}
