use chrono::Timelike;

use crate::models::{AggregateStats, WatchEvent};

/// Reduces the event list to summary statistics in one pass.
///
/// The histogram counts events per hour of day, not watch time; the peak
/// hour is the busiest bucket, ties resolved toward the earliest hour so
/// repeated runs over the same export always agree. An empty slice yields
/// all-zero stats with no peak hour rather than panicking, even though the
/// extractor normally reports that case as an empty dataset first.
pub fn aggregate(events: &[WatchEvent]) -> AggregateStats {
    let mut hour_histogram = [0u64; 24];
    let mut total_duration_seconds = 0u64;

    for event in events {
        hour_histogram[event.timestamp.hour() as usize] += 1;
        total_duration_seconds += u64::from(event.duration_seconds);
    }

    AggregateStats {
        total_events: events.len() as u64,
        total_duration_seconds,
        hour_histogram,
        peak_hour: peak_hour(&hour_histogram),
    }
}

fn peak_hour(histogram: &[u64; 24]) -> Option<u8> {
    let max = *histogram.iter().max()?;
    if max == 0 {
        return None;
    }
    histogram.iter().position(|&count| count == max).map(|hour| hour as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn event_at(hour: u32, duration_seconds: u32) -> WatchEvent {
        WatchEvent {
            timestamp: NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_hms_opt(hour, 30, 0)
                .unwrap(),
            duration_seconds,
        }
    }

    #[test]
    fn histogram_sums_to_event_count() {
        let events = vec![event_at(2, 10), event_at(2, 20), event_at(14, 30)];
        let stats = aggregate(&events);
        assert_eq!(stats.total_events, 3);
        assert_eq!(stats.hour_histogram.iter().sum::<u64>(), stats.total_events);
    }

    #[test]
    fn end_to_end_scenario() {
        let events = vec![event_at(2, 10), event_at(2, 20), event_at(14, 30)];
        let stats = aggregate(&events);
        assert_eq!(stats.total_events, 3);
        assert_eq!(stats.total_duration_seconds, 60);
        assert_eq!(stats.hour_histogram[2], 2);
        assert_eq!(stats.hour_histogram[14], 1);
        assert_eq!(stats.peak_hour, Some(2));
    }

    #[test]
    fn peak_hour_ties_resolve_to_lowest_hour() {
        let events = vec![event_at(0, 15), event_at(1, 15), event_at(0, 15), event_at(1, 15)];
        let stats = aggregate(&events);
        assert_eq!(stats.peak_hour, Some(0));
    }

    #[test]
    fn empty_input_yields_neutral_stats() {
        let stats = aggregate(&[]);
        assert_eq!(stats.total_events, 0);
        assert_eq!(stats.total_duration_seconds, 0);
        assert_eq!(stats.hour_histogram, [0u64; 24]);
        assert_eq!(stats.peak_hour, None);
    }

    #[test]
    fn derived_hours_and_days() {
        let events = vec![event_at(9, 3600), event_at(10, 3600)];
        let stats = aggregate(&events);
        assert!((stats.total_hours() - 2.0).abs() < 1e-9);
        assert!((stats.total_days() - 2.0 / 24.0).abs() < 1e-9);
    }
}
