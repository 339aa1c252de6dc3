use chrono::NaiveDateTime;
use log::warn;
use serde_json::Value;

use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::models::{Extraction, WatchEvent};

/// Timestamp format used by TikTok data exports, e.g. "2024-03-01 22:14:09".
const EXPORT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Pulls the flat list of watch events out of a parsed export.
///
/// The path `Activity -> Video Browsing History -> VideoList` is an
/// external contract; a missing or mistyped level fails the whole import.
/// Individual records that cannot be read are skipped and counted instead,
/// so one corrupt entry does not block an otherwise valid export.
pub fn extract_events(
    export: &Value,
    config: &AnalysisConfig,
) -> Result<Extraction, AnalysisError> {
    let video_list = locate_video_list(export)?;

    let mut events = Vec::with_capacity(video_list.len());
    let mut skipped = 0usize;

    for (index, entry) in video_list.iter().enumerate() {
        match read_event(entry, config.avg_video_seconds) {
            Some(event) => events.push(event),
            None => {
                warn!("skipping malformed record at VideoList[{index}]");
                skipped += 1;
            }
        }
    }

    if events.is_empty() {
        return Err(AnalysisError::EmptyDataset);
    }

    Ok(Extraction { events, skipped })
}

fn locate_video_list(export: &Value) -> Result<&Vec<Value>, AnalysisError> {
    let missing = |key: &str| AnalysisError::MalformedInput(format!("missing key {key:?}"));

    let activity = export.get("Activity").ok_or_else(|| missing("Activity"))?;
    let history = activity
        .get("Video Browsing History")
        .ok_or_else(|| missing("Video Browsing History"))?;
    let video_list = history.get("VideoList").ok_or_else(|| missing("VideoList"))?;

    video_list.as_array().ok_or_else(|| {
        AnalysisError::MalformedInput("\"VideoList\" is not an array".to_string())
    })
}

fn read_event(entry: &Value, avg_video_seconds: u32) -> Option<WatchEvent> {
    let date = entry.get("Date")?.as_str()?;
    let timestamp = NaiveDateTime::parse_from_str(date, EXPORT_DATE_FORMAT).ok()?;

    // The export only records when a video was opened. A numeric
    // "Duration" field is honoured if present; otherwise each event is
    // charged the configured average.
    let duration_seconds = entry
        .get("Duration")
        .and_then(Value::as_u64)
        .and_then(|secs| u32::try_from(secs).ok())
        .unwrap_or(avg_video_seconds);

    Some(WatchEvent {
        timestamp,
        duration_seconds,
    })
}
