use crate::error::AnalysisError;

/// Bounds for the average-video-duration estimate, matching the range
/// the dashboard slider offers.
pub const MIN_AVG_VIDEO_SECONDS: u32 = 10;
pub const MAX_AVG_VIDEO_SECONDS: u32 = 60;
pub const DEFAULT_AVG_VIDEO_SECONDS: u32 = 15;

/// Knobs the surrounding application may turn. Everything else in the
/// engine is fixed lookup tables.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisConfig {
    /// Selects the harsher persona description variant.
    pub guilt_trip: bool,
    /// Assumed seconds per video; the export records when each video was
    /// opened but not for how long it was watched.
    pub avg_video_seconds: u32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            guilt_trip: false,
            avg_video_seconds: DEFAULT_AVG_VIDEO_SECONDS,
        }
    }
}

impl AnalysisConfig {
    pub fn new(guilt_trip: bool, avg_video_seconds: u32) -> Result<Self, AnalysisError> {
        if !(MIN_AVG_VIDEO_SECONDS..=MAX_AVG_VIDEO_SECONDS).contains(&avg_video_seconds) {
            return Err(AnalysisError::InvalidConfiguration(format!(
                "average video duration must be {MIN_AVG_VIDEO_SECONDS}-{MAX_AVG_VIDEO_SECONDS} seconds, got {avg_video_seconds}"
            )));
        }
        Ok(Self {
            guilt_trip,
            avg_video_seconds,
        })
    }
}
