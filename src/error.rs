use thiserror::Error;

/// Failures the analytics core can surface to its caller.
///
/// Individual bad records inside an otherwise valid export are never an
/// error; the extractor skips and counts them. These variants cover the
/// cases where no useful result exists at all.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The export does not contain the expected
    /// `Activity -> Video Browsing History -> VideoList` structure.
    #[error("malformed export: {0}")]
    MalformedInput(String),

    /// The export parsed, but zero valid watch events were found.
    #[error("no valid watch events in export")]
    EmptyDataset,

    /// A configuration value is outside its documented range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
