use common::JobIdentifier;
use regex::Regex;
use std::sync::LazyLock;

use crate::error::ExtractionError;

/// Everything after the last `/`, at least one character long.
static TRAILING_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/([^/]+)$").expect("trailing segment pattern is valid"));

/// Pulls the job id out of a posting URL.
///
/// Deliberately loose: no scheme or host checks and no percent-decoding.
/// Query strings and fragments stay attached to the id. Whether the id is
/// real is for the job board to decide.
pub fn extract_identifier(url: &str) -> Result<JobIdentifier, ExtractionError> {
    TRAILING_SEGMENT
        .captures(url)
        .and_then(|cap| cap.get(1))
        .map(|segment| JobIdentifier::new(segment.as_str()))
        .ok_or(ExtractionError::InvalidUrlFormat)
}
