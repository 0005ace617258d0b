//! Types shared between the job-board fetcher and the HTTP server.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque job-posting token taken from the tail of a posting URL.
///
/// Never interpreted, only passed through to the upstream query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobIdentifier(String);

impl JobIdentifier {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for JobIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalized job posting returned to API callers.
///
/// Upstream fields may be null, so every value is optional and is
/// serialized as `null` rather than dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    pub title: Option<String>,
    pub location_name: Option<String>,
    pub workplace_type: Option<String>,
    pub employment_type: Option<String>,
    /// Raw HTML markup, untouched.
    pub description_html: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_identifier_displays_raw_token() {
        let id = JobIdentifier::new("abc-123?ref=x");
        assert_eq!(id.to_string(), "abc-123?ref=x");
        assert_eq!(id.as_str(), "abc-123?ref=x");
        assert_eq!(id.into_inner(), "abc-123?ref=x");
    }

    #[test]
    fn test_job_record_uses_camel_case_keys() {
        let record = JobRecord {
            title: Some("Software Engineer".to_string()),
            location_name: None,
            workplace_type: Some("Remote".to_string()),
            employment_type: Some("FullTime".to_string()),
            description_html: Some("<p>Hi</p>".to_string()),
        };

        let value = serde_json::to_value(&record).unwrap();
        let obj = value.as_object().unwrap();

        assert_eq!(obj.len(), 5);
        assert_eq!(obj["title"], "Software Engineer");
        assert!(obj["locationName"].is_null());
        assert_eq!(obj["workplaceType"], "Remote");
        assert_eq!(obj["employmentType"], "FullTime");
        assert_eq!(obj["descriptionHtml"], "<p>Hi</p>");
    }
}
