//! GraphQL client for the hosted job board.

use async_trait::async_trait;
use common::{JobIdentifier, JobRecord};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

use crate::JobSource;
use crate::error::{FetchError, Result};

pub const DEFAULT_ENDPOINT: &str = "https://jobs.ashbyhq.com/api/non-user-graphql?op=ApiJobPosting";

pub const OPERATION_NAME: &str = "ApiJobPosting";

/// Organization whose hosted jobs page is queried.
pub const DEFAULT_TENANT: &str = "cohere";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const JOB_POSTING_QUERY: &str = r#"query ApiJobPosting($organizationHostedJobsPageName: String!, $jobPostingId: String!) {
  jobPosting(
    organizationHostedJobsPageName: $organizationHostedJobsPageName
    jobPostingId: $jobPostingId
  ) {
    title
    locationName
    workplaceType
    employmentType
    descriptionHtml
    __typename
  }
}"#;

/// Where and how to reach the job board. Built once at startup.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub endpoint: String,
    pub tenant: String,
    pub timeout: Duration,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            tenant: DEFAULT_TENANT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GraphQlRequest<'a> {
    operation_name: &'a str,
    variables: JobPostingVariables<'a>,
    query: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JobPostingVariables<'a> {
    organization_hosted_jobs_page_name: &'a str,
    job_posting_id: &'a str,
}

impl<'a> GraphQlRequest<'a> {
    fn job_posting(tenant: &'a str, job_posting_id: &'a str) -> Self {
        Self {
            operation_name: OPERATION_NAME,
            variables: JobPostingVariables {
                organization_hosted_jobs_page_name: tenant,
                job_posting_id,
            },
            query: JOB_POSTING_QUERY,
        }
    }
}

/// Validates a job board response body and projects the posting.
///
/// `Ok(None)` means the board answered but has no such posting, whether
/// `data.jobPosting` is null or absent. A body that is not JSON, or has no
/// `data` object, is malformed.
/// Fields other than the five in [`JobRecord`] are dropped.
pub fn parse_job_posting(body: &str) -> Result<Option<JobRecord>> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| FetchError::MalformedResponse(format!("invalid JSON: {}", e)))?;

    if let Some(errors) = value.get("errors") {
        tracing::warn!(%errors, "Job board returned GraphQL errors");
    }

    let data = value
        .get("data")
        .and_then(Value::as_object)
        .ok_or_else(|| FetchError::MalformedResponse("missing data object".to_string()))?;

    match data.get("jobPosting") {
        None | Some(Value::Null) => Ok(None),
        Some(posting @ Value::Object(_)) => JobRecord::deserialize(posting)
            .map(Some)
            .map_err(|e| FetchError::MalformedResponse(format!("unexpected jobPosting fields: {}", e))),
        Some(other) => Err(FetchError::MalformedResponse(format!(
            "jobPosting is not an object: {}",
            other
        ))),
    }
}

pub struct JobBoardClient {
    client: reqwest::Client,
    config: UpstreamConfig,
}

impl JobBoardClient {
    pub fn new(config: UpstreamConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &UpstreamConfig {
        &self.config
    }
}

#[async_trait]
impl JobSource for JobBoardClient {
    async fn fetch_job_data(&self, id: &JobIdentifier) -> Result<Option<JobRecord>> {
        let payload = GraphQlRequest::job_posting(&self.config.tenant, id.as_str());

        tracing::debug!(job_id = %id, endpoint = %self.config.endpoint, "Querying job board");

        let resp = self
            .client
            .post(&self.config.endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(job_id = %id, error = %e, "Job board request got no response");
                FetchError::Transport(e)
            })?;

        let status = resp.status();
        if !status.is_success() {
            let headers = format!("{:?}", resp.headers());
            let body = resp.text().await.unwrap_or_else(|e| {
                tracing::warn!(job_id = %id, error = %e, "Error status body could not be read");
                String::new()
            });
            tracing::error!(
                job_id = %id,
                status = status.as_u16(),
                %headers,
                %body,
                "Job board returned an error status"
            );
            return Err(FetchError::Status {
                status: status.as_u16(),
                headers,
                body,
            });
        }

        let body = resp.text().await.map_err(|e| {
            tracing::error!(job_id = %id, error = %e, "Failed to read job board response body");
            FetchError::Transport(e)
        })?;

        let record = parse_job_posting(&body).inspect_err(|e| {
            tracing::error!(job_id = %id, error = %e, %body, "Unexpected job board response");
        })?;

        match &record {
            Some(job) => {
                tracing::info!(job_id = %id, title = job.title.as_deref().unwrap_or(""), "Fetched job posting");
                tracing::debug!(
                    "{}",
                    serde_json::to_string_pretty(job).unwrap_or_default()
                );
            }
            None => tracing::info!(job_id = %id, "Job posting not found"),
        }

        Ok(record)
    }
}
