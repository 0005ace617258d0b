//! Job board lookup for hosted job-posting pages.
//!
//! Turns a posting URL into a job id, asks the job board's GraphQL API
//! for that posting, and reshapes the answer into a [`JobRecord`].
//!
//! ```rust,ignore
//! use fetcher::{JobBoardClient, JobSource, UpstreamConfig, extract_identifier};
//!
//! let client = JobBoardClient::new(UpstreamConfig::default())?;
//! let id = extract_identifier("https://jobs.ashbyhq.com/cohere/abc123")?;
//! if let Some(job) = client.fetch_job_data(&id).await? {
//!     println!("{}", job.title.as_deref().unwrap_or("(untitled)"));
//! }
//! ```

pub mod error;
pub mod extract;
pub mod upstream;

pub use error::{ExtractionError, FetchError, Result};
pub use extract::extract_identifier;
pub use upstream::{JobBoardClient, UpstreamConfig, parse_job_posting};

use async_trait::async_trait;
use common::{JobIdentifier, JobRecord};

/// Anything that can look up a job posting by id.
#[async_trait]
pub trait JobSource: Send + Sync {
    /// One lookup, no retries. `Ok(None)` means the posting does not exist.
    async fn fetch_job_data(&self, id: &JobIdentifier) -> Result<Option<JobRecord>>;
}
