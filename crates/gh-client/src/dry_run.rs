//! Dry-run GitHub API client (decorator pattern)
//!
//! Wraps any `GitHubClient` implementation so that reads go through to the
//! inner client while writes are only logged.

use crate::client::GitHubClient;
use crate::types::{ChangedFile, NewReviewComment, PullRequest, Repository};
use async_trait::async_trait;
use log::info;

/// Comment ID reported for comments that were never created
pub const DRY_RUN_COMMENT_ID: u64 = 0;

/// Dry-run GitHub API client using the decorator pattern
///
/// Wraps an inner `GitHubClient`. All fetch operations are delegated, while
/// `create_review_comment` logs the comment and returns [`DRY_RUN_COMMENT_ID`]
/// without touching the API.
///
/// # Example
///
/// ```rust,ignore
/// use gh_client::{DryRunClient, OctocrabClient};
///
/// let inner = OctocrabClient::from_token(token, None)?;
/// let client = DryRunClient::new(inner);
/// ```
#[derive(Debug, Clone)]
pub struct DryRunClient<C: GitHubClient> {
    inner: C,
}

impl<C: GitHubClient> DryRunClient<C> {
    /// Create a new dry-run client around `inner`
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    /// Get a reference to the inner client
    pub fn inner(&self) -> &C {
        &self.inner
    }
}

#[async_trait]
impl<C: GitHubClient> GitHubClient for DryRunClient<C> {
    async fn fetch_repository(&self, owner: &str, repo: &str) -> anyhow::Result<Repository> {
        self.inner.fetch_repository(owner, repo).await
    }

    async fn fetch_pull_request(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
    ) -> anyhow::Result<PullRequest> {
        self.inner.fetch_pull_request(owner, repo, pr_number).await
    }

    async fn fetch_pull_request_files(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
    ) -> anyhow::Result<Vec<ChangedFile>> {
        self.inner
            .fetch_pull_request_files(owner, repo, pr_number)
            .await
    }

    async fn create_review_comment(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
        comment: &NewReviewComment,
    ) -> anyhow::Result<u64> {
        info!(
            "[dry-run] {}/{}#{} {} (position {}, commit {}): {}",
            owner, repo, pr_number, comment.path, comment.position, comment.commit_id, comment.body
        );
        Ok(DRY_RUN_COMMENT_ID)
    }
}
