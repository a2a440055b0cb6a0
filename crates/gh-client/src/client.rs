//! GitHub client trait
//!
//! This module defines the core `GitHubClient` trait that all client
//! implementations must satisfy.

use crate::types::{ChangedFile, NewReviewComment, PullRequest, Repository};
use async_trait::async_trait;

/// GitHub API client trait
///
/// Defines the interface for interacting with the GitHub API.
/// Implementations can be direct (hitting the API) or decorated
/// with dry-run behavior, logging, etc.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across
/// async tasks and threads.
///
/// # Example
///
/// ```rust,ignore
/// use gh_client::{ChangedFile, GitHubClient};
///
/// async fn list_files(client: &dyn GitHubClient) -> anyhow::Result<Vec<ChangedFile>> {
///     client.fetch_pull_request_files("rust-lang", "rust", 42).await
/// }
/// ```
#[async_trait]
pub trait GitHubClient: Send + Sync {
    /// Fetch a repository by owner and name
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner (user or organization)
    /// * `repo` - Repository name
    ///
    /// # Returns
    ///
    /// The repository, or an error if it does not exist or is not accessible.
    async fn fetch_repository(&self, owner: &str, repo: &str) -> anyhow::Result<Repository>;

    /// Fetch a single pull request by number
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner
    /// * `repo` - Repository name
    /// * `pr_number` - Pull request number
    ///
    /// # Returns
    ///
    /// The pull request details, or an error if not found.
    async fn fetch_pull_request(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
    ) -> anyhow::Result<PullRequest>;

    /// Fetch all files changed by a pull request
    ///
    /// Follows every result page, so the list is complete.
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner
    /// * `repo` - Repository name
    /// * `pr_number` - Pull request number
    ///
    /// # Returns
    ///
    /// The changed files, each with its unified diff text if GitHub has one.
    async fn fetch_pull_request_files(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
    ) -> anyhow::Result<Vec<ChangedFile>>;

    /// Create a review comment anchored at a diff position
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner
    /// * `repo` - Repository name
    /// * `pr_number` - Pull request number
    /// * `comment` - Body, commit, path and diff position of the comment
    ///
    /// # Returns
    ///
    /// The GitHub comment ID on success, error on failure
    async fn create_review_comment(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
        comment: &NewReviewComment,
    ) -> anyhow::Result<u64>;
}
