//! Octocrab-based GitHub API client
//!
//! Direct implementation of the `GitHubClient` trait using the octocrab library.
//! This client makes real API calls.

use crate::client::GitHubClient;
use crate::types::{ChangedFile, NewReviewComment, PullRequest, Repository};
use crate::DEFAULT_API_URL;
use anyhow::Context;
use async_trait::async_trait;
use log::{debug, info};
use octocrab::Octocrab;
use serde::Deserialize;
use std::sync::Arc;

/// Direct GitHub API client using octocrab
///
/// This is the base implementation that makes actual API calls.
/// It can be wrapped by `DryRunClient` to suppress writes.
#[derive(Debug, Clone)]
pub struct OctocrabClient {
    octocrab: Arc<Octocrab>,
}

/// The subset of the created comment we care about
#[derive(Debug, Deserialize)]
struct CreatedComment {
    id: u64,
}

impl OctocrabClient {
    /// Create a new client with the given octocrab instance
    pub fn new(octocrab: Arc<Octocrab>) -> Self {
        Self { octocrab }
    }

    /// Build an authenticated client from a personal access token
    ///
    /// # Arguments
    ///
    /// * `token` - Personal access token or the Actions `GITHUB_TOKEN`
    /// * `api_url` - API base URL for GitHub Enterprise (None = api.github.com)
    pub fn from_token(token: impl Into<String>, api_url: Option<&str>) -> anyhow::Result<Self> {
        let token: String = token.into();
        let mut builder = Octocrab::builder().personal_token(token);

        let base_url = match api_url {
            Some(url) if !is_default_api_url(url) => {
                builder = builder.base_uri(url).context("Failed to set base URI")?;
                url
            }
            _ => DEFAULT_API_URL,
        };

        let octocrab = builder.build().context("Failed to build Octocrab client")?;

        info!("GitHub client created for {}", base_url);
        Ok(Self::new(Arc::new(octocrab)))
    }
}

#[async_trait]
impl GitHubClient for OctocrabClient {
    async fn fetch_repository(&self, owner: &str, repo: &str) -> anyhow::Result<Repository> {
        debug!("Fetching repository {}/{}", owner, repo);

        let repository = self.octocrab.repos(owner, repo).get().await?;

        Ok(Repository {
            owner: repository
                .owner
                .as_ref()
                .map(|o| o.login.clone())
                .unwrap_or_else(|| owner.to_string()),
            full_name: repository
                .full_name
                .clone()
                .unwrap_or_else(|| format!("{}/{}", owner, repository.name)),
            name: repository.name,
        })
    }

    async fn fetch_pull_request(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
    ) -> anyhow::Result<PullRequest> {
        debug!("Fetching PR #{} for {}/{}", pr_number, owner, repo);

        let pr = self.octocrab.pulls(owner, repo).get(pr_number).await?;

        Ok(convert_pull_request(&pr))
    }

    async fn fetch_pull_request_files(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
    ) -> anyhow::Result<Vec<ChangedFile>> {
        debug!("Fetching changed files of PR #{} for {}/{}", pr_number, owner, repo);

        let first_page = self.octocrab.pulls(owner, repo).list_files(pr_number).await?;
        let entries = self.octocrab.all_pages(first_page).await?;

        let files: Vec<ChangedFile> = entries
            .into_iter()
            .map(|entry| ChangedFile {
                filename: entry.filename,
                patch: entry.patch,
            })
            .collect();

        debug!("Fetched {} changed files of PR #{}", files.len(), pr_number);
        Ok(files)
    }

    async fn create_review_comment(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
        comment: &NewReviewComment,
    ) -> anyhow::Result<u64> {
        debug!(
            "Creating review comment on {}:{} in {}/{}#{}",
            comment.path, comment.position, owner, repo, pr_number
        );

        // Raw POST since octocrab's comment builder only supports line/side anchoring
        let route = review_comments_route(owner, repo, pr_number);
        let created: CreatedComment = self.octocrab.post(route, Some(comment)).await?;

        Ok(created.id)
    }
}

/// Convert octocrab PullRequest to our PullRequest type
fn convert_pull_request(pr: &octocrab::models::pulls::PullRequest) -> PullRequest {
    PullRequest {
        number: pr.number,
        head_sha: pr.head.sha.clone(),
    }
}

fn review_comments_route(owner: &str, repo: &str, pr_number: u64) -> String {
    format!("/repos/{}/{}/pulls/{}/comments", owner, repo, pr_number)
}

fn is_default_api_url(url: &str) -> bool {
    url.trim_end_matches('/') == DEFAULT_API_URL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_comments_route() {
        assert_eq!(
            review_comments_route("wso2", "identity-inbound-auth-oauth", 42),
            "/repos/wso2/identity-inbound-auth-oauth/pulls/42/comments"
        );
    }

    #[test]
    fn test_is_default_api_url() {
        assert!(is_default_api_url("https://api.github.com"));
        assert!(is_default_api_url("https://api.github.com/"));
        assert!(!is_default_api_url("https://ghe.example.com/api/v3"));
    }

    #[test]
    fn test_created_comment_ignores_extra_fields() {
        let json = r#"{"id": 10, "body": "Please remove extra new lines.", "path": "Foo.java"}"#;
        let created: CreatedComment = serde_json::from_str(json).unwrap();
        assert_eq!(created.id, 10);
    }
}
