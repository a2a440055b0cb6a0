//! GitHub API client for pull request review tooling
//!
//! This crate provides a trait-based GitHub API client covering what a review
//! bot needs: look up a repository and a pull request, list the files the pull
//! request changes, and create review comments on the diff.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              GitHubClient trait                  │
//! │  - fetch_repository()                            │
//! │  - fetch_pull_request()                          │
//! │  - fetch_pull_request_files()                    │
//! │  - create_review_comment()                       │
//! └─────────────────────────────────────────────────┘
//!                        │
//!        ┌───────────────┴───────────────┐
//!        ▼                               ▼
//! ┌─────────────────┐         ┌─────────────────────┐
//! │ OctocrabClient  │         │ DryRunClient        │
//! │ (direct API)    │◄────────│ (decorator)         │
//! └─────────────────┘         └─────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use gh_client::{DryRunClient, GitHubClient, OctocrabClient};
//!
//! # async fn example() -> anyhow::Result<()> {
//! // Direct client
//! let direct = OctocrabClient::from_token("token", None)?;
//!
//! // Client that only logs the comments it would create
//! let dry_run = DryRunClient::new(direct.clone());
//!
//! // Both implement the same trait
//! let files = dry_run.fetch_pull_request_files("owner", "repo", 42).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod dry_run;
pub mod octocrab_client;
pub mod types;

/// Default GitHub API base URL (public GitHub)
pub const DEFAULT_API_URL: &str = "https://api.github.com";

pub use client::GitHubClient;
pub use dry_run::{DryRunClient, DRY_RUN_COMMENT_ID};
pub use octocrab_client::OctocrabClient;
pub use types::{ChangedFile, NewReviewComment, PullRequest, Repository};

// Re-export octocrab so consumers don't need to depend on it directly
pub use octocrab;
