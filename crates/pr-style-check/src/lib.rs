//! # pr-style-check
//!
//! Reviews the Java files of a GitHub pull request for two style issues and
//! leaves an inline review comment for each one:
//!
//! - added `//` or `*` comment lines that do not end with a full stop,
//! - two added blank lines in a row.
//!
//! The GitHub API is consumed through the [`gh_client::GitHubClient`] trait,
//! so the check can run against the real API, a dry-run decorator, or a test
//! double.
//!
//! ```rust,ignore
//! use pr_style_check::{checker, Config};
//! use gh_client::OctocrabClient;
//!
//! let config = Config::from_env()?;
//! let client = OctocrabClient::from_token(config.token.clone(), config.api_url.as_deref())?;
//! checker::run(&client, &config).await?;
//! ```

pub mod checker;
pub mod config;
pub mod logger;
pub mod patch;
pub mod rules;

pub use checker::{check_file, run, Finding};
pub use config::{Config, ConfigError, RepoSlug};
pub use rules::Rule;
