//! Run configuration sourced from the process environment.
//!
//! All settings are read once at startup into an immutable [`Config`] that is
//! passed explicitly to the checker.

use std::fmt;
use thiserror::Error;

pub const TOKEN_VAR: &str = "GITHUB_TOKEN";
pub const TOKEN_FALLBACK_VAR: &str = "GH_TOKEN";
pub const REPOSITORY_VAR: &str = "GITHUB_REPOSITORY";
pub const PR_NUMBER_VAR: &str = "PR_NUMBER";
pub const API_URL_VAR: &str = "GITHUB_API_URL";
pub const DRY_RUN_VAR: &str = "STYLE_CHECK_DRY_RUN";

/// Errors raised while reading the environment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} environment variable not set")]
    MissingVar(&'static str),
    #[error("Invalid pull request number '{0}': expected a positive integer")]
    InvalidPrNumber(String),
    #[error("Invalid repository '{0}': expected 'owner/name'")]
    InvalidRepository(String),
}

/// Repository identifier in `owner/name` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
    pub owner: String,
    pub name: String,
}

impl RepoSlug {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidRepository(value.to_string());

        let (owner, name) = value.trim().split_once('/').ok_or_else(invalid)?;
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(invalid());
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Everything a run needs to know.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// Credential used to authenticate against the API
    pub token: String,
    /// Target repository
    pub repository: RepoSlug,
    /// Target pull request
    pub pr_number: u64,
    /// API base URL (None = public GitHub)
    pub api_url: Option<String>,
    /// Log comments instead of posting them
    pub dry_run: bool,
}

// Keep the token out of logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &"<redacted>")
            .field("repository", &self.repository)
            .field("pr_number", &self.pr_number)
            .field("api_url", &self.api_url)
            .field("dry_run", &self.dry_run)
            .finish()
    }
}

impl Config {
    /// Read the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`, which maps a variable name to its value
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let token = get(TOKEN_VAR)
            .or_else(|| get(TOKEN_FALLBACK_VAR))
            .ok_or(ConfigError::MissingVar(TOKEN_VAR))?;

        let repository = get(REPOSITORY_VAR)
            .ok_or(ConfigError::MissingVar(REPOSITORY_VAR))
            .and_then(|value| RepoSlug::parse(&value))?;

        let pr_number = get(PR_NUMBER_VAR)
            .ok_or(ConfigError::MissingVar(PR_NUMBER_VAR))
            .and_then(|value| parse_pr_number(&value))?;

        let api_url = get(API_URL_VAR);
        let dry_run = get(DRY_RUN_VAR).is_some_and(|value| is_truthy(&value));

        Ok(Self {
            token,
            repository,
            pr_number,
            api_url,
            dry_run,
        })
    }
}

fn parse_pr_number(value: &str) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(number) if number > 0 => Ok(number),
        _ => Err(ConfigError::InvalidPrNumber(value.to_string())),
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
