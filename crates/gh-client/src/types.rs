//! GitHub API data transfer objects
//!
//! These types represent the data returned from the GitHub API.
//! They are intentionally separate from the octocrab models to keep
//! consumers (and their test doubles) independent of octocrab.

use serde::{Deserialize, Serialize};

/// A repository from the GitHub API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Repository owner (user or organization)
    pub owner: String,

    /// Repository name
    pub name: String,

    /// Full name in `owner/name` form
    pub full_name: String,
}

/// A pull request from the GitHub API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    /// PR number (e.g., 123)
    pub number: u64,

    /// HEAD commit SHA, the commit review comments are made on
    pub head_sha: String,
}

/// A file touched by a pull request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangedFile {
    /// Path relative to the repository root
    pub filename: String,

    /// Unified diff hunks for this file
    ///
    /// `None` for binary files and for renames without content changes.
    pub patch: Option<String>,
}

impl ChangedFile {
    /// Create a changed file with an optional patch
    pub fn new(filename: impl Into<String>, patch: Option<&str>) -> Self {
        Self {
            filename: filename.into(),
            patch: patch.map(str::to_string),
        }
    }
}

/// A review comment to be created on a pull request diff
///
/// Anchored by diff `position`: the number of lines below the first `@@`
/// hunk header of the file's patch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReviewComment {
    /// Comment body text
    pub body: String,

    /// The SHA of the commit to comment on (usually head SHA)
    pub commit_id: String,

    /// File path relative to repository root
    pub path: String,

    /// Position in the file's diff
    pub position: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_review_comment_request_shape() {
        let comment = NewReviewComment {
            body: "Comments should end with a full stop.".to_string(),
            commit_id: "abc123".to_string(),
            path: "src/Foo.java".to_string(),
            position: 3,
        };

        let json = serde_json::to_value(&comment).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "body": "Comments should end with a full stop.",
                "commit_id": "abc123",
                "path": "src/Foo.java",
                "position": 3,
            })
        );
    }

    #[test]
    fn test_changed_file_without_patch() {
        let json = r#"{
            "filename": "logo.png",
            "patch": null
        }"#;

        let file: ChangedFile = serde_json::from_str(json).unwrap();

        assert_eq!(file.filename, "logo.png");
        assert!(file.patch.is_none());
    }

    #[test]
    fn test_changed_file_ignores_diff_entry_metadata() {
        // GitHub sends sha/status/counts alongside the patch; only filename and patch are kept.
        let json = r#"{
            "filename": "src/Foo.java",
            "patch": "@@ -1 +1 @@\n+// note",
            "sha": null,
            "status": "modified",
            "additions": 1,
            "deletions": 0,
            "changes": 1
        }"#;

        let file: ChangedFile = serde_json::from_str(json).unwrap();

        assert_eq!(
            file,
            ChangedFile::new("src/Foo.java", Some("@@ -1 +1 @@\n+// note"))
        );
    }

    #[test]
    fn test_pull_request_keeps_number_and_head_sha() {
        let json = r#"{"number": 42, "head_sha": "abc123"}"#;

        let pr: PullRequest = serde_json::from_str(json).unwrap();

        assert_eq!(
            pr,
            PullRequest {
                number: 42,
                head_sha: "abc123".to_string(),
            }
        );
    }

    #[test]
    fn test_changed_file_new() {
        let file = ChangedFile::new("Foo.java", Some("+int x = 1;"));

        assert_eq!(file.filename, "Foo.java");
        assert_eq!(file.patch.as_deref(), Some("+int x = 1;"));
    }
}
