//! The style check run: fetch the pull request's changed files and post a
//! review comment for every style violation found in their patches.

use crate::config::Config;
use crate::patch;
use crate::rules::{self, Rule};
use anyhow::Context;
use gh_client::{ChangedFile, GitHubClient, NewReviewComment};
use log::{debug, info};

/// A style violation at a diff position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finding {
    pub rule: Rule,
    pub position: u64,
}

/// Find the style violations in one changed file.
///
/// Returns `None` for files that are not checked or have no patch (binary
/// files, pure renames). Every added comment line without a full stop is
/// reported on its own; extra blank lines are reported once per file, at the
/// first occurrence.
pub fn check_file(file: &ChangedFile) -> Option<Vec<Finding>> {
    if !rules::is_checked_file(&file.filename) {
        debug!("Skipping {}", file.filename);
        return None;
    }
    let Some(patch) = file.patch.as_deref() else {
        debug!("Skipping {}: no patch", file.filename);
        return None;
    };

    let mut findings: Vec<Finding> = patch::lines(patch)
        .filter(|line| rules::lacks_full_stop(line.text))
        .map(|line| Finding {
            rule: Rule::MissingFullStop,
            position: line.position,
        })
        .collect();

    // +1 moves from the newline ending the previous line onto the first lone `+`.
    if let Some(offset) = rules::extra_blank_lines_offset(patch) {
        findings.push(Finding {
            rule: Rule::ExtraBlankLines,
            position: patch::position_at_offset(patch, offset + 1),
        });
    }

    Some(findings)
}

/// Check every changed file of the configured pull request and post one
/// review comment per finding.
///
/// Comments are created one at a time, in file order. The first failing API
/// call aborts the run.
pub async fn run<C>(client: &C, config: &Config) -> anyhow::Result<()>
where
    C: GitHubClient + ?Sized,
{
    let slug = &config.repository;

    let repository = client
        .fetch_repository(&slug.owner, &slug.name)
        .await
        .with_context(|| format!("Failed to fetch repository {}", slug))?;

    let pr = client
        .fetch_pull_request(&repository.owner, &repository.name, config.pr_number)
        .await
        .with_context(|| {
            format!(
                "Failed to fetch pull request #{} in {}",
                config.pr_number, repository.full_name
            )
        })?;

    let files = client
        .fetch_pull_request_files(&repository.owner, &repository.name, pr.number)
        .await
        .with_context(|| format!("Failed to list files of pull request #{}", pr.number))?;

    info!(
        "Checking {} changed files of {}#{} @ {}",
        files.len(),
        repository.full_name,
        pr.number,
        pr.head_sha
    );

    for file in &files {
        let Some(findings) = check_file(file) else {
            continue;
        };
        info!("{}: {} style findings", file.filename, findings.len());

        for finding in findings {
            let comment = NewReviewComment {
                body: finding.rule.message().to_string(),
                commit_id: pr.head_sha.clone(),
                path: file.filename.clone(),
                position: finding.position,
            };

            let id = client
                .create_review_comment(&repository.owner, &repository.name, pr.number, &comment)
                .await
                .with_context(|| {
                    format!(
                        "Failed to comment on {} at position {}",
                        file.filename, finding.position
                    )
                })?;
            debug!("Created review comment {} on {}", id, file.filename);
        }
    }

    Ok(())
}
