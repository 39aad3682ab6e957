//! Parsing of the `issue_comment` event payload that GitHub Actions stores at
//! `GITHUB_EVENT_PATH`.
use std::path::Path;

use anyhow::Context;

use crate::github::{GithubUser, PullRequestNumber};

#[derive(serde::Deserialize, Debug)]
struct WebhookUser {
    login: String,
}

#[derive(serde::Deserialize, Debug)]
struct WebhookComment {
    #[serde(default)]
    body: Option<String>,
    user: WebhookUser,
}

#[derive(serde::Deserialize, Debug)]
struct WebhookIssue {
    number: u64,
    user: WebhookUser,
    // Only present when the issue is a pull request. We do not care about its contents.
    #[serde(default)]
    pull_request: Option<serde_json::Value>,
}

/// Only the parts of the payload that we actually use are parsed, the rest is ignored.
#[derive(serde::Deserialize, Debug)]
struct WebhookIssueComment {
    comment: WebhookComment,
    issue: WebhookIssue,
}

/// A comment posted on a pull request.
#[derive(Debug, Clone, PartialEq)]
pub struct PullRequestComment {
    pub pr_number: PullRequestNumber,
    /// Author of the comment.
    pub author: GithubUser,
    /// Author of the pull request.
    pub pr_author: GithubUser,
    pub text: String,
}

/// Loads the event from the given file.
/// Returns `None` if the comment was not posted on a pull request.
pub fn load_pr_comment(path: &Path) -> anyhow::Result<Option<PullRequestComment>> {
    let contents = std::fs::read(path)
        .with_context(|| format!("Cannot read event payload from {}", path.display()))?;
    parse_pr_comment(&contents)
}

pub fn parse_pr_comment(body: &[u8]) -> anyhow::Result<Option<PullRequestComment>> {
    let payload: WebhookIssueComment =
        serde_json::from_slice(body).context("Cannot parse issue comment event")?;

    // We only care about pull request comments
    if payload.issue.pull_request.is_none() {
        tracing::debug!(
            "Ignoring comment on issue #{} because it does not belong to a pull request",
            payload.issue.number
        );
        return Ok(None);
    }

    Ok(Some(PullRequestComment {
        pr_number: payload.issue.number.into(),
        author: GithubUser::new(&payload.comment.user.login),
        pr_author: GithubUser::new(&payload.issue.user.login),
        text: payload.comment.body.unwrap_or_default(),
    }))
}
