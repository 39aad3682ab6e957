//! This is the library of the review-flow GitHub action.
//!
//! The action reacts to comments posted on pull requests. A reviewer can hand the PR back to its
//! author with the "request update" trigger, and the author (or a reviewer) can hand it to the
//! reviewers with the "request review" trigger. Each hand-off toggles a pair of labels and
//! updates the PR assignees.
pub mod config;
pub mod github;
pub mod review;
pub mod utils;

use anyhow::Context;
use tracing::Instrument;

use crate::config::ActionConfig;
use crate::github::api::client::GithubRepositoryClient;
use crate::github::event::load_pr_comment;
use crate::review::{handle_comment, Outcome};

/// Handles the event described by the configuration.
/// Returns `None` if the event is not a pull request comment.
/// Errors are not logged here, the caller reports them.
pub async fn run_action(config: &ActionConfig) -> anyhow::Result<Option<Outcome>> {
    let Some(comment) = load_pr_comment(&config.event_path)? else {
        tracing::info!("action only applies to pull requests, not issues");
        return Ok(None);
    };

    let mut client = GithubRepositoryClient::connect(
        config.repository.clone(),
        &config.api_url,
        &config.token,
    )?;

    let span = tracing::info_span!(
        "Comment",
        pr = format!("{}#{}", config.repository, comment.pr_number),
        author = comment.author.username
    );
    let outcome = handle_comment(&mut client, &config.settings, &comment)
        .instrument(span.clone())
        .await
        .with_context(|| {
            format!(
                "Cannot handle comment of {} on {}#{}",
                comment.author, config.repository, comment.pr_number
            )
        })?;
    span.in_scope(|| outcome.log());
    Ok(Some(outcome))
}

#[cfg(test)]
mod tests;
