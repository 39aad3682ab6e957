use crate::github::event::PullRequestComment;
use crate::review::labels::{apply_label_modifications, LabelModification};
use crate::review::{RepositoryClient, ReviewCommand, ReviewSettings};
use crate::utils::text::quoted_list;

/// Result of handling a single comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The PR was updated.
    Applied(String),
    /// The comment contained a trigger, but its author was not allowed to use it.
    Rejected(String),
    /// The comment did not contain any trigger.
    Ignored(String),
}

impl Outcome {
    pub fn message(&self) -> &str {
        match self {
            Outcome::Applied(msg) | Outcome::Rejected(msg) | Outcome::Ignored(msg) => msg,
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected(_))
    }

    pub fn log(&self) {
        match self {
            Outcome::Applied(msg) | Outcome::Ignored(msg) => tracing::info!("success: {msg}"),
            Outcome::Rejected(msg) => tracing::warn!("warning: {msg}"),
        }
    }
}

/// Reacts to a comment posted on a pull request.
pub async fn handle_comment<Client: RepositoryClient>(
    client: &mut Client,
    settings: &ReviewSettings,
    comment: &PullRequestComment,
) -> anyhow::Result<Outcome> {
    match settings.triggers.parse(&comment.text) {
        Some(ReviewCommand::RequestUpdate) => assign_author(client, settings, comment).await,
        Some(ReviewCommand::RequestReview) => request_review(client, settings, comment).await,
        None => Ok(Outcome::Ignored(format!(
            "neither '{}' nor '{}' found in comment body, not proceeding",
            settings.triggers.request_update(),
            settings.triggers.request_review()
        ))),
    }
}

/// A reviewer hands the PR back to its author.
async fn assign_author<Client: RepositoryClient>(
    client: &mut Client,
    settings: &ReviewSettings,
    comment: &PullRequestComment,
) -> anyhow::Result<Outcome> {
    if !settings.is_reviewer(&comment.author) {
        return Ok(Outcome::Rejected(format!(
            "Only reviewers {} can assign the author, not {}",
            quoted_list(&settings.reviewers),
            comment.author
        )));
    }

    let pr = comment.pr_number;
    let labels = &settings.labels;
    apply_label_modifications(
        client,
        pr,
        &[
            LabelModification::Add(labels.awaiting_update.clone()),
            LabelModification::Remove(labels.awaiting_review.clone()),
        ],
    )
    .await?;

    client
        .add_assignees(pr, &[comment.pr_author.username.clone()])
        .await?;

    let unassign: Vec<String> = settings
        .reviewers
        .iter()
        .filter(|reviewer| !reviewer.is(&comment.pr_author.username))
        .map(|reviewer| reviewer.username.clone())
        .collect();
    if !unassign.is_empty() {
        client.remove_assignees(pr, &unassign).await?;
    }

    Ok(Outcome::Applied(format!(
        "Author {} successfully assigned to PR, \"{}\" label added",
        comment.pr_author, labels.awaiting_update
    )))
}

/// The PR author (or a reviewer) asks the reviewers to take a look.
async fn request_review<Client: RepositoryClient>(
    client: &mut Client,
    settings: &ReviewSettings,
    comment: &PullRequestComment,
) -> anyhow::Result<Outcome> {
    let author_is_commenter = comment.pr_author.is(&comment.author.username);
    if !(settings.is_reviewer(&comment.author) || author_is_commenter) {
        return Ok(Outcome::Rejected(format!(
            "Only the PR author {} or reviewers can request a review, not {}",
            comment.pr_author, comment.author
        )));
    }

    let pr = comment.pr_number;
    let labels = &settings.labels;
    apply_label_modifications(
        client,
        pr,
        &[
            LabelModification::Add(labels.awaiting_review.clone()),
            LabelModification::Remove(labels.awaiting_update.clone()),
        ],
    )
    .await?;

    let reviewers: Vec<String> = settings
        .reviewers
        .iter()
        .map(|reviewer| reviewer.username.clone())
        .collect();
    client.add_assignees(pr, &reviewers).await?;

    if !settings.is_reviewer(&comment.pr_author) {
        client
            .remove_assignees(pr, &[comment.pr_author.username.clone()])
            .await?;
    }

    Ok(Outcome::Applied(format!(
        "Reviewers {} successfully assigned to PR, \"{}\" label added",
        quoted_list(&settings.reviewers),
        labels.awaiting_review
    )))
}
