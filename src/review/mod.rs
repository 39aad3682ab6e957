use crate::github::{GithubRepoName, GithubUser, PullRequestNumber};

mod command;
mod handlers;
mod labels;

pub use command::{ReviewCommand, TriggerMatcher};
pub use handlers::{handle_comment, Outcome};

/// Provides functionality for working with a remote repository.
#[allow(async_fn_in_trait)]
pub trait RepositoryClient {
    fn repository(&self) -> &GithubRepoName;

    /// Return the names of all labels attached to the given pull request.
    async fn get_labels(&mut self, pr: PullRequestNumber) -> anyhow::Result<Vec<String>>;

    /// Add a set of labels to a PR.
    async fn add_labels(&mut self, pr: PullRequestNumber, labels: &[String]) -> anyhow::Result<()>;

    /// Remove a set of labels from a PR.
    async fn remove_labels(
        &mut self,
        pr: PullRequestNumber,
        labels: &[String],
    ) -> anyhow::Result<()>;

    /// Assign the given users to a PR.
    async fn add_assignees(
        &mut self,
        pr: PullRequestNumber,
        assignees: &[String],
    ) -> anyhow::Result<()>;

    /// Unassign the given users from a PR.
    async fn remove_assignees(
        &mut self,
        pr: PullRequestNumber,
        assignees: &[String],
    ) -> anyhow::Result<()>;
}

/// Labels toggled by the review flow. A PR should have at most one of them at a time.
#[derive(Debug, Clone)]
pub struct ReviewLabels {
    pub awaiting_update: String,
    pub awaiting_review: String,
}

/// Everything the handlers need to know about how the review flow is set up in a repository.
#[derive(Debug, Clone)]
pub struct ReviewSettings {
    pub reviewers: Vec<GithubUser>,
    pub triggers: TriggerMatcher,
    pub labels: ReviewLabels,
}

impl ReviewSettings {
    pub fn is_reviewer(&self, user: &GithubUser) -> bool {
        self.reviewers.iter().any(|reviewer| reviewer.is(&user.username))
    }
}
