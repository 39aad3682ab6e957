use anyhow::Context;
use octocrab::{Error, Octocrab};
use secrecy::SecretString;
use url::Url;

use crate::github::api::create_github_client;
use crate::github::api::operations::remove_assignees;
use crate::github::{GithubRepoName, PullRequestNumber};
use crate::review::RepositoryClient;

/// Provides access to a single repository using the GitHub API.
pub struct GithubRepositoryClient {
    client: Octocrab,
    repo_name: GithubRepoName,
}

impl GithubRepositoryClient {
    pub fn new(client: Octocrab, repo_name: GithubRepoName) -> Self {
        Self { client, repo_name }
    }

    /// Creates a client authenticated with the given token.
    /// All requests are sent relative to `api_url`, which may contain a path prefix
    /// (e.g. `https://github.example.com/api/v3`).
    pub fn connect(
        repo_name: GithubRepoName,
        api_url: &Url,
        token: &SecretString,
    ) -> anyhow::Result<Self> {
        let client = create_github_client(api_url, token)?;
        Ok(Self::new(client, repo_name))
    }

    pub fn client(&self) -> &Octocrab {
        &self.client
    }

    pub fn name(&self) -> &GithubRepoName {
        &self.repo_name
    }

    fn format_pr(&self, pr: PullRequestNumber) -> String {
        format!("{}/{}/{}", self.name().owner(), self.name().name(), pr)
    }
}

impl RepositoryClient for GithubRepositoryClient {
    fn repository(&self) -> &GithubRepoName {
        self.name()
    }

    async fn get_labels(&mut self, pr: PullRequestNumber) -> anyhow::Result<Vec<String>> {
        let labels = self
            .client
            .issues(self.name().owner(), self.name().name())
            .list_labels_for_issue(pr.0)
            .per_page(100u8)
            .send()
            .await
            .with_context(|| format!("Cannot load labels of {}", self.format_pr(pr)))?;
        Ok(labels.items.into_iter().map(|label| label.name).collect())
    }

    async fn add_labels(&mut self, pr: PullRequestNumber, labels: &[String]) -> anyhow::Result<()> {
        let client = self.client.issues(self.name().owner(), self.name().name());
        if !labels.is_empty() {
            client
                .add_labels(pr.0, labels)
                .await
                .context("Cannot add label(s) to PR")?;
        }
        Ok(())
    }

    async fn remove_labels(
        &mut self,
        pr: PullRequestNumber,
        labels: &[String],
    ) -> anyhow::Result<()> {
        let client = self.client.issues(self.name().owner(), self.name().name());
        // The GitHub API only allows removing labels one by one, so we remove all of them in
        // parallel to speed it up a little.
        let labels_to_remove_futures = labels.iter().map(|label| client.remove_label(pr.0, label));
        futures::future::join_all(labels_to_remove_futures)
            .await
            .into_iter()
            .filter(|result| match result {
                Ok(_) => false,
                Err(error) => match error {
                    // Removing a label that is not on the PR should be a no-op, rather than an error.
                    Error::GitHub { source, .. }
                        if source.message.contains("Label does not exist") =>
                    {
                        tracing::trace!("Trying to remove label which does not exist on PR {pr}");
                        false
                    }
                    _ => true,
                },
            })
            .collect::<Result<Vec<_>, _>>()
            .context("Cannot remove label(s) from PR")?;
        Ok(())
    }

    async fn add_assignees(
        &mut self,
        pr: PullRequestNumber,
        assignees: &[String],
    ) -> anyhow::Result<()> {
        if !assignees.is_empty() {
            let assignees: Vec<&str> = assignees.iter().map(String::as_str).collect();
            self.client
                .issues(self.name().owner(), self.name().name())
                .add_assignees(pr.0, &assignees)
                .await
                .with_context(|| format!("Cannot add assignee(s) to {}", self.format_pr(pr)))?;
        }
        Ok(())
    }

    async fn remove_assignees(
        &mut self,
        pr: PullRequestNumber,
        assignees: &[String],
    ) -> anyhow::Result<()> {
        if !assignees.is_empty() {
            remove_assignees(self, pr, assignees)
                .await
                .with_context(|| format!("Cannot remove assignee(s) from {}", self.format_pr(pr)))?;
        }
        Ok(())
    }
}
