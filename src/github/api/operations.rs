use http::StatusCode;
use thiserror::Error;

use crate::github::api::client::GithubRepositoryClient;
use crate::github::PullRequestNumber;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Unknown error ({status}): {text}")]
    Unknown { status: StatusCode, text: String },
    #[error("Network error: {0}")]
    NetworkError(#[from] octocrab::Error),
}

#[derive(serde::Serialize)]
struct AssigneesRequest<'a> {
    assignees: &'a [String],
}

/// Unassigns the given users from a pull request.
/// octocrab does not offer this endpoint, so the request is sent manually.
///
/// Documentation: https://docs.github.com/en/rest/issues/assignees?apiVersion=2022-11-28#remove-assignees-from-an-issue
pub async fn remove_assignees(
    repo: &GithubRepositoryClient,
    pr: PullRequestNumber,
    assignees: &[String],
) -> Result<(), ApiError> {
    let client = repo.client();
    let url = format!("/repos/{}/issues/{pr}/assignees", repo.name());

    let response = client
        ._delete(url.as_str(), Some(&AssigneesRequest { assignees }))
        .await?;
    let status = response.status();
    let text = client.body_to_string(response).await.unwrap_or_default();

    tracing::trace!(
        "Response from removing assignees {assignees:?} from {}#{pr}: {status} ({text})",
        repo.name()
    );

    if status.is_success() {
        Ok(())
    } else {
        Err(ApiError::Unknown { status, text })
    }
}
