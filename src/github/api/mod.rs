use anyhow::Context;
use octocrab::Octocrab;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

pub mod client;
pub(crate) mod operations;

pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Creates an octocrab client authenticated with the token given to the action.
pub fn create_github_client(api_url: &Url, token: &SecretString) -> anyhow::Result<Octocrab> {
    Octocrab::builder()
        .base_uri(api_url.as_str())
        .context("Invalid GitHub API URL")?
        .personal_token(token.expose_secret().to_string())
        .build()
        .context("Could not create octocrab client")
}
