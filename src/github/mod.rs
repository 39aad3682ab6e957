//! Contains definitions of common types (repository name, user, pull request number) needed
//! for working with GitHub repositories.
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

use thiserror::Error;

pub mod api;
pub mod event;

pub use api::operations::ApiError;

/// Unique identifier of a GitHub repository
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct GithubRepoName {
    owner: String,
    name: String,
}

impl GithubRepoName {
    pub fn new(owner: &str, name: &str) -> Self {
        Self {
            owner: owner.to_lowercase(),
            name: name.to_lowercase(),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Display for GithubRepoName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}/{}", self.owner, self.name))
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid repository name `{0}`, expected `<owner>/<name>`")]
pub struct RepoNameError(String);

/// Parses the `<owner>/<name>` format used by `GITHUB_REPOSITORY`.
impl FromStr for GithubRepoName {
    type Err = RepoNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().split_once('/') {
            Some((owner, name))
                if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(Self::new(owner, name))
            }
            _ => Err(RepoNameError(s.to_string())),
        }
    }
}

/// A GitHub account, identified by its login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubUser {
    pub username: String,
}

impl GithubUser {
    pub fn new(username: &str) -> Self {
        Self {
            username: username.to_string(),
        }
    }

    /// GitHub logins are case-insensitive.
    pub fn is(&self, login: &str) -> bool {
        self.username.eq_ignore_ascii_case(login)
    }
}

impl Display for GithubUser {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.username)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PullRequestNumber(pub u64);

impl From<u64> for PullRequestNumber {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl Display for PullRequestNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        <u64 as Display>::fmt(&self.0, f)
    }
}
