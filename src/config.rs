//! Inputs of the action.
//!
//! GitHub Actions passes `with:` inputs as `INPUT_<NAME>` environment variables, and describes
//! the triggering event through `GITHUB_REPOSITORY` and `GITHUB_EVENT_PATH`. Every input can
//! also be given as a command-line flag, which is handy when running the binary locally.
use std::path::PathBuf;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use url::Url;

use crate::github::api::DEFAULT_GITHUB_API_URL;
use crate::github::{GithubRepoName, GithubUser, RepoNameError};
use crate::review::{ReviewLabels, ReviewSettings, TriggerMatcher};

#[derive(clap::Parser, Debug)]
#[command(about = "Toggles review labels and assignees of a PR based on its comments")]
pub struct ActionOpts {
    /// Repository in the `<owner>/<name>` format.
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: String,

    /// Path to the JSON payload of the `issue_comment` event.
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub event_path: PathBuf,

    /// Token used to authenticate with the GitHub API.
    #[arg(long, env = "INPUT_TOKEN", hide_env_values = true)]
    pub token: SecretString,

    /// Comma-separated list of reviewer logins.
    #[arg(long, env = "INPUT_REVIEWERS")]
    pub reviewers: String,

    /// Text that makes a reviewer hand the PR back to its author.
    #[arg(long, env = "INPUT_REQUEST_UPDATE_TRIGGER")]
    pub request_update_trigger: String,

    /// Text that asks the reviewers to review the PR.
    #[arg(long, env = "INPUT_REQUEST_REVIEW_TRIGGER")]
    pub request_review_trigger: String,

    /// Label added while the PR waits for its author.
    #[arg(long, env = "INPUT_AWAITING_UPDATE_LABEL")]
    pub awaiting_update_label: String,

    /// Label added while the PR waits for the reviewers.
    #[arg(long, env = "INPUT_AWAITING_REVIEW_LABEL")]
    pub awaiting_review_label: String,

    /// Base URL of the GitHub REST API.
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_GITHUB_API_URL)]
    pub api_url: String,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    InvalidRepository(#[from] RepoNameError),
    #[error("Event payload file {0} does not exist")]
    MissingEventPath(PathBuf),
    #[error("Input `{0}` must not be empty")]
    EmptyInput(&'static str),
    #[error("No reviewers were configured")]
    NoReviewers,
    #[error("Request update and request review triggers must differ, both are `{0}`")]
    SameTriggers(String),
    #[error("Awaiting update and awaiting review labels must differ, both are `{0}`")]
    SameLabels(String),
    #[error("Invalid GitHub API URL `{url}`: {error}")]
    InvalidApiUrl { url: String, error: url::ParseError },
}

/// Validated configuration of the action.
pub struct ActionConfig {
    pub repository: GithubRepoName,
    pub event_path: PathBuf,
    pub token: SecretString,
    pub api_url: Url,
    pub settings: ReviewSettings,
}

/// Splits a comma-separated list of logins, ignoring surrounding spaces and empty entries.
pub fn parse_reviewers(reviewers: &str) -> Vec<GithubUser> {
    reviewers
        .split(',')
        .map(|reviewer| reviewer.trim_matches(' '))
        .filter(|reviewer| !reviewer.is_empty())
        .map(GithubUser::new)
        .collect()
}

fn non_empty(name: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        Err(ConfigError::EmptyInput(name))
    } else {
        Ok(())
    }
}

impl TryFrom<ActionOpts> for ActionConfig {
    type Error = ConfigError;

    fn try_from(opts: ActionOpts) -> Result<Self, Self::Error> {
        let repository: GithubRepoName = opts.repository.parse()?;
        if !opts.event_path.is_file() {
            return Err(ConfigError::MissingEventPath(opts.event_path));
        }
        non_empty("token", opts.token.expose_secret())?;
        non_empty("request_update_trigger", &opts.request_update_trigger)?;
        non_empty("request_review_trigger", &opts.request_review_trigger)?;
        non_empty("awaiting_update_label", &opts.awaiting_update_label)?;
        non_empty("awaiting_review_label", &opts.awaiting_review_label)?;

        let reviewers = parse_reviewers(&opts.reviewers);
        if reviewers.is_empty() {
            return Err(ConfigError::NoReviewers);
        }

        let triggers = TriggerMatcher::new(&opts.request_update_trigger, &opts.request_review_trigger);
        if triggers.is_ambiguous() {
            return Err(ConfigError::SameTriggers(triggers.request_update().to_string()));
        }
        // GitHub label names are case-insensitive.
        if opts.awaiting_update_label.to_lowercase() == opts.awaiting_review_label.to_lowercase() {
            return Err(ConfigError::SameLabels(opts.awaiting_update_label));
        }

        let api_url = Url::parse(&opts.api_url).map_err(|error| ConfigError::InvalidApiUrl {
            url: opts.api_url.clone(),
            error,
        })?;

        Ok(ActionConfig {
            repository,
            event_path: opts.event_path,
            token: opts.token,
            api_url,
            settings: ReviewSettings {
                reviewers,
                triggers,
                labels: ReviewLabels {
                    awaiting_update: opts.awaiting_update_label,
                    awaiting_review: opts.awaiting_review_label,
                },
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    /// `extra` contains flag/value pairs that replace the defaults.
    fn opts(extra: &[&str]) -> ActionOpts {
        // Cargo.toml always exists when tests are executed through cargo.
        let event_path = concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml");
        let mut args = vec![
            "review-flow",
            "--repository",
            "owner/repo",
            "--event-path",
            event_path,
            "--token",
            "secret",
            "--reviewers",
            "alice, bob",
            "--request-update-trigger",
            "please update",
            "--request-review-trigger",
            "please review",
            "--awaiting-update-label",
            "awaiting update",
            "--awaiting-review-label",
            "awaiting review",
            "--api-url",
            "https://api.github.com",
        ];
        for pair in extra.chunks(2) {
            let index = args.iter().position(|arg| *arg == pair[0]).unwrap();
            args[index + 1] = pair[1];
        }
        ActionOpts::try_parse_from(args).unwrap()
    }

    fn usernames(users: &[GithubUser]) -> Vec<&str> {
        users.iter().map(|u| u.username.as_str()).collect()
    }

    #[test]
    fn parse_reviewers_trims_and_skips_empty() {
        assert_eq!(
            usernames(&parse_reviewers("alice, bob,,  carol ,")),
            vec!["alice", "bob", "carol"]
        );
    }

    #[test]
    fn parse_reviewers_empty() {
        assert!(parse_reviewers("").is_empty());
        assert!(parse_reviewers(" , ,").is_empty());
    }

    #[test]
    fn load_valid_config() {
        let config = ActionConfig::try_from(opts(&[])).unwrap();
        assert_eq!(config.repository.to_string(), "owner/repo");
        assert_eq!(usernames(&config.settings.reviewers), vec!["alice", "bob"]);
        assert_eq!(config.settings.labels.awaiting_update, "awaiting update");
        assert_eq!(config.api_url.as_str(), "https://api.github.com/");
    }

    #[test]
    fn missing_input() {
        let result = ActionOpts::try_parse_from(["review-flow", "--repository", "owner/repo"]);
        assert!(result.is_err());
    }

    #[test]
    fn invalid_repository() {
        let result = ActionConfig::try_from(opts(&["--repository", "repo"]));
        assert!(matches!(result, Err(ConfigError::InvalidRepository(_))));
    }

    #[test]
    fn missing_event_file() {
        let result = ActionConfig::try_from(opts(&["--event-path", "/does/not/exist.json"]));
        assert!(matches!(result, Err(ConfigError::MissingEventPath(_))));
    }

    #[test]
    fn no_reviewers() {
        let result = ActionConfig::try_from(opts(&["--reviewers", " , "]));
        assert!(matches!(result, Err(ConfigError::NoReviewers)));
    }

    #[test]
    fn empty_trigger() {
        let result = ActionConfig::try_from(opts(&["--request-review-trigger", "  "]));
        assert!(matches!(
            result,
            Err(ConfigError::EmptyInput("request_review_trigger"))
        ));
    }

    #[test]
    fn same_triggers() {
        let result = ActionConfig::try_from(opts(&["--request-review-trigger", "Please Update"]));
        assert!(matches!(result, Err(ConfigError::SameTriggers(_))));
    }

    #[test]
    fn same_labels() {
        let result = ActionConfig::try_from(opts(&["--awaiting-review-label", "awaiting update"]));
        assert!(matches!(result, Err(ConfigError::SameLabels(_))));
    }

    #[test]
    fn same_labels_differing_in_case() {
        let result = ActionConfig::try_from(opts(&["--awaiting-review-label", "Awaiting Update"]));
        assert!(matches!(result, Err(ConfigError::SameLabels(_))));
    }

    #[test]
    fn token_is_not_printed() {
        let opts = opts(&["--token", "ghp_very_secret"]);
        assert!(!format!("{opts:?}").contains("ghp_very_secret"));
        assert_eq!(opts.token.expose_secret(), "ghp_very_secret");
    }

    #[test]
    fn invalid_api_url() {
        let result = ActionConfig::try_from(opts(&["--api-url", "not a url"]));
        assert!(matches!(result, Err(ConfigError::InvalidApiUrl { .. })));
    }
}
