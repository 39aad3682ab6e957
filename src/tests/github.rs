//! JSON bodies returned by the mocked GitHub API.
use serde_json::{json, Value};

pub fn user_json(login: &str) -> Value {
    let url = format!("https://api.github.com/users/{login}");
    json!({
        "login": login,
        "id": 1,
        "node_id": "MDQ6VXNlcjE=",
        "avatar_url": "https://avatars.githubusercontent.com/u/1?v=4",
        "gravatar_id": "",
        "url": url,
        "html_url": format!("https://github.com/{login}"),
        "followers_url": format!("{url}/followers"),
        "following_url": format!("{url}/following"),
        "gists_url": format!("{url}/gists"),
        "starred_url": format!("{url}/starred"),
        "subscriptions_url": format!("{url}/subscriptions"),
        "organizations_url": format!("{url}/orgs"),
        "repos_url": format!("{url}/repos"),
        "events_url": format!("{url}/events"),
        "received_events_url": format!("{url}/received_events"),
        "type": "User",
        "site_admin": false,
    })
}

pub fn label_json(name: &str) -> Value {
    json!({
        "id": 1,
        "node_id": "MDU6TGFiZWwx",
        "url": "https://api.github.com/repos/owner/repo/labels/label",
        "name": name,
        "description": null,
        "color": "ededed",
        "default": false,
    })
}

pub fn labels_json(names: &[&str]) -> Value {
    Value::Array(names.iter().map(|name| label_json(name)).collect())
}

/// Issue returned after its assignees were modified.
pub fn issue_json(number: u64, assignees: &[&str]) -> Value {
    let url = format!("https://api.github.com/repos/owner/repo/issues/{number}");
    json!({
        "id": 1,
        "node_id": "MDU6SXNzdWUx",
        "url": url,
        "repository_url": "https://api.github.com/repos/owner/repo",
        "labels_url": format!("{url}/labels"),
        "comments_url": format!("{url}/comments"),
        "events_url": format!("{url}/events"),
        "html_url": format!("https://github.com/owner/repo/pull/{number}"),
        "number": number,
        "state": "open",
        "title": "Test PR",
        "body": null,
        "user": user_json("author"),
        "labels": [],
        "assignees": assignees.iter().map(|login| user_json(login)).collect::<Vec<_>>(),
        "author_association": "CONTRIBUTOR",
        "locked": false,
        "comments": 0,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z",
    })
}
