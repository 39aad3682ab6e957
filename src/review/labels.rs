use itertools::Itertools;

use crate::github::PullRequestNumber;
use crate::review::RepositoryClient;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum LabelModification {
    Add(String),
    Remove(String),
}

/// GitHub label names are case-insensitive.
fn same_label(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Performs the given label modifications on a PR.
/// Only modifications that will actually have any effect on the PR are sent to GitHub.
pub(super) async fn apply_label_modifications<Client: RepositoryClient>(
    client: &mut Client,
    pr: PullRequestNumber,
    modifications: &[LabelModification],
) -> anyhow::Result<()> {
    let (mut add, remove): (Vec<String>, Vec<String>) =
        modifications
            .iter()
            .partition_map(|modification| match modification {
                LabelModification::Add(label) => itertools::Either::Left(label.clone()),
                LabelModification::Remove(label) => itertools::Either::Right(label.clone()),
            });

    let existing = client.get_labels(pr).await?;
    add.retain(|l| !existing.iter().any(|e| same_label(e, l)));
    // Remove labels under the name they have on the PR.
    let remove: Vec<String> = remove
        .iter()
        .filter_map(|l| existing.iter().find(|e| same_label(e, l)).cloned())
        .collect();
    tracing::debug!(
        "Filtered labels: requested = {modifications:?}, pr = {existing:?}, add = {add:?}, remove = {remove:?}"
    );

    if !add.is_empty() {
        tracing::info!("Adding label(s) {add:?} to {}#{pr}", client.repository());
        client.add_labels(pr, &add).await?;
    }
    if !remove.is_empty() {
        tracing::info!("Removing label(s) {remove:?} from {}#{pr}", client.repository());
        client.remove_labels(pr, &remove).await?;
    }
    Ok(())
}
