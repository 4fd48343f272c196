mod builder;
pub mod github_client;
mod handler;
mod request;
pub mod response;

pub use github_client::GithubClient;
pub use response::PullRequest;

use self::{
    builder::BuilderExecutor,
    request::{Direction, Sort, State},
};
use anyhow::Result;

/// Fetches one page of closed pull requests, most recently updated first,
/// and keeps the merged ones.
pub async fn merged_pull_requests(
    client: &GithubClient,
    owner: &str,
    repo: &str,
) -> Result<Vec<PullRequest>> {
    let pull_requests = client
        .repo(owner, repo)
        .pull_requests()
        .list()
        .state(State::Closed)
        .sort(Sort::Updated)
        .direction(Direction::Desc)
        .execute()
        .await?;

    log::debug!(
        "fetched {} closed pull requests from {}/{}",
        pull_requests.len(),
        owner,
        repo
    );

    Ok(retain_merged(pull_requests))
}

pub fn retain_merged(pull_requests: Vec<PullRequest>) -> Vec<PullRequest> {
    pull_requests
        .into_iter()
        .filter(PullRequest::is_merged)
        .collect()
}
