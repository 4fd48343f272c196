use crate::github::PullRequest;
use indexmap::IndexMap;
use serde::Serialize;
use std::ops::Deref;

/// What is kept of a merged pull request once grouped under its assignee
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrUserData {
    pub id: u64,
    pub label_names: Vec<String>,
}

impl From<&PullRequest> for PrUserData {
    fn from(pull_request: &PullRequest) -> Self {
        PrUserData {
            id: pull_request.id,
            label_names: pull_request.label_names(),
        }
    }
}

/// Pull requests keyed by assignee login. Keys keep the order in which a
/// login was first seen, values keep input order.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct GroupedPullRequests(IndexMap<String, Vec<PrUserData>>);

impl GroupedPullRequests {
    pub fn push(&mut self, login: impl Into<String>, data: PrUserData) {
        self.0.entry(login.into()).or_default().push(data);
    }

    /// Number of pull requests across all assignees
    pub fn total(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }
}

impl Deref for GroupedPullRequests {
    type Target = IndexMap<String, Vec<PrUserData>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Groups pull requests by assignee login, skipping unassigned ones.
/// Expects the input to be already restricted to merged pull requests.
pub fn group_by_assignee<'a, I>(pull_requests: I) -> GroupedPullRequests
where
    I: IntoIterator<Item = &'a PullRequest>,
{
    pull_requests
        .into_iter()
        .fold(GroupedPullRequests::default(), |mut grouped, pull_request| {
            if let Some(login) = pull_request.assignee_login() {
                grouped.push(login, PrUserData::from(pull_request));
            }
            grouped
        })
}
