use super::BuilderExecutor;
use crate::github::{
    github_client::GithubClient,
    request::{Direction, ListPullRequestsRequest, Sort, State},
    response::PullRequest,
};
use anyhow::Result;

pub struct ListPullRequestsBuilder<'a> {
    client: &'a GithubClient,
    pub owner: String,
    pub repo: String,
    pub state: Option<State>,
    pub sort: Option<Sort>,
    pub direction: Option<Direction>,
}

impl<'a> ListPullRequestsBuilder<'a> {
    pub fn new(client: &'a GithubClient, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        ListPullRequestsBuilder {
            client,
            owner: owner.into(),
            repo: repo.into(),
            state: None,
            sort: None,
            direction: None,
        }
    }

    pub fn state(mut self, state: State) -> Self {
        self.state = Some(state);
        self
    }

    pub fn sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }
}

impl BuilderExecutor for ListPullRequestsBuilder<'_> {
    type Output = Vec<PullRequest>;

    async fn execute(self) -> Result<Vec<PullRequest>> {
        let request = ListPullRequestsRequest::new(self.state, self.sort, self.direction);

        self.client
            .list_pull_requests(&self.owner, &self.repo, &request)
            .await
    }
}
