use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum State {
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sort {
    Updated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Desc,
}

/// Query string of `GET /repos/{owner}/{repo}/pulls`
#[derive(Debug, Default, Serialize)]
pub struct ListPullRequestsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<State>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<Sort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
}

impl ListPullRequestsRequest {
    pub fn new(state: Option<State>, sort: Option<Sort>, direction: Option<Direction>) -> Self {
        Self {
            state,
            sort,
            direction,
        }
    }
}
