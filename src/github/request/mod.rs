mod list_pull_requests_request;

pub use list_pull_requests_request::{Direction, ListPullRequestsRequest, Sort, State};
