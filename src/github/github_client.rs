use super::{request::ListPullRequestsRequest, response::PullRequest};
use crate::{
    config::Config,
    http::{self, Headers, HttpClient, ResponseHandler},
};
use anyhow::Result;

/// GitHub REST client scoped to a single run
pub struct GithubClient {
    http: HttpClient,
    api_url: String,
    token: Option<String>,
}

impl GithubClient {
    pub fn new(api_url: impl Into<String>, token: Option<String>) -> Self {
        GithubClient {
            http: HttpClient::new(),
            api_url: api_url.into(),
            token,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        GithubClient::new(&config.api_url, config.token.to_owned())
    }

    pub(super) async fn list_pull_requests(
        &self,
        owner: &str,
        repo: &str,
        request: &ListPullRequestsRequest,
    ) -> Result<Vec<PullRequest>> {
        let uri = format!("{}/repos/{}/{}/pulls", self.api_url, owner, repo);
        log::debug!("GET {} {:?}", uri, request);

        let response = self
            .http
            .get(&uri)
            .query(request)
            .default_headers(self.token.as_deref())
            .send()
            .await
            .handle()
            .await?;
        log::debug!("GET {} response: {}", uri, response);

        let pull_requests = serde_json::from_str::<Vec<PullRequest>>(&response)
            .map_err(|cause| http::Error::ParseResponseError { cause })?;

        Ok(pull_requests)
    }
}
