use reqwest::{
    header::{ACCEPT, USER_AGENT},
    Client, RequestBuilder, Response,
};
use serde::Deserialize;
use std::ops::Deref;
use thiserror::Error;

const USER_AGENT_VALUE: &str = "merged-pr-grouper";
const GITHUB_API_VERSION: &str = "2022-11-28";

#[derive(Clone, Debug, Default)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Self {
        HttpClient {
            client: Client::new(),
        }
    }
}

impl Deref for HttpClient {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

pub trait Headers {
    fn default_headers(self, token: Option<&str>) -> RequestBuilder;
}

impl Headers for RequestBuilder {
    fn default_headers(self, token: Option<&str>) -> RequestBuilder {
        let builder = self
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
            .header(USER_AGENT, USER_AGENT_VALUE);

        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("{status}: {message}")]
    GenericResponseError { status: u16, message: String },
    #[error("Failed to send request")]
    RequestError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to read response text")]
    ReadResponseTextError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to parse response")]
    ParseResponseError {
        #[source]
        cause: serde_json::Error,
    },
}

/// Error payload returned by the GitHub API on non 2xx responses
#[derive(Deserialize)]
struct ErrorResponse {
    message: String,
}

pub trait ResponseHandler {
    /// Turns a sent request into the response body, or into an error
    /// carrying the upstream message for non 2xx statuses
    async fn handle(self) -> Result<String, Error>;
}

impl ResponseHandler for reqwest::Result<Response> {
    async fn handle(self) -> Result<String, Error> {
        let response = self.map_err(|cause| Error::RequestError { cause })?;
        let status = response.status();

        let text = response
            .text()
            .await
            .map_err(|cause| Error::ReadResponseTextError { cause })?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorResponse>(&text)
                .map(|response| response.message)
                .unwrap_or(text);

            return Err(Error::GenericResponseError {
                status: status.as_u16(),
                message,
            });
        }

        Ok(text)
    }
}
