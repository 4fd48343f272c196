mod list_pull_requests_builder;

pub use list_pull_requests_builder::ListPullRequestsBuilder;

pub trait BuilderExecutor {
    type Output;

    async fn execute(self) -> anyhow::Result<Self::Output>;
}
