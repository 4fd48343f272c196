use crate::{
    actions,
    config::Config,
    github::{self, GithubClient},
    grouping, wait,
};
use anyhow::{Context, Result};
use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;

const TIME_OUTPUT: &str = "time";

pub async fn run(config: &Config) -> Result<()> {
    actions::debug(&format!("Waiting {} milliseconds ...", config.milliseconds));
    let duration = wait::parse_milliseconds(&config.milliseconds)?;

    actions::debug(&time_string(Local::now()));
    wait::wait(duration).await;
    actions::debug(&time_string(Local::now()));

    let client = GithubClient::from_config(config);

    log::info!(
        "Fetching merged pull requests of {}/{}",
        config.owner,
        config.repo
    );
    let pull_requests = github::merged_pull_requests(&client, &config.owner, &config.repo)
        .await
        .with_context(|| {
            format!(
                "Cannot list pull requests of {}/{}",
                config.owner, config.repo
            )
        })?;
    actions::debug(&format!(
        "Pull requests: {}",
        serde_json::to_string(&pull_requests)?
    ));

    let grouped = grouping::group_by_assignee(&pull_requests);
    actions::debug(&format!("Filtered pr: {}", serde_json::to_string(&grouped)?));

    log::info!(
        "Grouped {} merged pull requests under {} assignees",
        grouped.total(),
        grouped.len()
    );

    actions::set_output(
        config.output_file.as_deref(),
        TIME_OUTPUT,
        &time_string(Local::now()),
    )
    .await
    .context("Cannot set the time output")?;

    Ok(())
}

/// Wall clock time of day, e.g. `14:39:07 GMT+0900`
pub fn time_string<Tz>(time: DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    time.format("%H:%M:%S GMT%z").to_string()
}
