use std::{num::ParseIntError, time::Duration};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("milliseconds not a number: {value:?}")]
    NotANumber {
        value: String,
        #[source]
        cause: ParseIntError,
    },
}

/// Parses a base 10, non negative millisecond count
pub fn parse_milliseconds(value: &str) -> Result<Duration, Error> {
    let millis = value
        .trim()
        .parse::<u64>()
        .map_err(|cause| Error::NotANumber {
            value: value.to_owned(),
            cause,
        })?;

    Ok(Duration::from_millis(millis))
}

pub async fn wait(duration: Duration) {
    if duration.is_zero() {
        return;
    }

    tokio::time::sleep(duration).await;
}
