use super::Error;
use std::{io::ErrorKind, path::Path};
use tokio::{fs::OpenOptions, io::AsyncWriteExt};

const DELIMITER_PREFIX: &str = "ghadelimiter_";

pub fn delimiter() -> String {
    let nanos = chrono::Utc::now()
        .timestamp_nanos_opt()
        .unwrap_or_default();

    format!("{}{}_{:x}", DELIMITER_PREFIX, std::process::id(), nanos)
}

/// Formats a key/value pair as a heredoc record. Neither side may contain
/// the delimiter.
pub fn key_value_message(key: &str, value: &str, delimiter: &str) -> Result<String, Error> {
    if key.contains(delimiter) {
        return Err(Error::DelimiterInName {
            name: key.to_owned(),
            delimiter: delimiter.to_owned(),
        });
    }

    if value.contains(delimiter) {
        return Err(Error::DelimiterInValue {
            name: key.to_owned(),
            delimiter: delimiter.to_owned(),
        });
    }

    Ok(format!("{key}<<{delimiter}\n{value}\n{delimiter}"))
}

/// Appends one record to a runner file. The file must already exist.
pub async fn issue(path: &Path, message: &str) -> Result<(), Error> {
    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .await
        .map_err(|cause| match cause.kind() {
            ErrorKind::NotFound => Error::MissingFile {
                path: path.display().to_string(),
            },
            _ => Error::WriteError {
                path: path.display().to_string(),
                cause,
            },
        })?;

    file.write_all(format!("{}\n", message).as_bytes())
        .await
        .map_err(|cause| Error::WriteError {
            path: path.display().to_string(),
            cause,
        })?;

    file.flush().await.map_err(|cause| Error::WriteError {
        path: path.display().to_string(),
        cause,
    })?;

    Ok(())
}
