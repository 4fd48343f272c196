mod command;
mod file_command;

use command::Command;

use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing file at path: {path}")]
    MissingFile { path: String },
    #[error("Failed to write to file at path: {path}")]
    WriteError {
        path: String,
        #[source]
        cause: std::io::Error,
    },
    #[error("Unexpected input: name should not contain the delimiter {delimiter}")]
    DelimiterInName { name: String, delimiter: String },
    #[error("Unexpected input: value for {name} should not contain the delimiter {delimiter}")]
    DelimiterInValue { name: String, delimiter: String },
}

/// Environment variable the runner uses to hand a step input over
pub fn input_variable(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}

/// Reads a step input through `lookup`. Missing inputs read as an empty
/// string, surrounding whitespace is trimmed.
pub fn get_input<F>(lookup: F, name: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(&input_variable(name))
        .map(|value| value.trim().to_owned())
        .unwrap_or_default()
}

pub fn debug(message: &str) {
    Command::new("debug", message).issue();
}

pub fn error(message: &str) {
    Command::new("error", message).issue();
}

/// Reports the step as failed. The caller is in charge of the exit code.
pub fn set_failed(message: &str) {
    error(message);
}

/// Publishes a step output. Goes through the output file when the runner
/// provides one, through the legacy `set-output` command otherwise.
pub async fn set_output(output_file: Option<&Path>, name: &str, value: &str) -> Result<(), Error> {
    match output_file {
        Some(path) => {
            let message = file_command::key_value_message(name, value, &file_command::delimiter())?;
            file_command::issue(path, &message).await
        }
        None => {
            set_output_command(name, value).issue();
            Ok(())
        }
    }
}

fn set_output_command<'a>(name: &'a str, value: &'a str) -> Command<'a> {
    Command::new("set-output", value).property("name", name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::{collections::HashMap, fs};
    use tempdir::TempDir;

    #[test]
    fn should_build_the_input_variable_name() {
        assert_eq!(input_variable("milliseconds"), "INPUT_MILLISECONDS");
        assert_eq!(input_variable("wait time"), "INPUT_WAIT_TIME");
    }

    #[test]
    fn should_read_a_trimmed_input() {
        let env = HashMap::from([("INPUT_MILLISECONDS".to_owned(), " 250\n".to_owned())]);

        let value = get_input(|key| env.get(key).cloned(), "milliseconds");

        assert_eq!(value, "250");
    }

    #[test]
    fn should_read_a_missing_input_as_empty() {
        let value = get_input(|_| None, "milliseconds");

        assert_eq!(value, "");
    }

    #[tokio::test]
    async fn should_write_the_output_to_the_output_file() -> Result<()> {
        let dir = TempDir::new("actions")?;
        let path = dir.path().join("output");
        fs::write(&path, "")?;

        set_output(Some(&path), "time", "10:11:12 GMT+0000").await?;

        let content = fs::read_to_string(&path)?;
        let lines = content.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("time<<ghadelimiter_"));
        assert_eq!(lines[1], "10:11:12 GMT+0000");
        assert_eq!(lines[0], format!("time<<{}", lines[2]));

        dir.close()?;
        Ok(())
    }

    #[test]
    fn should_render_the_set_output_command() {
        let command = set_output_command("time", "10:11:12 GMT+0000");

        assert_eq!(command.to_string(), "::set-output name=time::10:11:12 GMT+0000");
    }

    #[test]
    fn should_escape_a_multiline_value_in_the_set_output_command() {
        let command = set_output_command("time", "a\nb");

        assert_eq!(command.to_string(), "::set-output name=time::a%0Ab");
    }

    #[tokio::test]
    async fn should_fall_back_to_the_set_output_command() -> Result<()> {
        set_output(None, "time", "10:11:12 GMT+0000").await?;

        Ok(())
    }
}
