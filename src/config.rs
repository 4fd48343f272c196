use crate::actions;
use std::{env, path::PathBuf};

const DEFAULT_OWNER: &str = "deresmos";
const DEFAULT_REPO: &str = "test-action";
const DEFAULT_API_URL: &str = "https://api.github.com";

const MILLISECONDS_INPUT: &str = "milliseconds";

/// Everything a run needs, read once from the environment
#[derive(Debug, Clone)]
pub struct Config {
    pub milliseconds: String,
    pub owner: String,
    pub repo: String,
    pub token: Option<String>,
    pub api_url: String,
    pub output_file: Option<PathBuf>,
    pub debug: bool,
}

impl Config {
    pub fn load() -> Config {
        Config::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());

        Config {
            milliseconds: actions::get_input(&lookup, MILLISECONDS_INPUT),
            owner: non_empty("OWNER").unwrap_or_else(Config::default_owner),
            repo: non_empty("REPO").unwrap_or_else(Config::default_repo),
            token: non_empty("GITHUB_TOKEN"),
            api_url: non_empty("GITHUB_API_URL")
                .map(|url| url.trim_end_matches('/').to_owned())
                .unwrap_or_else(Config::default_api_url),
            output_file: non_empty("GITHUB_OUTPUT").map(PathBuf::from),
            debug: lookup("RUNNER_DEBUG").is_some_and(|value| value == "1")
                || lookup("ACTIONS_STEP_DEBUG").is_some_and(|value| value == "true"),
        }
    }

    fn default_owner() -> String {
        DEFAULT_OWNER.to_owned()
    }

    fn default_repo() -> String {
        DEFAULT_REPO.to_owned()
    }

    fn default_api_url() -> String {
        DEFAULT_API_URL.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let env = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect::<HashMap<_, _>>();

        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn should_use_defaults_when_nothing_is_set() {
        let config = config_from(&[]);

        assert_eq!(config.milliseconds, "");
        assert_eq!(config.owner, "deresmos");
        assert_eq!(config.repo, "test-action");
        assert_eq!(config.token, None);
        assert_eq!(config.api_url, "https://api.github.com");
        assert_eq!(config.output_file, None);
        assert!(!config.debug);
    }

    #[test]
    fn should_read_overrides() {
        let config = config_from(&[
            ("INPUT_MILLISECONDS", "500"),
            ("OWNER", "octocat"),
            ("REPO", "hello-world"),
            ("GITHUB_TOKEN", "secret"),
            ("GITHUB_API_URL", "https://ghe.example.com/api/v3/"),
            ("GITHUB_OUTPUT", "/tmp/output"),
        ]);

        assert_eq!(config.milliseconds, "500");
        assert_eq!(config.owner, "octocat");
        assert_eq!(config.repo, "hello-world");
        assert_eq!(config.token.as_deref(), Some("secret"));
        assert_eq!(config.api_url, "https://ghe.example.com/api/v3");
        assert_eq!(config.output_file, Some(PathBuf::from("/tmp/output")));
    }

    #[test]
    fn should_treat_empty_owner_and_repo_as_unset() {
        let config = config_from(&[("OWNER", ""), ("REPO", ""), ("GITHUB_TOKEN", "")]);

        assert_eq!(config.owner, "deresmos");
        assert_eq!(config.repo, "test-action");
        assert_eq!(config.token, None);
    }

    #[test]
    fn should_enable_debug_from_either_flag() {
        assert!(config_from(&[("RUNNER_DEBUG", "1")]).debug);
        assert!(config_from(&[("ACTIONS_STEP_DEBUG", "true")]).debug);
        assert!(!config_from(&[("RUNNER_DEBUG", "0")]).debug);
    }
}
