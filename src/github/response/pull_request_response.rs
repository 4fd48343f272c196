use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub login: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
}

/// The part of a pull request listing entry this crate reads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullRequest {
    pub id: u64,
    #[serde(default)]
    pub number: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub state: String,
    pub updated_at: Option<DateTime<Utc>>,
    pub merged_at: Option<DateTime<Utc>>,
    pub assignee: Option<User>,
    #[serde(default)]
    pub labels: Vec<Label>,
}

impl PullRequest {
    pub fn is_merged(&self) -> bool {
        self.merged_at.is_some()
    }

    pub fn assignee_login(&self) -> Option<&str> {
        self.assignee.as_ref().map(|user| user.login.as_str())
    }

    pub fn label_names(&self) -> Vec<String> {
        self.labels.iter().map(|label| label.name.to_owned()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn should_parse_a_listing_entry_and_ignore_unknown_fields() -> Result<()> {
        let json = r#"{
            "id": 1296269,
            "number": 1347,
            "title": "Amazing new feature",
            "state": "closed",
            "node_id": "MDExOlB1bGxSZXF1ZXN0MQ==",
            "updated_at": "2011-01-26T19:01:12Z",
            "merged_at": "2011-01-26T19:01:12Z",
            "assignee": { "login": "octocat", "id": 1 },
            "labels": [
                { "id": 208045946, "name": "bug", "color": "f29513" },
                { "id": 208045947, "name": "enhancement", "color": "a2eeef" }
            ]
        }"#;

        let pr = serde_json::from_str::<PullRequest>(json)?;

        assert_eq!(pr.id, 1296269);
        assert_eq!(pr.number, 1347);
        assert!(pr.is_merged());
        assert_eq!(pr.assignee_login(), Some("octocat"));
        assert_eq!(pr.label_names(), vec!["bug", "enhancement"]);

        Ok(())
    }

    #[test]
    fn should_parse_null_merge_date_and_assignee() -> Result<()> {
        let json = r#"{ "id": 7, "merged_at": null, "assignee": null, "updated_at": null }"#;

        let pr = serde_json::from_str::<PullRequest>(json)?;

        assert!(!pr.is_merged());
        assert_eq!(pr.assignee_login(), None);
        assert!(pr.labels.is_empty());

        Ok(())
    }
}
