use crate::session::Session;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// A user-submitted project as served by the showcase API.
///
/// The feed never mutates a project; edits and deletes go through the
/// API and show up on the next full fetch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    /// Repository URL.
    pub link: String,
    /// Deployed URL, empty when the project has none.
    #[serde(default, deserialize_with = "null_as_default")]
    pub live: String,
    #[serde(rename = "authorName", default, deserialize_with = "null_as_default")]
    pub author_name: String,
}

// Older records carry `null` instead of omitting the field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Which project collection a store lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectSource {
    /// Every project on the platform.
    All,
    /// Projects submitted by one user.
    ByAuthor(String),
}

impl ProjectSource {
    /// The signed-in user's own projects.
    pub fn mine(session: &Session) -> Self {
        ProjectSource::ByAuthor(session.uid.clone())
    }

    /// Request path relative to the API base URL.
    pub fn path(&self) -> String {
        match self {
            ProjectSource::All => "/projects".to_string(),
            ProjectSource::ByAuthor(user_id) => format!("/user/{}/projects", user_id),
        }
    }
}

/// Errors surfaced by a failed fetch. Neither is retried automatically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Transport failure, no response received.
    #[error("network error: {0}")]
    Network(String),

    /// A response arrived but was a non-success status or could not be decoded.
    #[error("server error{}: {message}", status_suffix(.status))]
    Server {
        status: Option<u16>,
        message: String,
    },
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" ({})", s)).unwrap_or_default()
}

impl FetchError {
    pub fn malformed(message: impl Into<String>) -> Self {
        FetchError::Server {
            status: None,
            message: message.into(),
        }
    }
}

/// Decode a project listing. Anything other than a top-level array of
/// projects is a malformed payload.
pub fn parse_projects(json: &str) -> Result<Vec<Project>, FetchError> {
    serde_json::from_str(json)
        .map_err(|e| FetchError::malformed(format!("failed to parse project list: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_json() -> &'static str {
        r#"[
            {
                "_id": "6750a1",
                "title": "Chat App",
                "description": "Realtime messaging",
                "tags": ["React.js", "Socket.io"],
                "link": "https://github.com/a/chat",
                "live": "https://chat.example.com",
                "authorName": "Asha",
                "__v": 0
            },
            {
                "_id": "6750a2",
                "title": "Weather",
                "description": "Forecast dashboard",
                "link": "https://github.com/b/weather",
                "authorName": "Ravi"
            },
            {
                "_id": "6750a3",
                "title": "ChatBot",
                "description": "LLM helper",
                "tags": null,
                "link": "https://github.com/c/bot",
                "live": null,
                "authorName": null
            }
        ]"#
    }

    #[test]
    fn test_parse_projects_count_and_order() {
        let projects = parse_projects(fixture_json()).unwrap();
        let ids: Vec<_> = projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["6750a1", "6750a2", "6750a3"]);
    }

    #[test]
    fn test_parse_projects_field_mapping() {
        let projects = parse_projects(fixture_json()).unwrap();
        let chat = &projects[0];
        assert_eq!(chat.title, "Chat App");
        assert_eq!(chat.tags, vec!["React.js", "Socket.io"]);
        assert_eq!(chat.live, "https://chat.example.com");
        assert_eq!(chat.author_name, "Asha");
    }

    #[test]
    fn test_parse_projects_missing_optional_fields() {
        let projects = parse_projects(fixture_json()).unwrap();
        assert!(projects[1].tags.is_empty());
        assert!(projects[1].live.is_empty());
    }

    #[test]
    fn test_parse_projects_null_optional_fields() {
        let projects = parse_projects(fixture_json()).unwrap();
        assert!(projects[2].tags.is_empty());
        assert!(projects[2].live.is_empty());
        assert!(projects[2].author_name.is_empty());
    }

    #[test]
    fn test_parse_projects_empty_array() {
        assert!(parse_projects("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_projects_rejects_non_array() {
        let err = parse_projects(r#"{"success": false, "data": "db down"}"#).unwrap_err();
        assert!(matches!(err, FetchError::Server { status: None, .. }));
    }

    #[test]
    fn test_parse_projects_rejects_missing_title() {
        let json = r#"[{"_id": "1", "description": "d", "link": "l"}]"#;
        assert!(parse_projects(json).is_err());
    }

    #[test]
    fn test_source_paths() {
        assert_eq!(ProjectSource::All.path(), "/projects");
        assert_eq!(
            ProjectSource::ByAuthor("uid-42".to_string()).path(),
            "/user/uid-42/projects"
        );
    }

    #[test]
    fn test_source_mine_uses_session_uid() {
        let session = Session {
            uid: "fb-123".to_string(),
            username: "asha".to_string(),
            email: "asha@example.com".to_string(),
        };
        assert_eq!(
            ProjectSource::mine(&session),
            ProjectSource::ByAuthor("fb-123".to_string())
        );
    }

    #[test]
    fn test_fetch_error_display() {
        let err = FetchError::Server {
            status: Some(503),
            message: "unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "server error (503): unavailable");
        assert_eq!(
            FetchError::malformed("bad json").to_string(),
            "server error: bad json"
        );
        assert_eq!(
            FetchError::Network("connection refused".to_string()).to_string(),
            "network error: connection refused"
        );
    }
}
