use super::types::*;
use super::ProjectStore;
use crate::config::ApiConfig;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Lists projects from the showcase REST API.
pub struct HttpProjectStore {
    client: Client,
    base_url: String,
    source: ProjectSource,
}

impl HttpProjectStore {
    pub fn new(config: &ApiConfig, source: ProjectSource) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .user_agent(config.user_agent.as_str())
            .pool_max_idle_per_host(4)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            source,
        })
    }

    pub fn source(&self) -> &ProjectSource {
        &self.source
    }

    fn url(&self) -> String {
        format!("{}{}", self.base_url, self.source.path())
    }
}

#[async_trait]
impl ProjectStore for HttpProjectStore {
    async fn fetch_all(&self) -> Result<Vec<Project>, FetchError> {
        let url = self.url();

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(format!("GET {} failed: {}", url, e)))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(FetchError::Server {
                status: Some(status.as_u16()),
                message: body,
            });
        }

        // Body read failure is transport; decode failure is server.
        let body = resp
            .text()
            .await
            .map_err(|e| FetchError::Network(format!("reading {} failed: {}", url, e)))?;

        let projects = parse_projects(&body)?;
        tracing::trace!(url = %url, count = projects.len(), "fetched project list");
        Ok(projects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_config(base_url: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.to_string(),
            request_timeout_ms: 2000,
            user_agent: "project-feed-test".to_string(),
        }
    }

    #[test]
    fn test_url_trims_trailing_slash() {
        let store = HttpProjectStore::new(&api_config("https://api.example.com//"), ProjectSource::All)
            .unwrap();
        assert_eq!(store.url(), "https://api.example.com/projects");
    }

    #[test]
    fn test_url_for_author_source() {
        let store = HttpProjectStore::new(
            &api_config("https://api.example.com"),
            ProjectSource::ByAuthor("u1".to_string()),
        )
        .unwrap();
        assert_eq!(store.url(), "https://api.example.com/user/u1/projects");
        assert_eq!(store.source(), &ProjectSource::ByAuthor("u1".to_string()));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        // Port 9 (discard) on localhost is closed on any sane test host.
        let store = HttpProjectStore::new(&api_config("http://127.0.0.1:9"), ProjectSource::All)
            .unwrap();
        let err = store.fetch_all().await.unwrap_err();
        assert!(matches!(err, FetchError::Network(_)), "got {:?}", err);
    }

    /// Integration test: hits the real showcase API.
    /// Run with: cargo test showcase_live --ignored -- --nocapture
    #[tokio::test]
    #[ignore]
    async fn showcase_live_fetch() {
        let store = HttpProjectStore::new(
            &api_config("https://peer-project-hub-backend-seven.vercel.app"),
            ProjectSource::All,
        )
        .unwrap();
        match store.fetch_all().await {
            Ok(projects) => {
                println!("Got {} projects", projects.len());
                for p in &projects {
                    println!("  {} | {} | {}", p.id, p.title, p.tags.join(", "));
                }
            }
            Err(e) => {
                println!("showcase fetch error: {}", e);
            }
        }
    }
}
