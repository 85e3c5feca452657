pub mod rest;
pub mod types;

use async_trait::async_trait;
use types::{FetchError, Project};

/// Source of truth for the project collection.
///
/// Implementations must return every project currently available; the
/// client does all paging itself.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<Project>, FetchError>;
}
