//! Repository port traits for local persistence.
//!
//! Plain keyed storage, last write wins. The SQLite adapters in
//! `infrastructure` implement these; tests use the generated mocks.

use async_trait::async_trait;

use blockbustr_domain::{AppSettings, CollectionId, MovieId, SavedMovie, Top10Collection};

use super::error::RepoError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieRepo: Send + Sync {
    /// All saved movies, newest first.
    async fn list(&self) -> Result<Vec<SavedMovie>, RepoError>;
    async fn save(&self, movie: SavedMovie) -> Result<(), RepoError>;
    async fn delete(&self, id: MovieId) -> Result<(), RepoError>;
    async fn delete_many(&self, ids: Vec<MovieId>) -> Result<(), RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CollectionRepo: Send + Sync {
    /// All collections, newest first.
    async fn list(&self) -> Result<Vec<Top10Collection>, RepoError>;
    async fn get(&self, id: CollectionId) -> Result<Option<Top10Collection>, RepoError>;
    async fn save(&self, collection: Top10Collection) -> Result<(), RepoError>;
    async fn delete(&self, id: CollectionId) -> Result<(), RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SettingsRepo: Send + Sync {
    async fn get(&self) -> Result<Option<AppSettings>, RepoError>;
    async fn save(&self, settings: AppSettings) -> Result<(), RepoError>;
}
