use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Post;
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (create or update).
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. Idempotent: deleting an absent id
    /// succeeds.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Post repository - the store every projection and export reads from.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// All posts in store order: `publish_date` ascending as raw text,
    /// unscheduled (empty) first. Projections and exports preserve this
    /// order, so it is part of the contract.
    async fn list(&self) -> Result<Vec<Post>, RepoError>;
}
