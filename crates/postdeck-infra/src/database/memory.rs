//! In-memory post store - the default for single-user deployments and
//! tests. Data is lost on process restart.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use postdeck_core::domain::Post;
use postdeck_core::error::RepoError;
use postdeck_core::ports::{BaseRepository, PostRepository};

/// In-memory post repository using a HashMap behind an async RwLock.
pub struct InMemoryPostRepository {
    store: RwLock<HashMap<Uuid, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, Uuid> for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn save(&self, post: Post) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        store.insert(post.id, post.clone());
        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        // Idempotent: absent ids are fine.
        store.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        let mut posts: Vec<Post> = store.values().cloned().collect();
        // Store order: publish_date ascending as raw text, unscheduled
        // (empty) first - the same order the SQL store returns.
        posts.sort_by(|a, b| {
            let a_date = a.publish_date.as_deref().unwrap_or("");
            let b_date = b.publish_date.as_deref().unwrap_or("");
            a_date.cmp(b_date)
        });
        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_on(title: &str, date: Option<&str>) -> Post {
        Post::new(
            "instagram".into(),
            title.into(),
            String::new(),
            date.map(String::from),
            None,
            String::new(),
            None,
        )
    }

    #[tokio::test]
    async fn test_save_and_find() {
        let repo = InMemoryPostRepository::new();
        let post = post_on("Launch", Some("2024-03-15"));
        let saved = repo.save(post.clone()).await.unwrap();
        assert_eq!(saved.id, post.id);

        let found = repo.find_by_id(post.id).await.unwrap().unwrap();
        assert_eq!(found.title, "Launch");
    }

    #[tokio::test]
    async fn test_save_overwrites_existing() {
        let repo = InMemoryPostRepository::new();
        let mut post = post_on("Launch", None);
        repo.save(post.clone()).await.unwrap();

        post.status = "ready".into();
        repo.save(post.clone()).await.unwrap();

        let found = repo.find_by_id(post.id).await.unwrap().unwrap();
        assert_eq!(found.status, "ready");
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repo = InMemoryPostRepository::new();
        let post = post_on("Launch", None);
        repo.save(post.clone()).await.unwrap();

        repo.delete(post.id).await.unwrap();
        assert!(repo.find_by_id(post.id).await.unwrap().is_none());

        // Deleting again (or a never-seen id) still succeeds.
        repo.delete(post.id).await.unwrap();
        repo.delete(Uuid::new_v4()).await.unwrap();
    }

    #[tokio::test]
    async fn test_list_orders_by_publish_date_unscheduled_first() {
        let repo = InMemoryPostRepository::new();
        repo.save(post_on("late", Some("2024-06-01"))).await.unwrap();
        repo.save(post_on("early", Some("2024-03-01"))).await.unwrap();
        repo.save(post_on("unscheduled", None)).await.unwrap();

        let titles: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, ["unscheduled", "early", "late"]);
    }
}
