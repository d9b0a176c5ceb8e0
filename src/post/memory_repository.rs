//! In-memory post store. Data lives behind an async [`RwLock`] and is lost
//! when the process exits.

use crate::post::post_model::Post;
use crate::post::post_repository::{PostRepository, RepositoryError};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemoryPostRepository {
    posts: RwLock<HashMap<ObjectId, Post>>,
}

impl MemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostRepository for MemoryPostRepository {
    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Post>, RepositoryError> {
        Ok(self.posts.read().await.get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepositoryError> {
        let mut posts: Vec<Post> = self.posts.read().await.values().cloned().collect();
        // ObjectIds embed their creation second, so they break ties in date.
        posts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id)));
        Ok(posts)
    }

    async fn save(&self, post: &Post) -> Result<Post, RepositoryError> {
        self.posts.write().await.insert(post.id, post.clone());
        Ok(post.clone())
    }

    async fn delete(&self, id: &ObjectId) -> Result<bool, RepositoryError> {
        Ok(self.posts.write().await.remove(id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::post_model::PostInput;
    use mongodb::bson;

    fn post_at(millis: i64) -> Post {
        let mut post = Post::new(
            ObjectId::new(),
            PostInput {
                text: Some(format!("post at {millis}")),
                ..Default::default()
            },
        );
        post.date = bson::DateTime::from_millis(millis);
        post
    }

    #[actix_web::test]
    async fn find_all_returns_newest_first() {
        let repo = MemoryPostRepository::new();
        let old = post_at(1_000);
        let newest = post_at(3_000);
        let middle = post_at(2_000);
        for post in [&old, &newest, &middle] {
            repo.save(post).await.unwrap();
        }

        let ids: Vec<ObjectId> = repo.find_all().await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![newest.id, middle.id, old.id]);
    }

    #[actix_web::test]
    async fn save_replaces_existing_document() {
        let repo = MemoryPostRepository::new();
        let mut post = post_at(1_000);
        repo.save(&post).await.unwrap();

        post.text = "edited".into();
        repo.save(&post).await.unwrap();

        assert_eq!(repo.find_all().await.unwrap().len(), 1);
        let stored = repo.find_by_id(&post.id).await.unwrap().unwrap();
        assert_eq!(stored.text, "edited");
    }

    #[actix_web::test]
    async fn delete_reports_whether_anything_was_removed() {
        let repo = MemoryPostRepository::new();
        let post = post_at(1_000);
        repo.save(&post).await.unwrap();

        assert!(repo.delete(&post.id).await.unwrap());
        assert!(!repo.delete(&post.id).await.unwrap());
        assert!(repo.find_by_id(&post.id).await.unwrap().is_none());
    }
}
