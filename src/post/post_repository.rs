//! Persistence contract for posts.
//!
//! [`PostService`](super::post_service::PostService) only talks to the store
//! through [`PostRepository`], so MongoDB can be swapped for the in-memory
//! store in tests or for ephemeral runs.

use crate::post::post_model::Post;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),
}

#[async_trait]
pub trait PostRepository: Send + Sync + 'static {
    /// `None` when no post has this id.
    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Post>, RepositoryError>;

    /// Every post, newest `date` first.
    async fn find_all(&self) -> Result<Vec<Post>, RepositoryError>;

    /// Insert or replace the whole document keyed by `post.id`.
    async fn save(&self, post: &Post) -> Result<Post, RepositoryError>;

    /// Returns whether a document was removed.
    async fn delete(&self, id: &ObjectId) -> Result<bool, RepositoryError>;
}

pub struct MongoPostRepository {
    collection: Collection<Post>,
}

impl MongoPostRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<Post>("posts");
        MongoPostRepository { collection }
    }
}

#[async_trait]
impl PostRepository for MongoPostRepository {
    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Post>, RepositoryError> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepositoryError> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "date": -1 })
            .await?;

        let posts: Vec<Post> = cursor.try_collect().await?;
        Ok(posts)
    }

    async fn save(&self, post: &Post) -> Result<Post, RepositoryError> {
        self.collection
            .replace_one(doc! { "_id": post.id }, post)
            .upsert(true)
            .await?;

        Ok(post.clone())
    }

    async fn delete(&self, id: &ObjectId) -> Result<bool, RepositoryError> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}
