use crate::post::post_repository::RepositoryError;
use crate::profile::model::Profile;
use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database};

#[async_trait]
pub trait ProfileRepository: Send + Sync + 'static {
    async fn find_by_user(&self, user: &ObjectId) -> Result<Option<Profile>, RepositoryError>;
}

pub struct MongoProfileRepository {
    collection: Collection<Profile>,
}

impl MongoProfileRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<Profile>("profiles");
        MongoProfileRepository { collection }
    }
}

#[async_trait]
impl ProfileRepository for MongoProfileRepository {
    async fn find_by_user(&self, user: &ObjectId) -> Result<Option<Profile>, RepositoryError> {
        Ok(self.collection.find_one(doc! { "user": user }).await?)
    }
}
