use crate::post::post_repository::RepositoryError;
use crate::profile::model::Profile;
use crate::profile::repository::ProfileRepository;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemoryProfileRepository {
    profiles: RwLock<HashMap<ObjectId, Profile>>,
}

impl MemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Give `user` a profile so profile-gated operations accept them.
    pub async fn create_for(&self, user: ObjectId) -> Profile {
        let profile = Profile {
            id: ObjectId::new(),
            user,
        };
        self.profiles.write().await.insert(user, profile.clone());
        profile
    }
}

#[async_trait]
impl ProfileRepository for MemoryProfileRepository {
    async fn find_by_user(&self, user: &ObjectId) -> Result<Option<Profile>, RepositoryError> {
        Ok(self.profiles.read().await.get(user).cloned())
    }
}
