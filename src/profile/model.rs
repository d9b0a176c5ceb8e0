use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Only the fields this service reads from the `profiles` collection.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Profile {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub user: ObjectId,
}
