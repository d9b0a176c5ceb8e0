use chrono::{DateTime, SecondsFormat, Utc};
use mongodb::bson::{self, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// A `posts` collection document.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub user: ObjectId,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Most recent first.
    #[serde(default)]
    pub likes: Vec<Like>,
    /// Most recent first.
    #[serde(default)]
    pub comments: Vec<Comment>,
    pub date: bson::DateTime,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Like {
    pub user: ObjectId,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub user: ObjectId,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub date: bson::DateTime,
}

impl Post {
    pub fn new(user: ObjectId, input: PostInput) -> Self {
        Post {
            id: ObjectId::new(),
            user,
            text: input.text.unwrap_or_default(),
            name: input.name,
            avatar: input.avatar,
            likes: Vec::new(),
            comments: Vec::new(),
            date: bson::DateTime::now(),
        }
    }

    pub fn is_liked_by(&self, user: &ObjectId) -> bool {
        self.likes.iter().any(|like| like.user == *user)
    }
}

impl Comment {
    pub fn new(user: ObjectId, input: PostInput) -> Self {
        Comment {
            id: ObjectId::new(),
            user,
            text: input.text.unwrap_or_default(),
            name: input.name,
            avatar: input.avatar,
            date: bson::DateTime::now(),
        }
    }
}

/// Body of `POST /` and `POST /comment/{id}`. Every field is optional here so
/// that missing values surface as validation errors instead of parse errors.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct PostInput {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

// API representations: hex ids and RFC 3339 timestamps.

#[derive(Debug, Serialize)]
pub struct PostView {
    #[serde(rename = "_id")]
    pub id: String,
    pub user: String,
    pub text: String,
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub likes: Vec<LikeView>,
    pub comments: Vec<CommentView>,
    pub date: String,
}

#[derive(Debug, Serialize)]
pub struct LikeView {
    pub user: String,
}

#[derive(Debug, Serialize)]
pub struct CommentView {
    #[serde(rename = "_id")]
    pub id: String,
    pub user: String,
    pub text: String,
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub date: String,
}

fn format_date(date: bson::DateTime) -> String {
    DateTime::<Utc>::from_timestamp_millis(date.timestamp_millis())
        .unwrap_or_default()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl From<&Like> for LikeView {
    fn from(like: &Like) -> Self {
        LikeView {
            user: like.user.to_hex(),
        }
    }
}

impl From<&Comment> for CommentView {
    fn from(comment: &Comment) -> Self {
        CommentView {
            id: comment.id.to_hex(),
            user: comment.user.to_hex(),
            text: comment.text.clone(),
            name: comment.name.clone(),
            avatar: comment.avatar.clone(),
            date: format_date(comment.date),
        }
    }
}

impl From<&Post> for PostView {
    fn from(post: &Post) -> Self {
        PostView {
            id: post.id.to_hex(),
            user: post.user.to_hex(),
            text: post.text.clone(),
            name: post.name.clone(),
            avatar: post.avatar.clone(),
            likes: post.likes.iter().map(LikeView::from).collect(),
            comments: post.comments.iter().map(CommentView::from).collect(),
            date: format_date(post.date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_renders_hex_ids_and_rfc3339_dates() {
        let user = ObjectId::new();
        let mut post = Post::new(
            user,
            PostInput {
                text: Some("hello".into()),
                name: Some("A".into()),
                avatar: None,
            },
        );
        post.date = bson::DateTime::from_millis(1_700_000_000_123);
        post.likes.push(Like { user });

        let json = serde_json::to_value(PostView::from(&post)).unwrap();
        assert_eq!(json["user"], user.to_hex());
        assert_eq!(json["_id"], post.id.to_hex());
        assert_eq!(json["likes"][0]["user"], user.to_hex());
        assert_eq!(json["date"], "2023-11-14T22:13:20.123Z");
    }

    #[test]
    fn documents_without_likes_or_comments_deserialize() {
        let id = ObjectId::new();
        let user = ObjectId::new();
        let doc = bson::doc! {
            "_id": id,
            "user": user,
            "text": "legacy",
            "date": bson::DateTime::from_millis(0),
        };

        let post: Post = bson::from_document(doc).unwrap();
        assert!(post.likes.is_empty());
        assert!(post.comments.is_empty());
        assert!(post.name.is_none());
    }
}
