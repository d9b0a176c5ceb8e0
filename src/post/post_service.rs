use crate::post::post_model::{Comment, Like, Post, PostInput};
use crate::post::post_repository::{PostRepository, RepositoryError};
use crate::profile::repository::ProfileRepository;
use crate::utils::error::CustomError;
use crate::utils::post_validation::validate_post_input;
use log::{debug, error};
use mongodb::bson::oid::ObjectId;
use std::sync::Arc;

fn post_not_found() -> CustomError {
    CustomError::not_found("postnotfound", "No post found")
}

/// Log a store failure and report it to the caller as `fallback`.
fn store_failure(
    operation: &'static str,
    fallback: CustomError,
) -> impl FnOnce(RepositoryError) -> CustomError {
    move |e| {
        error!("{} failed: {}", operation, e);
        fallback
    }
}

/// Malformed ids cannot name a stored post, so they read as "not found".
fn parse_post_id(raw: &str, not_found: fn() -> CustomError) -> Result<ObjectId, CustomError> {
    ObjectId::parse_str(raw).map_err(|_| not_found())
}

pub struct PostService {
    posts: Arc<dyn PostRepository>,
    profiles: Arc<dyn ProfileRepository>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepository>, profiles: Arc<dyn ProfileRepository>) -> Self {
        PostService { posts, profiles }
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>, CustomError> {
        self.posts.find_all().await.map_err(store_failure(
            "list posts",
            CustomError::not_found("noPostsfound", "No posts found"),
        ))
    }

    pub async fn get_post(&self, id: &str) -> Result<Post, CustomError> {
        fn not_found() -> CustomError {
            CustomError::not_found("noPostFound", "No post found with that id")
        }

        let post_id = parse_post_id(id, not_found)?;
        self.posts
            .find_by_id(&post_id)
            .await
            .map_err(store_failure("get post", not_found()))?
            .ok_or_else(not_found)
    }

    pub async fn create_post(&self, user: ObjectId, input: PostInput) -> Result<Post, CustomError> {
        let outcome = validate_post_input(&input);
        if !outcome.is_valid {
            return Err(CustomError::ValidationError(outcome.errors));
        }

        let post = Post::new(user, input);
        let saved = self
            .posts
            .save(&post)
            .await
            .map_err(store_failure("create post", post_not_found()))?;

        debug!("user {} created post {}", user, saved.id);
        Ok(saved)
    }

    pub async fn delete_post(&self, user: ObjectId, id: &str) -> Result<(), CustomError> {
        self.require_profile(&user).await?;
        let post = self.find_post(id).await?;

        if post.user != user {
            return Err(CustomError::unauthorized(
                "notauthorized",
                "User not authorized",
            ));
        }

        let deleted = self
            .posts
            .delete(&post.id)
            .await
            .map_err(store_failure("delete post", post_not_found()))?;
        if !deleted {
            return Err(post_not_found());
        }

        debug!("user {} deleted post {}", user, post.id);
        Ok(())
    }

    pub async fn like_post(&self, user: ObjectId, id: &str) -> Result<Post, CustomError> {
        self.require_profile(&user).await?;
        let mut post = self.find_post(id).await?;

        if post.is_liked_by(&user) {
            return Err(CustomError::conflict(
                "alreadyliked",
                "User already liked this post",
            ));
        }

        post.likes.insert(0, Like { user });
        self.save(&post, "like post").await
    }

    pub async fn unlike_post(&self, user: ObjectId, id: &str) -> Result<Post, CustomError> {
        self.require_profile(&user).await?;
        let mut post = self.find_post(id).await?;

        let Some(index) = post.likes.iter().position(|like| like.user == user) else {
            return Err(CustomError::conflict("notliked", "User has not yet liked"));
        };

        post.likes.remove(index);
        self.save(&post, "unlike post").await
    }

    pub async fn add_comment(
        &self,
        user: ObjectId,
        id: &str,
        input: PostInput,
    ) -> Result<Post, CustomError> {
        let outcome = validate_post_input(&input);
        if !outcome.is_valid {
            return Err(CustomError::ValidationError(outcome.errors));
        }

        let mut post = self.find_post(id).await?;
        post.comments.insert(0, Comment::new(user, input));
        self.save(&post, "add comment").await
    }

    pub async fn remove_comment(&self, id: &str, comment_id: &str) -> Result<Post, CustomError> {
        fn comment_missing() -> CustomError {
            CustomError::not_found("commentnotexists", "Comment does not exist")
        }

        let mut post = self.find_post(id).await?;
        let comment_id = ObjectId::parse_str(comment_id).map_err(|_| comment_missing())?;

        let index = post
            .comments
            .iter()
            .position(|comment| comment.id == comment_id)
            .ok_or_else(comment_missing)?;

        post.comments.remove(index);
        self.save(&post, "remove comment").await
    }

    async fn find_post(&self, id: &str) -> Result<Post, CustomError> {
        let post_id = parse_post_id(id, post_not_found)?;
        self.posts
            .find_by_id(&post_id)
            .await
            .map_err(store_failure("find post", post_not_found()))?
            .ok_or_else(post_not_found)
    }

    async fn save(&self, post: &Post, operation: &'static str) -> Result<Post, CustomError> {
        self.posts
            .save(post)
            .await
            .map_err(store_failure(operation, post_not_found()))
    }

    async fn require_profile(&self, user: &ObjectId) -> Result<(), CustomError> {
        fn no_profile() -> CustomError {
            CustomError::not_found("noprofile", "There is no profile for this user")
        }

        self.profiles
            .find_by_user(user)
            .await
            .map_err(store_failure("find profile", no_profile()))?
            .map(|_| ())
            .ok_or_else(no_profile)
    }
}
