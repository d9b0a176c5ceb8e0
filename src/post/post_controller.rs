use crate::middleware::auth::AuthUser;
use crate::post::post_model::{PostInput, PostView};
use crate::post::post_service::PostService;
use crate::utils::error::CustomError;
use actix_web::{HttpResponse, web};
use serde_json::json;

// GET /test
pub async fn test_posts() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "msg": "Posts Works" }))
}

// GET /
pub async fn list_posts(post_service: web::Data<PostService>) -> Result<HttpResponse, CustomError> {
    let posts = post_service.list_posts().await?;
    let views: Vec<PostView> = posts.iter().map(PostView::from).collect();
    Ok(HttpResponse::Ok().json(views))
}

// GET /{id}
pub async fn get_post(
    post_id: web::Path<String>,
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, CustomError> {
    let post = post_service.get_post(&post_id).await?;
    Ok(HttpResponse::Ok().json(PostView::from(&post)))
}

// POST /
pub async fn create_post(
    user: AuthUser,
    post_service: web::Data<PostService>,
    body: web::Json<PostInput>,
) -> Result<HttpResponse, CustomError> {
    let post = post_service.create_post(user.id, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(PostView::from(&post)))
}

// DELETE /{id}
pub async fn delete_post(
    user: AuthUser,
    post_id: web::Path<String>,
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, CustomError> {
    post_service.delete_post(user.id, &post_id).await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true })))
}

// POST /like/{id}
pub async fn like_post(
    user: AuthUser,
    post_id: web::Path<String>,
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, CustomError> {
    let post = post_service.like_post(user.id, &post_id).await?;
    Ok(HttpResponse::Ok().json(PostView::from(&post)))
}

// POST /unlike/{id}
pub async fn unlike_post(
    user: AuthUser,
    post_id: web::Path<String>,
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, CustomError> {
    let post = post_service.unlike_post(user.id, &post_id).await?;
    Ok(HttpResponse::Ok().json(PostView::from(&post)))
}

// POST /comment/{id}
pub async fn add_comment(
    user: AuthUser,
    post_id: web::Path<String>,
    post_service: web::Data<PostService>,
    body: web::Json<PostInput>,
) -> Result<HttpResponse, CustomError> {
    let post = post_service
        .add_comment(user.id, &post_id, body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(PostView::from(&post)))
}

// DELETE /comment/{id}/{comment_id}
pub async fn remove_comment(
    _user: AuthUser,
    path: web::Path<(String, String)>,
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, CustomError> {
    let (post_id, comment_id) = path.into_inner();
    let post = post_service.remove_comment(&post_id, &comment_id).await?;
    Ok(HttpResponse::Ok().json(PostView::from(&post)))
}
