use super::post_controller::{
    add_comment, create_post, delete_post, get_post, like_post, list_posts, remove_comment,
    test_posts, unlike_post,
};
use crate::middleware::auth::verify_token;
use actix_web::{guard, web};
use actix_web_httpauth::middleware::HttpAuthentication;

/// `/api/posts`. Reads are public; everything that mutates goes through the
/// bearer middleware. Resources sharing a path are split by method guard so
/// only the protected method is wrapped.
pub fn post_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/posts")
            .route("/test", web::get().to(test_posts))
            .service(
                web::resource(["", "/"])
                    .guard(guard::Get())
                    .to(list_posts),
            )
            .service(
                web::resource(["", "/"])
                    .guard(guard::Post())
                    .wrap(HttpAuthentication::bearer(verify_token))
                    .to(create_post),
            )
            .service(
                web::resource("/like/{id}")
                    .wrap(HttpAuthentication::bearer(verify_token))
                    .route(web::post().to(like_post)),
            )
            .service(
                web::resource("/unlike/{id}")
                    .wrap(HttpAuthentication::bearer(verify_token))
                    .route(web::post().to(unlike_post)),
            )
            .service(
                web::resource("/comment/{id}")
                    .wrap(HttpAuthentication::bearer(verify_token))
                    .route(web::post().to(add_comment)),
            )
            .service(
                web::resource("/comment/{id}/{comment_id}")
                    .wrap(HttpAuthentication::bearer(verify_token))
                    .route(web::delete().to(remove_comment)),
            )
            .service(web::resource("/{id}").guard(guard::Get()).to(get_post))
            .service(
                web::resource("/{id}")
                    .guard(guard::Delete())
                    .wrap(HttpAuthentication::bearer(verify_token))
                    .to(delete_post),
            ),
    );
}
