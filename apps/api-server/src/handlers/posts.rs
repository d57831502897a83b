//! Post CRUD handlers - thin wrappers around the post store.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use postdeck_core::domain::Post;
use postdeck_core::ports::{BaseRepository, PostRepository};
use postdeck_shared::dto::{CreatePostRequest, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/posts
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/posts/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("post with id {} not found", id)))?;
    Ok(HttpResponse::Ok().json(post))
}

/// POST /api/posts
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let post = Post::new(
        req.platform,
        req.title,
        req.description,
        req.publish_date,
        req.status,
        req.tags,
        req.series_id,
    );
    let saved = state.posts.save(post).await?;

    tracing::debug!(post_id = %saved.id, "Post created");
    Ok(HttpResponse::Created().json(saved))
}

/// PUT /api/posts/{id}
///
/// Partial merge: absent fields keep their stored values.
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    let mut post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("post with id {} not found", id)))?;

    if let Some(platform) = req.platform {
        post.platform = platform;
    }
    if let Some(title) = req.title {
        post.title = title;
    }
    if let Some(description) = req.description {
        post.description = description;
    }
    if let Some(publish_date) = req.publish_date {
        post.publish_date = publish_date;
    }
    if let Some(status) = req.status {
        post.status = status;
    }
    if let Some(tags) = req.tags {
        post.tags = tags;
    }
    if let Some(series_id) = req.series_id {
        post.series_id = series_id;
    }

    let saved = state.posts.save(post).await?;
    Ok(HttpResponse::Ok().json(saved))
}

/// DELETE /api/posts/{id} - idempotent, no cascade.
pub async fn delete(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    state.posts.delete(id).await?;
    Ok(HttpResponse::NoContent().finish())
}
