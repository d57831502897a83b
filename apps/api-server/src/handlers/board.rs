//! Kanban board handlers.

use actix_web::{HttpResponse, web};

use postdeck_core::ports::{BaseRepository, PostRepository};
use postdeck_core::projection;
use postdeck_shared::dto::MoveCardRequest;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/board
///
/// Projects one snapshot of the store into the five fixed columns.
pub async fn get_board(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    let board = projection::project_columns(&posts);

    if !board.unrecognized.is_empty() {
        tracing::debug!(
            count = board.unrecognized.len(),
            "posts with unrecognized status excluded from board columns"
        );
    }

    Ok(HttpResponse::Ok().json(board))
}

/// POST /api/board/move
///
/// Drag-and-drop transition: validate against the snapshot, persist only
/// on success, return the updated post for re-rendering.
pub async fn move_card(
    state: web::Data<AppState>,
    body: web::Json<MoveCardRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let posts = state.posts.list().await?;
    let updated = projection::move_card(&posts, req.post_id, &req.status)?;
    let saved = state.posts.save(updated).await?;

    tracing::debug!(post_id = %saved.id, status = %saved.status, "Card moved");
    Ok(HttpResponse::Ok().json(saved))
}
