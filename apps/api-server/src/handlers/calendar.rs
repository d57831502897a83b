//! Calendar handlers.

use actix_web::{HttpResponse, web};
use chrono::Datelike;
use serde::Deserialize;

use postdeck_core::ports::PostRepository;
use postdeck_core::projection;

use crate::middleware::error::AppResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

/// GET /api/calendar?year=&month=
///
/// Defaults to the current month when params are absent.
pub async fn get_month(
    state: web::Data<AppState>,
    query: web::Query<MonthQuery>,
) -> AppResult<HttpResponse> {
    let today = chrono::Local::now().date_naive();
    let year = query.year.unwrap_or_else(|| today.year());
    let month = query.month.unwrap_or_else(|| today.month());

    let posts = state.posts.list().await?;
    let grid = projection::project_month(&posts, year, month)?;

    if grid.skipped > 0 {
        tracing::debug!(
            count = grid.skipped,
            "posts with malformed dates excluded from calendar"
        );
    }

    Ok(HttpResponse::Ok().json(grid))
}
