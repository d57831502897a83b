//! Export handlers - CSV and iCalendar downloads.

use actix_web::{HttpResponse, web};
use serde::Deserialize;

use postdeck_core::export::{self, ExportFormat};
use postdeck_core::ports::PostRepository;

use crate::middleware::error::AppResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    #[serde(rename = "type", default = "default_type")]
    pub export_type: String,
}

fn default_type() -> String {
    "csv".to_string()
}

/// GET /api/export?type=csv|ics
///
/// Best-effort over the full collection: malformed records are skipped,
/// never a failure. An unknown type is a 400.
pub async fn export(
    state: web::Data<AppState>,
    query: web::Query<ExportQuery>,
) -> AppResult<HttpResponse> {
    let format: ExportFormat = query.export_type.parse()?;
    let posts = state.posts.list().await?;

    let body = match format {
        ExportFormat::Csv => export::csv::render(&posts),
        ExportFormat::Ics => {
            let out = export::ics::render(&posts);
            if out.skipped > 0 {
                tracing::debug!(
                    count = out.skipped,
                    "posts with malformed dates excluded from iCalendar export"
                );
            }
            out.body
        }
    };

    Ok(HttpResponse::Ok()
        .content_type(format.content_type())
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", format.file_name()),
        ))
        .body(body))
}
