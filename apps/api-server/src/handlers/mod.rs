//! HTTP handlers and route configuration.

mod board;
mod calendar;
mod export;
mod health;
mod posts;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            // Post store CRUD (thin wrappers)
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::list))
                    .route("", web::post().to(posts::create))
                    .route("/{id}", web::get().to(posts::get))
                    .route("/{id}", web::put().to(posts::update))
                    .route("/{id}", web::delete().to(posts::delete)),
            )
            // Projections
            .service(
                web::scope("/board")
                    .route("", web::get().to(board::get_board))
                    .route("/move", web::post().to(board::move_card)),
            )
            .route("/calendar", web::get().to(calendar::get_month))
            // Exports
            .route("/export", web::get().to(export::export)),
    );
}
