pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::comments::handlers as comments;
use crate::idioms::handlers as idioms;
use crate::state::AppState;
use crate::users::handlers as users;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Idiom catalogue and search
        .route("/api/v1/idioms", post(idioms::handle_create))
        .route("/api/v1/idioms/search", get(idioms::handle_search))
        .route("/api/v1/idioms/:id", get(idioms::handle_get))
        .route(
            "/api/v1/idioms/:id/comments",
            get(comments::handle_list_comments).post(comments::handle_create_comment),
        )
        // Learner accounts and XP
        .route("/api/v1/users", post(users::handle_create_user))
        .route("/api/v1/users/:id", get(users::handle_get_user))
        .route("/api/v1/users/:id/xp", post(users::handle_award_xp))
        // Moderation
        .route(
            "/api/v1/comments/reported",
            get(comments::handle_reported_comments),
        )
        .route(
            "/api/v1/comments/:id/report",
            post(comments::handle_report_comment),
        )
        .route(
            "/api/v1/comments/:id/process",
            post(comments::handle_process_comment),
        )
        .with_state(state)
}
