use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/list/:key/toggle/:id", post(handlers::toggle_form))
        .route("/list/:key/mark-all", post(handlers::mark_all_form))
        .route("/list/:key/reset", post(handlers::reset_form))
        .route("/api/lists", get(handlers::get_lists))
        .route("/api/lists/:key", get(handlers::get_list))
        .route("/api/lists/:key/toggle", post(handlers::toggle))
        .route("/api/lists/:key/mark-all", post(handlers::mark_all))
        .route("/api/lists/:key/reset", post(handlers::reset))
        .route("/api/custom", get(handlers::get_custom).post(handlers::add_custom))
        .route("/api/custom/:id", delete(handlers::remove_custom))
        .route(
            "/api/reminders",
            get(handlers::get_reminders).post(handlers::set_reminders),
        )
        .with_state(state)
}
