pub mod api;
pub mod submit;

use axum::routing::{get, post};
use axum::Router;

use crate::form::submitter::SUBMIT_PATH;
use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route(SUBMIT_PATH, post(submit::submit))
        .route("/api", get(api::list))
}
