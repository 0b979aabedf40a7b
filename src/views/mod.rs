pub mod pages;

use axum::routing::get;
use axum::Router;

use crate::form::submitter::SUCCESS_PATH;
use crate::state::SharedState;

pub fn view_routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(pages::index))
        .route(SUCCESS_PATH, get(pages::success))
}
