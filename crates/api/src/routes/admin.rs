use axum::routing::get;
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// `GET /init-db` -- apply migrations and seed default activities.
pub fn router() -> Router<AppState> {
    Router::new().route("/init-db", get(admin::init_db))
}
