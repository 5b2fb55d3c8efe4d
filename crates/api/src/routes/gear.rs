//! Route definitions for the gear catalog.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::gear;
use crate::state::AppState;

/// ```text
/// GET    /gear                 -> list
/// GET    /gear/add             -> add_form
/// POST   /gear/add             -> create
/// GET    /gear/edit/{id}       -> edit_form
/// POST   /gear/edit/{id}       -> update
/// POST   /gear/delete/{id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/gear", get(gear::list))
        .route("/gear/add", get(gear::add_form).post(gear::create))
        .route("/gear/edit/{id}", get(gear::edit_form).post(gear::update))
        .route("/gear/delete/{id}", post(gear::delete))
}
