//! Route definitions for trips and their packing checklists.
//!
//! Checklist mutations are plain GET links, matching the checklist page's
//! anchors.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{packing, trip};
use crate::state::AppState;

/// ```text
/// GET    /trips                                -> list
/// GET    /trips/create                         -> create_form
/// POST   /trips/create                         -> create
/// GET    /trips/edit/{id}                      -> edit_form
/// POST   /trips/edit/{id}                      -> update
/// POST   /trips/delete/{id}                    -> delete
/// GET    /trips/{id}                           -> detail
/// GET    /trips/{id}/add_gear/{gid}            -> add_gear
/// GET    /trips/{id}/remove_gear/{gid}         -> remove_gear
/// GET    /trips/{id}/toggle_packed/{gid}       -> toggle_packed
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/trips", get(trip::list))
        .route("/trips/create", get(trip::create_form).post(trip::create))
        .route("/trips/edit/{id}", get(trip::edit_form).post(trip::update))
        .route("/trips/delete/{id}", post(trip::delete))
        .route("/trips/{id}", get(trip::detail))
        .route("/trips/{id}/add_gear/{gid}", get(packing::add_gear))
        .route("/trips/{id}/remove_gear/{gid}", get(packing::remove_gear))
        .route("/trips/{id}/toggle_packed/{gid}", get(packing::toggle_packed))
}
