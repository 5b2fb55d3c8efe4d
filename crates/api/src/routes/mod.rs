pub mod admin;
pub mod gear;
pub mod health;
pub mod trip;

use axum::routing::get;
use axum::Router;

use crate::handlers::activity;
use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// /gear                                  list (?category=<c|all>)
/// /gear/add                              form context, create
/// /gear/edit/{id}                        form context, update
/// /gear/delete/{id}                      delete (POST)
///
/// /activities                            list activity templates
///
/// /trips                                 list
/// /trips/create                          form context, create
/// /trips/edit/{id}                       form context, update
/// /trips/delete/{id}                     delete (POST)
/// /trips/{id}                            detail + checklist
/// /trips/{id}/add_gear/{gid}             attach gear
/// /trips/{id}/remove_gear/{gid}          detach gear
/// /trips/{id}/toggle_packed/{gid}        toggle packed state
///
/// /init-db                               migrate + seed (admin)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(gear::router())
        .route("/activities", get(activity::list))
        .merge(trip::router())
        .merge(admin::router())
}
