//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// `?category=` filter on the gear list. `all` or absent disables filtering.
#[derive(Debug, Deserialize)]
pub struct CategoryParams {
    pub category: Option<String>,
}
