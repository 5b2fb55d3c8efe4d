//! Domain model structs.
//!
//! Each submodule contains a `FromRow` + `Serialize` struct matching a
//! database row. Validated input types live in `gearlog_core`.

pub mod activity_template;
pub mod gear_item;
pub mod trip;
pub mod trip_gear;
