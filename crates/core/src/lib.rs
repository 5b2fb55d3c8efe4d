//! Domain logic for gearlog: identifiers, error taxonomy, field parsing and
//! validation, default activity templates, and the packing state machine.
//!
//! Nothing in this crate touches the database.

pub mod activity;
pub mod error;
pub mod fields;
pub mod gear;
pub mod packing;
pub mod trip;
pub mod types;
