pub mod activity;
pub mod admin;
pub mod gear;
pub mod packing;
pub mod trip;
