//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod activity_template_repo;
pub mod gear_item_repo;
pub mod packing_association_repo;
pub mod trip_repo;

pub use activity_template_repo::ActivityTemplateRepo;
pub use gear_item_repo::GearItemRepo;
pub use packing_association_repo::PackingAssociationRepo;
pub use trip_repo::TripRepo;
