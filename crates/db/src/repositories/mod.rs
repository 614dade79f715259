//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod asset_repo;
pub mod deliverable_repo;
pub mod event_repo;
pub mod hardware_repo;
pub mod template_repo;
pub mod theme_repo;
pub mod user_repo;
pub mod venue_repo;

pub use asset_repo::AssetRepo;
pub use deliverable_repo::DeliverableRepo;
pub use event_repo::EventRepo;
pub use hardware_repo::HardwareRepo;
pub use template_repo::TemplateRepo;
pub use theme_repo::ThemeRepo;
pub use user_repo::UserRepo;
pub use venue_repo::VenueRepo;
