//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod asset;
pub mod deliverable;
pub mod event;
pub mod hardware;
pub mod template;
pub mod theme;
pub mod user;
pub mod venue;
