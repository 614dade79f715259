//! Pure domain logic for the event planning engine.
//!
//! This crate contains no database or HTTP dependencies. Evaluation is
//! done against pre-loaded data passed in by the caller; dates always
//! arrive as explicit parameters rather than implicit clock reads.

pub mod asset;
pub mod calendar;
pub mod deliverable;
pub mod error;
pub mod health;
pub mod roles;
pub mod theme;
pub mod types;
