//! `stockroom-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no console, no files).

pub mod entity;
pub mod error;
pub mod store;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use store::RecordStore;
