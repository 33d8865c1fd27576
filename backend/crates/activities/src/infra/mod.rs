//! Infrastructure Layer
//!
//! In-memory repository implementation and seed data.

pub mod memory;
pub mod seed;

pub use memory::InMemoryActivityRepository;
