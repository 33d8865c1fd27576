//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the vocabulary every feature crate agrees on:
//! - The unified error type and result alias
//! - Error classification mapped to HTTP status codes
//!
//! **Design Principle**: Only include things that have the same meaning
//! for both the activity registry and the admin gate.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
