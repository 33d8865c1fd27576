//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id, bcrypt verification, NIST SP 800-63B policy for new passwords)
//! - Cookie building and extraction
//! - Constant-time comparison

pub mod cookie;
pub mod crypto;
pub mod password;
