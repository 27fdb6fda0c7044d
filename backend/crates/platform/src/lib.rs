//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - HMAC-SHA256 and URL-safe Base64 for session tokens
//! - Password hashing (Argon2id, NIST SP 800-63B compliant)
//! - Client metadata extraction from HTTP headers

pub mod client;
pub mod crypto;
pub mod password;
