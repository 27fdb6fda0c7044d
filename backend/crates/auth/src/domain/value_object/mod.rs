//! Value Object Module

pub mod client_info;
pub mod email;
pub mod session_token;
pub mod user_password;
