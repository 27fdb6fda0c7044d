//! Domain Entities

pub mod issue;
