//! Infrastructure Layer
//!
//! Database and in-memory repository implementations.

pub mod memory;
pub mod postgres;

pub use memory::MemoryAuthRepository;
pub use postgres::PgAuthRepository;
