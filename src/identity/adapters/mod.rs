//! Adapter implementations for user directory ports.

pub mod argon2;
pub mod memory;
pub mod postgres;
