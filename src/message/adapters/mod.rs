//! Adapter implementations for message thread ports.

pub mod memory;
pub mod postgres;
