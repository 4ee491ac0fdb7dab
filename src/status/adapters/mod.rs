//! Adapter implementations for the status catalog port.

pub mod memory;
pub mod postgres;
