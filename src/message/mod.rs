//! Per-task chat threads.
//!
//! A thread is readable and writable only by users who can see its task.
//! Messages are immutable once posted and are listed oldest first, ties
//! broken by insertion order.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
