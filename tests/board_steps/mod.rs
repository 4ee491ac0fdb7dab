//! Step definitions shared by the task board feature files.

pub mod world;

mod given;
mod then;
mod when;
