//! Unit tests for message threads.

mod thread_tests;
