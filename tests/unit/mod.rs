//! Unit tests module
//!
//! Contains tests for individual components in isolation.

#[path = "../common/mod.rs"]
mod common;

mod config_test;
mod dispatcher_test;
