//! HipChat notifier library
//!
//! Formats error-tracking events as HTML chat messages and delivers them to
//! HipChat rooms.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
