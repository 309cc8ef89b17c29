//! Error handling
//!
//! Defines error types and diagnostic reporting for the loader.

pub mod handlers;
pub mod types;

pub use types::*;
