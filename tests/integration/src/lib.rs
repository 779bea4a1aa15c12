//! Integration test utilities for the Merlin dashboard API
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API with a real cookie-carrying HTTP client.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
