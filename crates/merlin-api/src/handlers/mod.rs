//! Route handlers
//!
//! All HTTP request handlers organized by resource.

pub mod activity;
pub mod auth;
pub mod commands;
pub mod guard;
pub mod health;
pub mod meta;
pub mod servers;
