//! Core types shared across Foxden facilities
//!
//! This crate provides foundational types used by both the site kernel
//! and the logging facility:
//!
//! - **Correlation types**: NavigationId for tying together the log
//!   events of a single navigation
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::NavigationId;
