//! Structured logging facility for the site kernel
//!
//! This module provides a canonical logging facility with:
//! - Single initialization point via `init(profile)`
//! - Development / Production / Test output profiles
//! - Stable field keys and event names from `foxden_core_types::schema`
//!
//! # Usage
//!
//! ```rust
//! use foxden_core::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```

pub mod init;

pub use init::{init, Profile};
