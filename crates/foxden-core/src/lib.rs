//! Foxden Core - Canonical in-memory site kernel
//!
//! This crate provides the foundational data structures and operations for
//! the «Лисья Нора» marketing site, including:
//! - Route table with validated, bijective path-to-view mapping
//! - Five stateless page views producing HTML fragments plus metadata
//! - Transition state machine with wait-mode enter/exit ordering
//! - Shell chrome and full-document assembly with head metadata
//! - Site configuration with TOML loading and production defaults
//!
//! The kernel is renderer-independent: views emit plain HTML strings and
//! the transition machine is driven by discrete commands, so ordering
//! guarantees are testable without any rendering engine.

pub mod apply;
pub mod commands;
pub mod config;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod render;
pub mod routing;
pub mod rules;

// Re-export commonly used types
pub use apply::apply;
pub use commands::Command;
pub use config::SiteConfig;
pub use errors::{FoxdenError, Result};
pub use model::{
    ActiveView, DocumentHead, NavigationState, PageMetadata, Route, RoutePath, TransitionState,
    ViewId, ViewPhase,
};
pub use ops::{NavigateOutcome, SiteState};
pub use routing::RouteTable;
