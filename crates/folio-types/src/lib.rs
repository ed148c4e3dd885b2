//! Foundation types for termfolio.
//!
//! Shared by every crate in the workspace: the error type, the TOML
//! configuration, the two-valued colour theme and the navigation routes.

pub mod config;
pub mod error;
pub mod route;
pub mod theme;
