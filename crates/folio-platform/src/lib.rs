//! Platform services for termfolio.
//!
//! Everything the core treats as an external collaborator lives behind a
//! trait here: the monotonic clock that drives the shell timers, the URL
//! launcher used for outbound links, and the client-local key/value store
//! that holds the theme preference.

pub mod services;
pub mod storage;

pub use services::{DesktopPlatform, Launcher, TimeService};
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore};
