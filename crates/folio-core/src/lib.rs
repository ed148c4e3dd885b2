//! termfolio core.
//!
//! Platform-agnostic pieces of the terminal portfolio: the output renderer
//! (history to presentation description), the session shell state machine
//! with its explicit timers, the static pages, and theme persistence. This
//! crate performs no terminal I/O; time is supplied by the caller.

// Re-exports from folio-types (foundation types).
pub use folio_types::config;
pub use folio_types::error;
pub use folio_types::route;
pub use folio_types::theme;

pub use folio_content as content;
pub use folio_platform as platform;
pub use folio_terminal as terminal;

pub mod pages;
pub mod render;
pub mod session;
pub mod shell;
pub mod theme_store;
pub mod timer;
