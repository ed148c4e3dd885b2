//! Command processor for the simulated terminal.
//!
//! The terminal is a registry-based dispatch system. Commands implement the
//! `Command` trait and are registered by name; aliases are separate entries
//! that delegate to a canonical command. The interpreter parses an input
//! line into a name, positional arguments and presence-only flags, resolves
//! the name and dispatches `execute()`. Dispatch never fails: unknown names
//! produce an explanatory text payload.

mod commands;
mod interpreter;
pub mod nav_commands;

/// Register every built-in command and alias into a registry.
pub use commands::register_builtins;
/// A single executable command trait.
pub use interpreter::Command;
/// Output produced by a command (text, rich view, control signals).
pub use interpreter::CommandOutput;
/// Registry of available commands with dispatch.
pub use interpreter::CommandRegistry;
/// Read-only context passed to every command.
pub use interpreter::Environment;
/// Presence-only flags parsed from `--name` tokens.
pub use interpreter::Flags;
/// A parsed input line.
pub use interpreter::ParsedLine;
/// Structured views selected by tag.
pub use interpreter::RichView;
/// Split an input line into name, arguments and flags.
pub use interpreter::parse_line;
/// Register navigation and preference commands (theme, mode, exit).
pub use nav_commands::register_nav_commands;
