#![deny(unsafe_code)]

//! Terminal front-end for chatting with the SPARC dataset search.

pub mod settings;
pub mod shell;
/// Search results rendered as chat replies.
pub mod summary;
/// Declarative look of the shell.
pub mod theme;

pub use settings::{AppSettings, SettingsError, SettingsStore};
pub use shell::{ChatShell, ShellCommand, ShellOutcome};
