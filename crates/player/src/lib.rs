//! Monsterdex player crate.
//!
//! Roster and creation-form state, their configuration, and a Dioxus
//! rendering surface. The desktop binary is behind the `desktop` feature.

pub mod config;
pub mod infrastructure;
pub mod ports;
pub mod state;
pub mod ui;

pub use config::PlayerConfig;
pub use state::{BoardChange, FormField, MonsterBoard};

// Re-export commonly used entrypoints
pub use ui::app;
pub use ui::ShellKind;
