//! Player configuration from environment variables.
//!
//! - `MONSTERDEX_SHELL`: `desktop` (default) or `mobile`
//! - `MONSTERDEX_SEED`: whether to start with the starter monsters (default on)
//!
//! Log filtering is read separately from `RUST_LOG` by the binary.

use crate::ui::ShellKind;

pub const SHELL_VAR: &str = "MONSTERDEX_SHELL";
pub const SEED_VAR: &str = "MONSTERDEX_SEED";

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "monsterdex_player=debug,dioxus=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerConfig {
    pub shell: ShellKind,
    pub seed_starter_monsters: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            shell: ShellKind::default(),
            seed_starter_monsters: true,
        }
    }
}

impl PlayerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Unknown values fall back to the
    /// default with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let shell = match lookup(SHELL_VAR) {
            None => defaults.shell,
            Some(raw) => parse_shell(&raw).unwrap_or_else(|| {
                tracing::warn!(value = %raw, "Unknown {SHELL_VAR}, using {:?}", defaults.shell);
                defaults.shell
            }),
        };

        let seed_starter_monsters = match lookup(SEED_VAR) {
            None => defaults.seed_starter_monsters,
            Some(raw) => parse_flag(&raw).unwrap_or_else(|| {
                tracing::warn!(value = %raw, "Unknown {SEED_VAR}, using {}", defaults.seed_starter_monsters);
                defaults.seed_starter_monsters
            }),
        };

        Self {
            shell,
            seed_starter_monsters,
        }
    }
}

fn parse_shell(raw: &str) -> Option<ShellKind> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "desktop" => Some(ShellKind::Desktop),
        "mobile" => Some(ShellKind::Mobile),
        _ => None,
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
