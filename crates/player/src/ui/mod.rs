use dioxus::prelude::*;

pub mod components;

use crate::config::PlayerConfig;
use crate::infrastructure::RandomMonsterIds;
use crate::state::MonsterBoard;
use components::{CreateMonsterModal, MonsterList};

/// Shell variant for UI layout selection.
/// This is passed via Dioxus context from the runner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ShellKind {
    #[default]
    Desktop,
    Mobile,
}

impl ShellKind {
    fn container_class(self) -> &'static str {
        match self {
            ShellKind::Desktop => "shell shell-desktop",
            ShellKind::Mobile => "shell shell-mobile",
        }
    }
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Provided by the composition root (see `crates/player/src/main.rs`).
    let shell = try_use_context::<ShellKind>().unwrap_or_default();
    let config = try_use_context::<PlayerConfig>().unwrap_or_default();

    // The signal is the board's only owner; writes through it re-render.
    let mut board = use_signal(move || {
        MonsterBoard::from_config(&config, Box::new(RandomMonsterIds::new()))
    });
    let form_open = board.read().is_form_open();

    rsx! {
        div {
            class: shell.container_class(),

            header {
                class: "roster-header",
                h1 { "Monsters" }
            }

            MonsterList { board }

            button {
                class: "fab",
                "aria-label": "Add monster",
                onclick: move |_| board.write().open_form(),
                "+"
            }

            if form_open {
                CreateMonsterModal { board }
            }
        }
    }
}
