//! Create Monster Modal - draft entry sheet for a new monster

use dioxus::prelude::*;

use super::LabeledInput;
use crate::state::{FormField, MonsterBoard};

#[component]
pub fn CreateMonsterModal(board: Signal<MonsterBoard>) -> Element {
    let mut board = board;
    let draft = board.read().draft().clone();
    let errors = board.read().field_errors().clone();

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| board.write().cancel_form(),

            div {
                class: "modal-sheet",
                onclick: |e| e.stop_propagation(),

                h2 { class: "modal-title", "New monster" }

                for field in FormField::ALL {
                    LabeledInput {
                        key: "{field.key()}",
                        label: field.label().to_string(),
                        value: draft.value(field).to_string(),
                        error: errors.get(field).map(str::to_string),
                        numeric: field.is_numeric(),
                        on_input: move |text: String| board.write().edit_field(field, text),
                    }
                }

                div {
                    class: "modal-actions",
                    button {
                        class: "button-secondary",
                        onclick: move |_| board.write().cancel_form(),
                        "Cancel"
                    }
                    button {
                        class: "button-primary",
                        onclick: move |_| {
                            // Failures stay in the board as per-field errors.
                            if let Err(failure) = board.write().submit_form() {
                                tracing::debug!(%failure, "Monster not created");
                            }
                        },
                        "Add"
                    }
                }
            }
        }
    }
}
