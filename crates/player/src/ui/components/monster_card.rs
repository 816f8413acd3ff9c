//! Monster card - name always, counts only while expanded

use dioxus::prelude::*;

use monsterdex_domain::{Monster, MonsterId};

/// Props for the MonsterCard component
#[derive(Props, Clone, PartialEq)]
pub struct MonsterCardProps {
    pub monster: Monster,
    pub is_expanded: bool,
    /// Receives the card's monster id on press
    pub on_toggle: EventHandler<MonsterId>,
}

#[component]
pub fn MonsterCard(props: MonsterCardProps) -> Element {
    let id = props.monster.id();
    let on_toggle = props.on_toggle;
    let class = if props.is_expanded {
        "monster-card expanded"
    } else {
        "monster-card"
    };

    rsx! {
        button {
            class,
            "aria-expanded": "{props.is_expanded}",
            onclick: move |_| on_toggle.call(id),

            span { class: "monster-name", "{props.monster.name()}" }

            if props.is_expanded {
                div {
                    class: "monster-details",
                    span { class: "detail", "Eyes: {props.monster.eye_count()}" }
                    span { class: "detail", "Tentacles: {props.monster.tentacle_count()}" }
                }
            }
        }
    }
}
