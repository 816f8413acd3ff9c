//! Monster list - one card per record, in roster order

use dioxus::prelude::*;

use monsterdex_domain::MonsterId;

use super::MonsterCard;
use crate::state::MonsterBoard;

#[component]
pub fn MonsterList(board: Signal<MonsterBoard>) -> Element {
    let mut board = board;
    let monsters = board.read().records().to_vec();
    let expanded = board.read().expanded_id();

    rsx! {
        div {
            class: "monster-list",

            if monsters.is_empty() {
                p { class: "empty-roster", "No monsters yet. Tap + to add one." }
            }

            for monster in monsters {
                MonsterCard {
                    key: "{monster.id()}",
                    is_expanded: expanded == Some(monster.id()),
                    monster: monster.clone(),
                    on_toggle: move |id: MonsterId| board.write().toggle(id),
                }
            }
        }
    }
}
