//! Roster and creation-form components

mod create_monster_modal;
mod labeled_input;
mod monster_card;
mod monster_list;

pub use create_monster_modal::CreateMonsterModal;
pub use labeled_input::LabeledInput;
pub use monster_card::MonsterCard;
pub use monster_list::MonsterList;
