//! Monster board - the single object the rendering surface drives.
//!
//! Composes the roster, the creation form, the id source, and change
//! notification. Every input that changes state notifies subscribers once
//! per change; inputs that change nothing notify nobody.

use monsterdex_domain::{Monster, MonsterId};

use super::form_session::{FieldErrors, FormField, FormPhase, FormSession, MonsterDraft, ValidationFailure};
use super::notifier::{BoardChange, ChangeNotifier, SubscriptionId};
use super::record_store::RecordStore;
use crate::config::PlayerConfig;
use crate::ports::outbound::MonsterIdPort;

pub struct MonsterBoard {
    store: RecordStore,
    form: FormSession,
    notifier: ChangeNotifier,
    ids: Box<dyn MonsterIdPort>,
}

impl MonsterBoard {
    /// Empty roster, closed form.
    pub fn new(ids: Box<dyn MonsterIdPort>) -> Self {
        Self::with_store(RecordStore::new(), ids)
    }

    /// Roster seeded with the starter monsters.
    pub fn with_starter_monsters(ids: Box<dyn MonsterIdPort>) -> Self {
        let starters = Monster::starter_roster(|| ids.next_id());
        Self::with_store(RecordStore::with_records(starters), ids)
    }

    pub fn from_config(config: &PlayerConfig, ids: Box<dyn MonsterIdPort>) -> Self {
        if config.seed_starter_monsters {
            Self::with_starter_monsters(ids)
        } else {
            Self::new(ids)
        }
    }

    fn with_store(store: RecordStore, ids: Box<dyn MonsterIdPort>) -> Self {
        Self {
            store,
            form: FormSession::new(),
            notifier: ChangeNotifier::new(),
            ids,
        }
    }

    // -------------------------------------------------------------------------
    // Outputs
    // -------------------------------------------------------------------------

    pub fn records(&self) -> &[Monster] {
        self.store.records()
    }

    pub fn expanded_id(&self) -> Option<MonsterId> {
        self.store.expanded_id()
    }

    pub fn is_expanded(&self, id: MonsterId) -> bool {
        self.store.is_expanded(id)
    }

    pub fn draft(&self) -> &MonsterDraft {
        self.form.draft()
    }

    pub fn field_errors(&self) -> &FieldErrors {
        self.form.field_errors()
    }

    pub fn is_form_open(&self) -> bool {
        self.form.is_open()
    }

    pub fn form_phase(&self) -> FormPhase {
        self.form.phase()
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&BoardChange) + 'static) -> SubscriptionId {
        self.notifier.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    // -------------------------------------------------------------------------
    // Inputs
    // -------------------------------------------------------------------------

    pub fn toggle(&mut self, id: MonsterId) {
        self.store.toggle(id);
        let expanded = self.store.expanded_id();
        self.notifier.notify(&BoardChange::ExpansionChanged(expanded));
    }

    pub fn edit_field(&mut self, field: FormField, text: impl Into<String>) {
        if self.form.edit_field(field, text) {
            self.notifier.notify(&BoardChange::DraftEdited(field));
        }
    }

    pub fn open_form(&mut self) {
        if self.form.is_open() {
            return;
        }
        self.form.open();
        self.notifier.notify(&BoardChange::FormOpened);
    }

    pub fn cancel_form(&mut self) {
        if !self.form.is_open() {
            return;
        }
        self.form.cancel();
        self.notifier.notify(&BoardChange::FormClosed);
    }

    /// Validate the draft; on success add exactly one monster and close the
    /// form. Returns a copy of the added monster.
    pub fn submit_form(&mut self) -> Result<Monster, ValidationFailure> {
        let was_open = self.form.is_open();
        match self.form.submit(self.ids.as_ref()) {
            Ok(monster) => {
                let id = monster.id();
                self.store.add(monster.clone());
                tracing::info!(monster_id = %id, total = self.store.len(), "Monster created");
                self.notifier.notify(&BoardChange::RecordAdded(id));
                self.notifier.notify(&BoardChange::FormClosed);
                Ok(monster)
            }
            Err(failure) => {
                if was_open {
                    self.notifier
                        .notify(&BoardChange::ValidationFailed(failure.errors.clone()));
                }
                Err(failure)
            }
        }
    }
}

impl std::fmt::Debug for MonsterBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MonsterBoard")
            .field("store", &self.store)
            .field("form", &self.form)
            .field("notifier", &self.notifier)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::SequentialMonsterIds;
    use crate::state::form_session::{COUNT_ERROR, NAME_ERROR};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn board() -> MonsterBoard {
        MonsterBoard::new(Box::new(SequentialMonsterIds::new()))
    }

    fn recorded(board: &mut MonsterBoard) -> Rc<RefCell<Vec<BoardChange>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        board.subscribe(move |c| sink.borrow_mut().push(c.clone()));
        log
    }

    fn fill(board: &mut MonsterBoard, name: &str, eyes: &str, tentacles: &str) {
        board.edit_field(FormField::Name, name);
        board.edit_field(FormField::EyeText, eyes);
        board.edit_field(FormField::TentacleText, tentacles);
    }

    #[test]
    fn test_starter_monsters_seeded() {
        let board = MonsterBoard::with_starter_monsters(Box::new(SequentialMonsterIds::new()));
        let names: Vec<&str> = board.records().iter().map(|m| m.name().as_str()).collect();
        assert_eq!(names, vec!["Zoglorp", "Blibbex"]);
        assert_eq!(board.expanded_id(), None);
        assert!(!board.is_form_open());
    }

    #[test]
    fn test_from_config_respects_seed_flag() {
        let config = PlayerConfig {
            seed_starter_monsters: false,
            ..PlayerConfig::default()
        };
        let board = MonsterBoard::from_config(&config, Box::new(SequentialMonsterIds::new()));
        assert!(board.records().is_empty());

        let board = MonsterBoard::from_config(
            &PlayerConfig::default(),
            Box::new(SequentialMonsterIds::new()),
        );
        assert_eq!(board.records().len(), 2);
    }

    #[test]
    fn test_submit_adds_exactly_one_record_and_closes() {
        let mut board = board();
        let log = recorded(&mut board);

        board.open_form();
        fill(&mut board, " Zog ", "4", "8");
        let monster = board.submit_form().unwrap();

        assert_eq!(board.records().len(), 1);
        assert_eq!(board.records()[0], monster);
        assert_eq!(monster.name().as_str(), "Zog");
        assert_eq!(monster.eye_count().get(), 4);
        assert_eq!(monster.tentacle_count().get(), 8);

        assert_eq!(board.draft(), &MonsterDraft::default());
        assert!(board.field_errors().is_empty());
        assert_eq!(board.form_phase(), FormPhase::Closed);

        assert_eq!(
            *log.borrow(),
            vec![
                BoardChange::FormOpened,
                BoardChange::DraftEdited(FormField::Name),
                BoardChange::DraftEdited(FormField::EyeText),
                BoardChange::DraftEdited(FormField::TentacleText),
                BoardChange::RecordAdded(monster.id()),
                BoardChange::FormClosed,
            ]
        );
    }

    #[test]
    fn test_failed_submit_adds_nothing_and_stays_open() {
        let mut board = board();
        board.open_form();
        fill(&mut board, "", "3", "-2");
        let log = recorded(&mut board);

        let failure = board.submit_form().unwrap_err();

        assert!(board.records().is_empty());
        assert!(board.is_form_open());
        assert_eq!(board.field_errors().get(FormField::Name), Some(NAME_ERROR));
        assert_eq!(
            board.field_errors().get(FormField::TentacleText),
            Some(COUNT_ERROR)
        );
        assert_eq!(
            *log.borrow(),
            vec![BoardChange::ValidationFailed(failure.errors)]
        );
    }

    #[test]
    fn test_cancel_after_partial_edits_adds_nothing() {
        let mut board = board();
        board.open_form();
        fill(&mut board, "Half a monst", "2", "");
        board.cancel_form();

        assert!(board.records().is_empty());
        assert_eq!(board.draft(), &MonsterDraft::default());
        assert!(board.field_errors().is_empty());
        assert!(!board.is_form_open());
    }

    #[test]
    fn test_identical_submissions_get_distinct_ids() {
        let mut board = board();
        for _ in 0..2 {
            board.open_form();
            fill(&mut board, "Zog", "4", "8");
            board.submit_form().unwrap();
        }
        let records = board.records();
        assert_eq!(records.len(), 2);
        assert_ne!(records[0].id(), records[1].id());
    }

    #[test]
    fn test_toggle_notifies_expansion() {
        let mut board = MonsterBoard::with_starter_monsters(Box::new(SequentialMonsterIds::new()));
        let first = board.records()[0].id();
        let second = board.records()[1].id();
        let log = recorded(&mut board);

        board.toggle(first);
        board.toggle(second);
        board.toggle(second);

        assert_eq!(board.expanded_id(), None);
        assert_eq!(
            *log.borrow(),
            vec![
                BoardChange::ExpansionChanged(Some(first)),
                BoardChange::ExpansionChanged(Some(second)),
                BoardChange::ExpansionChanged(None),
            ]
        );
    }

    #[test]
    fn test_inputs_on_closed_form_notify_nothing() {
        let mut board = board();
        let log = recorded(&mut board);

        board.edit_field(FormField::Name, "Zog");
        board.cancel_form();
        assert!(board.submit_form().is_err());

        assert!(log.borrow().is_empty());
        assert!(board.records().is_empty());
        assert_eq!(board.form_phase(), FormPhase::Closed);
    }

    #[test]
    fn test_open_twice_notifies_once() {
        let mut board = board();
        let log = recorded(&mut board);
        board.open_form();
        board.open_form();
        assert_eq!(*log.borrow(), vec![BoardChange::FormOpened]);
    }

    #[test]
    fn test_unsubscribed_listener_is_silent() {
        let mut board = board();
        let log = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&log);
        let id = board.subscribe(move |_| *sink.borrow_mut() += 1);

        board.open_form();
        assert!(board.unsubscribe(id));
        board.cancel_form();

        assert_eq!(*log.borrow(), 1);
    }
}
