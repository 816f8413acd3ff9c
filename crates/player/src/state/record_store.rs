//! Record store - the ordered monster roster
//!
//! Append-only: records keep their insertion order and are never edited or
//! removed. Also tracks which single record (if any) is showing details.

use monsterdex_domain::{Monster, MonsterId};

#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Monster>,
    expanded_id: Option<MonsterId>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with `records`, nothing expanded.
    pub fn with_records(records: Vec<Monster>) -> Self {
        Self {
            records,
            expanded_id: None,
        }
    }

    /// Append a record to the end of the roster.
    ///
    /// No deduplication; the expanded selection is left alone.
    pub fn add(&mut self, record: Monster) {
        tracing::debug!(
            monster_id = %record.id(),
            name = %record.name(),
            position = self.records.len(),
            "Adding monster to roster"
        );
        self.records.push(record);
    }

    /// Expand `id`, or collapse it if it is already expanded.
    ///
    /// Expanding one record implicitly collapses any other. The id does not
    /// have to belong to a stored record; an unknown id simply matches no card.
    pub fn toggle(&mut self, id: MonsterId) {
        self.expanded_id = if self.expanded_id == Some(id) {
            None
        } else {
            Some(id)
        };
        tracing::debug!(monster_id = %id, expanded = self.expanded_id.is_some(), "Toggled monster");
    }

    pub fn records(&self) -> &[Monster] {
        &self.records
    }

    pub fn expanded_id(&self) -> Option<MonsterId> {
        self.expanded_id
    }

    pub fn is_expanded(&self, id: MonsterId) -> bool {
        self.expanded_id == Some(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
