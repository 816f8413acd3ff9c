//! Roster and creation-form state
//!
//! Plain owned state objects with no UI dependency. The rendering surface
//! drives a [`MonsterBoard`] and reads everything back from it; it never
//! mutates [`RecordStore`] or [`FormSession`] directly.

mod board;
mod form_session;
mod notifier;
mod record_store;

pub use board::MonsterBoard;
pub use form_session::{
    FieldErrors, FormField, FormPhase, FormSession, MonsterDraft, Validation, ValidationFailure,
    COUNT_ERROR, NAME_ERROR,
};
pub use notifier::{BoardChange, ChangeNotifier, SubscriptionId};
pub use record_store::RecordStore;
