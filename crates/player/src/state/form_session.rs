//! Form session - the "create monster" workflow
//!
//! Holds the raw draft text, per-field error messages, and whether the
//! creation modal is open. Validation only runs on `validate`/`submit`;
//! editing a field clears that field's error immediately.
//!
//! Phases:
//! - `Closed -> OpenClean` via `open`
//! - `Open* -> OpenClean` via `edit_field` (once the last error clears) or a passing `validate`
//! - `Open* -> OpenWithErrors` via a failing `validate`/`submit`
//! - `Open* -> Closed` via `cancel` or a successful `submit`

use std::collections::BTreeMap;
use std::fmt;

use monsterdex_domain::{BodyPartCount, Monster, MonsterName};
use thiserror::Error;

use crate::ports::outbound::MonsterIdPort;

pub const NAME_ERROR: &str = "name required";
pub const COUNT_ERROR: &str = "must be a positive integer";

/// The three editable fields of the creation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    EyeText,
    TentacleText,
}

impl FormField {
    /// Every field, in display order.
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::EyeText, FormField::TentacleText];

    /// Fixed label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::EyeText => "Eyes",
            FormField::TentacleText => "Tentacles",
        }
    }

    /// Stable key for keyed rendering and log fields.
    pub fn key(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::EyeText => "eyes",
            FormField::TentacleText => "tentacles",
        }
    }

    /// Whether the field expects a count (numeric keyboard).
    pub fn is_numeric(self) -> bool {
        !matches!(self, FormField::Name)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Unvalidated, in-progress text for a monster being created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonsterDraft {
    pub name: String,
    pub eye_text: String,
    pub tentacle_text: String,
}

impl MonsterDraft {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::EyeText => &self.eye_text,
            FormField::TentacleText => &self.tentacle_text,
        }
    }

    fn set(&mut self, field: FormField, text: String) {
        match field {
            FormField::Name => self.name = text,
            FormField::EyeText => self.eye_text = text,
            FormField::TentacleText => self.tentacle_text = text,
        }
    }

    fn is_empty(&self) -> bool {
        self.name.is_empty() && self.eye_text.is_empty() && self.tentacle_text.is_empty()
    }
}

/// Sparse per-field error messages; a missing key means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FormField, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    fn clear_field(&mut self, field: FormField) {
        self.0.remove(&field);
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, msg) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {msg}")?;
            first = false;
        }
        Ok(())
    }
}

/// Where the session sits in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Closed,
    OpenClean,
    OpenWithErrors,
}

/// Outcome of [`FormSession::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub valid: bool,
    pub errors: FieldErrors,
}

/// Submission was blocked by one or more invalid fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("monster draft is invalid ({errors})")]
pub struct ValidationFailure {
    pub errors: FieldErrors,
}

/// Draft values that passed every rule.
struct CheckedDraft {
    name: MonsterName,
    eyes: BodyPartCount,
    tentacles: BodyPartCount,
}

#[derive(Debug, Clone, Default)]
pub struct FormSession {
    draft: MonsterDraft,
    field_errors: FieldErrors,
    is_open: bool,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &MonsterDraft {
        &self.draft
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn phase(&self) -> FormPhase {
        match (self.is_open, self.field_errors.is_empty()) {
            (false, _) => FormPhase::Closed,
            (true, true) => FormPhase::OpenClean,
            (true, false) => FormPhase::OpenWithErrors,
        }
    }

    /// Show the creation modal. Does not clear anything: a closed session is
    /// always already reset.
    pub fn open(&mut self) {
        debug_assert!(self.is_open || (self.draft.is_empty() && self.field_errors.is_empty()));
        self.is_open = true;
        tracing::debug!("Monster form opened");
    }

    /// Overwrite one draft field and clear its error.
    ///
    /// Returns `false` (and changes nothing) when the session is closed.
    pub fn edit_field(&mut self, field: FormField, text: impl Into<String>) -> bool {
        if !self.is_open {
            tracing::warn!(%field, "Ignoring edit on a closed monster form");
            return false;
        }
        self.draft.set(field, text.into());
        self.field_errors.clear_field(field);
        true
    }

    /// Check every field (no short-circuit) and replace the stored errors
    /// with exactly the computed set.
    ///
    /// A closed session still computes the result but keeps no errors.
    pub fn validate(&mut self) -> Validation {
        let errors = match check_draft(&self.draft) {
            Ok(_) => FieldErrors::new(),
            Err(errors) => errors,
        };
        if self.is_open {
            self.field_errors = errors.clone();
        }
        Validation {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// Validate and, on success, build the new monster and reset the session.
    ///
    /// The caller adds the returned monster to the roster. On failure the
    /// errors are kept for display and the session stays open.
    pub fn submit(&mut self, ids: &dyn MonsterIdPort) -> Result<Monster, ValidationFailure> {
        match check_draft(&self.draft) {
            Ok(checked) => {
                let monster = Monster::new(
                    ids.next_id(),
                    checked.name,
                    checked.eyes,
                    checked.tentacles,
                );
                self.reset();
                tracing::debug!(monster_id = %monster.id(), "Monster form submitted");
                Ok(monster)
            }
            Err(errors) => {
                if self.is_open {
                    self.field_errors = errors.clone();
                }
                tracing::debug!(error_count = errors.len(), "Monster form rejected");
                Err(ValidationFailure { errors })
            }
        }
    }

    /// Discard the draft and close without creating anything.
    pub fn cancel(&mut self) {
        self.reset();
        tracing::debug!("Monster form cancelled");
    }

    fn reset(&mut self) {
        self.draft = MonsterDraft::default();
        self.field_errors = FieldErrors::new();
        self.is_open = false;
    }
}

fn check_draft(draft: &MonsterDraft) -> Result<CheckedDraft, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = match MonsterName::new(draft.name.as_str()) {
        Ok(name) => Some(name),
        Err(_) => {
            errors.insert(FormField::Name, NAME_ERROR);
            None
        }
    };
    let eyes = parse_count(&draft.eye_text, FormField::EyeText, &mut errors);
    let tentacles = parse_count(&draft.tentacle_text, FormField::TentacleText, &mut errors);

    match (name, eyes, tentacles) {
        (Some(name), Some(eyes), Some(tentacles)) => Ok(CheckedDraft {
            name,
            eyes,
            tentacles,
        }),
        _ => Err(errors),
    }
}

fn parse_count(raw: &str, field: FormField, errors: &mut FieldErrors) -> Option<BodyPartCount> {
    match BodyPartCount::parse(raw) {
        Ok(count) => Some(count),
        Err(_) => {
            errors.insert(field, COUNT_ERROR);
            None
        }
    }
}
