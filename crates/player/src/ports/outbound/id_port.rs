//! Id source for newly created monsters.

use monsterdex_domain::MonsterId;

/// Hands out a fresh [`MonsterId`] on every call.
///
/// Implementations must never return the same id twice. Failure is not
/// modeled: an id source that cannot produce an id is a broken precondition.
#[cfg_attr(test, mockall::automock)]
pub trait MonsterIdPort: Send + Sync {
    fn next_id(&self) -> MonsterId;
}
