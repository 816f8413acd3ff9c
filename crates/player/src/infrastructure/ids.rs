//! Id source implementations.

use monsterdex_domain::MonsterId;

use crate::ports::outbound::MonsterIdPort;

/// Random v4 UUIDs - the production id source.
pub struct RandomMonsterIds;

impl RandomMonsterIds {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomMonsterIds {
    fn default() -> Self {
        Self::new()
    }
}

impl MonsterIdPort for RandomMonsterIds {
    fn next_id(&self) -> MonsterId {
        MonsterId::new()
    }
}

/// Deterministic ids for testing: 1, 2, 3, ... as UUIDs.
#[cfg(test)]
pub struct SequentialMonsterIds(std::sync::atomic::AtomicU64);

#[cfg(test)]
impl SequentialMonsterIds {
    pub fn new() -> Self {
        Self(std::sync::atomic::AtomicU64::new(0))
    }

    /// The id the `n`th call (1-based) returns.
    pub fn nth(n: u64) -> MonsterId {
        MonsterId::from_uuid(uuid::Uuid::from_u128(u128::from(n)))
    }
}

#[cfg(test)]
impl MonsterIdPort for SequentialMonsterIds {
    fn next_id(&self) -> MonsterId {
        let n = self.0.fetch_add(1, std::sync::atomic::Ordering::Relaxed) + 1;
        Self::nth(n)
    }
}
