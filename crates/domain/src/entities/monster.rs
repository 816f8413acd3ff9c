//! Monster entity - a single record in the roster
//!
//! Monsters are immutable once built: there is no edit operation, so every
//! field is exposed through a getter only. The id comes from whatever id
//! source the caller injects and is never reused within a roster.

use serde::{Deserialize, Serialize};

use crate::ids::MonsterId;
use crate::value_objects::{BodyPartCount, MonsterName};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    id: MonsterId,
    name: MonsterName,
    eye_count: BodyPartCount,
    tentacle_count: BodyPartCount,
}

impl Monster {
    pub fn new(
        id: MonsterId,
        name: MonsterName,
        eye_count: BodyPartCount,
        tentacle_count: BodyPartCount,
    ) -> Self {
        Self {
            id,
            name,
            eye_count,
            tentacle_count,
        }
    }

    /// The monsters shown on first launch, in display order.
    ///
    /// `next_id` is called once per monster.
    pub fn starter_roster(mut next_id: impl FnMut() -> MonsterId) -> Vec<Monster> {
        STARTERS
            .iter()
            .filter_map(|(name, eyes, tentacles)| {
                let name = MonsterName::new(*name).ok()?;
                Some(Monster::new(
                    next_id(),
                    name,
                    BodyPartCount::new(*eyes),
                    BodyPartCount::new(*tentacles),
                ))
            })
            .collect()
    }

    pub fn id(&self) -> MonsterId {
        self.id
    }

    pub fn name(&self) -> &MonsterName {
        &self.name
    }

    pub fn eye_count(&self) -> BodyPartCount {
        self.eye_count
    }

    pub fn tentacle_count(&self) -> BodyPartCount {
        self.tentacle_count
    }
}

const STARTERS: [(&str, u32, u32); 2] = [("Zoglorp", 4, 8), ("Blibbex", 1, 3)];
