//! Value objects for monster records
//!
//! Both types are valid by construction; the player layer builds them from
//! raw form text and reports failures per field.

mod body_part_count;
mod names;

pub use body_part_count::BodyPartCount;
pub use names::MonsterName;
