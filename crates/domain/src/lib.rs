extern crate self as monsterdex_domain;

pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::Monster;
pub use error::DomainError;
pub use ids::MonsterId;
pub use value_objects::{BodyPartCount, MonsterName};
