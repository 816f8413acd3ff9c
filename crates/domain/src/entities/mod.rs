//! Domain entities

mod monster;

pub use monster::Monster;
