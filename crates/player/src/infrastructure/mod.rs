pub mod ids;

pub use ids::RandomMonsterIds;

#[cfg(test)]
pub use ids::SequentialMonsterIds;
