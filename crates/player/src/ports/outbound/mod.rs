//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! so roster state never depends on a concrete id generator.

pub mod id_port;

pub use id_port::MonsterIdPort;

#[cfg(test)]
pub use id_port::MockMonsterIdPort;
