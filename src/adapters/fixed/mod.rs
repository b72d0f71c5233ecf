//! Deterministic adapters with predictable output.

pub mod clock;
pub mod id_gen;

pub use clock::FixedClock;
pub use id_gen::SequentialIdGenerator;
