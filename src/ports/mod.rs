//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the service core and something
//! outside it (wall-clock time, identifier generation). Implementations live
//! in `src/adapters/`.

pub mod clock;
pub mod id_gen;

pub use clock::Clock;
pub use id_gen::IdGenerator;
