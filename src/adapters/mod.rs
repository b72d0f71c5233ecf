//! Adapters implementing the port traits.
//!
//! `live` talks to the real system; `fixed` returns predictable values for
//! tests and demos.

pub mod fixed;
pub mod live;
