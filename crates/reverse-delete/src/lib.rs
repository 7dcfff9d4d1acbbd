//! Umbrella crate for the `reverse-delete` workspace.
//!
//! Re-exports the foundational types from `rd-core` and the reduction engine
//! from `rd-reduce`.

pub use rd_core::*;
pub use rd_reduce::*;
