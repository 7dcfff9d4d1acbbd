//! Reverse-delete style edge elimination.
//!
//! [`ReverseDelete`] keeps two views of one edge set: a [`PackedRelation`]
//! for constant-time incidence queries and an [`EdgeLedger`] ordered by
//! ascending weight. Each [`ReverseDelete::reduce_step`] walks the ledger
//! once from the heaviest edge down and removes every edge whose endpoints
//! both keep another incident edge.
//!
//! Behavior worth knowing:
//! - The removal test is local (a degree check per endpoint), so a pass may
//!   disconnect the graph.
//! - The least-weight edge is never evaluated.
//! - Skipped edges are not revisited within a pass. A second pass removes
//!   nothing more, because degrees only fall as the scan proceeds.
//!
//! [`PackedRelation`]: rd_core::PackedRelation

mod driver;
mod engine;
mod ledger;
pub mod predicate;

pub use driver::PassReport;
pub use engine::ReverseDelete;
pub use ledger::{Cursor, EdgeLedger};
pub use predicate::Connectivity;
