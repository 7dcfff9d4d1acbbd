//! Foundational types for reverse-delete edge reduction.
//!
//! ## Nodes and Edges
//! Nodes are plain indices in `[0, node_count)`. An [`Edge`] carries an `f32`
//! weight and two endpoints; its canonical form orders the endpoints as
//! `(row, col)` with `row >= col`.
//!
//! ## Packed Relation
//! [`PackedRelation`] stores a symmetric boolean relation in
//! `n * (n + 1) / 2` cells. Cell `(row, col)` sits at
//! `row * (row + 1) / 2 + col` after canonicalization. Diagonal cells are
//! addressable but never set by edges.
//!
//! ## Edge-list Text
//! [`parse_edge_list`] reads `node_count edge_count` followed by
//! `weight first second` triples. Parsing does not validate node ranges;
//! that happens when an engine is built from the list.

mod edge;
mod error;
mod input;
mod relation;

pub use edge::{Edge, NodeId, canonical_pair};
pub use error::Error;
pub use input::{EdgeList, format_edge_list, parse_edge_list};
pub use relation::{PackedRelation, packed_index};
