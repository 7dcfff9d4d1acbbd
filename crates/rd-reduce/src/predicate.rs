use rd_core::{NodeId, PackedRelation};

/// Outcome of the local alternative-incidence test for one edge.
///
/// This is a degree check, not a bridge check: removing an edge both of
/// whose endpoints keep another neighbor may still split the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connectivity {
    /// `row` keeps at least one present edge other than `(row, col)`.
    pub row_retained: bool,
    /// `col` keeps at least one present edge other than `(row, col)`.
    pub col_retained: bool,
}

impl Connectivity {
    pub fn removable(self) -> bool {
        self.row_retained && self.col_retained
    }
}

/// Evaluates the test for canonical `(row, col)`, `row > col`.
pub fn check(relation: &PackedRelation, row: NodeId, col: NodeId) -> Connectivity {
    debug_assert!(row > col, "pair ({row}, {col}) is not canonical");
    Connectivity {
        row_retained: has_other_edge(relation, row, col),
        col_retained: has_other_edge(relation, col, row),
    }
}

pub fn is_removable(relation: &PackedRelation, row: NodeId, col: NodeId) -> bool {
    check(relation, row, col).removable()
}

// Scans the packed row of `node` (cells `(node, 0..=node)`) and then the
// column below it (cells `(node+1.., node)`), ignoring `excluded`.
fn has_other_edge(relation: &PackedRelation, node: NodeId, excluded: NodeId) -> bool {
    let in_row = relation
        .row(node)
        .iter()
        .enumerate()
        .any(|(j, &present)| present && j != excluded);
    if in_row {
        return true;
    }

    (node + 1..relation.node_count()).any(|i| i != excluded && relation.present(i, node))
}
