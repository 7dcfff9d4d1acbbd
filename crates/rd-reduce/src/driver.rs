use rd_core::PackedRelation;
use tracing::{debug, instrument, trace};

use crate::ledger::{Cursor, EdgeLedger};
use crate::predicate;

/// Summary of one descending pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PassReport {
    /// Edges the predicate was evaluated on.
    pub evaluated: usize,
    pub removed: usize,
    /// Ledger size after the pass.
    pub remaining: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Scanning(Cursor),
    Done,
}

/// Walks the ledger from greatest to least weight, removing every edge the
/// connectivity predicate allows. The least-weight entry is never evaluated.
#[instrument(level = "debug", skip_all, fields(edges = ledger.len()))]
pub(crate) fn run_pass(relation: &mut PackedRelation, ledger: &mut EdgeLedger) -> PassReport {
    let mut report = PassReport::default();
    let mut state = initial_state(ledger);

    while let ScanState::Scanning(cursor) = state {
        state = step(cursor, relation, ledger, &mut report);
    }

    report.remaining = ledger.len();
    debug!(
        evaluated = report.evaluated,
        removed = report.removed,
        remaining = report.remaining,
        "reduction pass complete"
    );
    report
}

fn initial_state(ledger: &EdgeLedger) -> ScanState {
    settle(ledger.last_cursor())
}

fn settle(cursor: Option<Cursor>) -> ScanState {
    match cursor {
        Some(c) if !c.is_first() => ScanState::Scanning(c),
        _ => ScanState::Done,
    }
}

fn step(
    cursor: Cursor,
    relation: &mut PackedRelation,
    ledger: &mut EdgeLedger,
    report: &mut PassReport,
) -> ScanState {
    let Some(edge) = ledger.get(cursor).copied() else {
        return ScanState::Done;
    };
    let (row, col) = edge.canonical();
    let verdict = predicate::check(relation, row, col);
    report.evaluated += 1;
    trace!(
        weight = edge.weight,
        row,
        col,
        row_retained = verdict.row_retained,
        col_retained = verdict.col_retained,
        "evaluated edge"
    );

    if !verdict.removable() {
        return settle(ledger.retreat(cursor));
    }

    relation.set(row, col, false);
    let (_, next) = ledger.remove_and_retreat(cursor);
    report.removed += 1;
    debug!(weight = edge.weight, a = edge.a, b = edge.b, "removed edge");
    trace!("relation after removal:\n{relation}");

    settle(next)
}
