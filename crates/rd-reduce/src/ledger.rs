use core::cmp::Ordering;

use rd_core::Edge;

/// Position of an entry in an [`EdgeLedger`], counted in ascending weight
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cursor(usize);

impl Cursor {
    pub fn position(self) -> usize {
        self.0
    }

    pub fn is_first(self) -> bool {
        self.0 == 0
    }
}

/// Edges ordered by ascending weight. Equal weights keep insertion order.
///
/// The ledger only shrinks after construction.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EdgeLedger {
    entries: Vec<Edge>,
}

impl EdgeLedger {
    /// Builds a ledger from caller-ordered edges. Self-loops are dropped
    /// without notice.
    pub fn new(edges: impl IntoIterator<Item = Edge>) -> Self {
        let mut entries: Vec<Edge> = edges.into_iter().filter(|e| !e.is_self_loop()).collect();
        // Stable sort keeps insertion order among equal weights.
        entries.sort_by(|l, r| weight_order(l.weight, r.weight));
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Edge> + ExactSizeIterator {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[Edge] {
        &self.entries
    }

    pub fn get(&self, cursor: Cursor) -> Option<&Edge> {
        self.entries.get(cursor.0)
    }

    /// Cursor at the greatest-weight entry, or `None` when empty.
    pub fn last_cursor(&self) -> Option<Cursor> {
        self.entries.len().checked_sub(1).map(Cursor)
    }

    /// Moves to the next-smaller entry. `None` once past the first entry.
    pub fn retreat(&self, cursor: Cursor) -> Option<Cursor> {
        cursor.0.checked_sub(1).map(Cursor)
    }

    /// Erases the entry at `cursor` and returns it together with a cursor on
    /// the entry that preceded it.
    ///
    /// # Panics
    /// Panics if `cursor` does not address an entry.
    pub fn remove_and_retreat(&mut self, cursor: Cursor) -> (Edge, Option<Cursor>) {
        assert!(cursor.0 < self.entries.len(), "ledger cursor out of bounds");
        let removed = self.entries.remove(cursor.0);
        (removed, self.retreat(cursor))
    }
}

impl<'a> IntoIterator for &'a EdgeLedger {
    type Item = &'a Edge;
    type IntoIter = core::slice::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn weight_order(l: f32, r: f32) -> Ordering {
    l.partial_cmp(&r).unwrap_or_else(|| l.total_cmp(&r))
}

#[cfg(test)]
mod tests {
    use rd_core::Edge;

    use super::{Cursor, EdgeLedger};

    fn weights(ledger: &EdgeLedger) -> Vec<f32> {
        ledger.iter().map(|e| e.weight).collect()
    }

    #[test]
    fn sorts_ascending_and_drops_self_loops() {
        let ledger = EdgeLedger::new([
            Edge::new(3.0, 0, 2),
            Edge::new(9.0, 1, 1),
            Edge::new(1.0, 0, 1),
            Edge::new(2.0, 1, 2),
        ]);

        assert_eq!(ledger.len(), 3);
        assert_eq!(weights(&ledger), vec![1.0, 2.0, 3.0]);
        assert!(ledger.iter().all(|e| !e.is_self_loop()));
    }

    #[test]
    fn equal_weights_keep_insertion_order() {
        let ledger = EdgeLedger::new([
            Edge::new(2.0, 0, 1),
            Edge::new(1.0, 4, 5),
            Edge::new(2.0, 2, 3),
            Edge::new(2.0, 1, 3),
        ]);

        let pairs: Vec<_> = ledger.iter().map(|e| (e.a, e.b)).collect();
        assert_eq!(pairs, vec![(4, 5), (0, 1), (2, 3), (1, 3)]);
    }

    #[test]
    fn signed_zeros_tie() {
        let ledger = EdgeLedger::new([Edge::new(0.0, 0, 1), Edge::new(-0.0, 1, 2)]);
        assert_eq!(ledger.as_slice()[0].a, 0);
    }

    #[test]
    fn cursor_walks_from_greatest_to_first() {
        let ledger = EdgeLedger::new([
            Edge::new(1.0, 0, 1),
            Edge::new(2.0, 1, 2),
            Edge::new(3.0, 0, 2),
        ]);

        let last = ledger.last_cursor().expect("non-empty ledger");
        assert_eq!(last, Cursor(2));
        assert_eq!(ledger.get(last).map(|e| e.weight), Some(3.0));

        let mid = ledger.retreat(last).expect("has predecessor");
        let first = ledger.retreat(mid).expect("has predecessor");
        assert!(first.is_first());
        assert_eq!(ledger.retreat(first), None);
    }

    #[test]
    fn remove_and_retreat_lands_on_predecessor() {
        let mut ledger = EdgeLedger::new([
            Edge::new(1.0, 0, 1),
            Edge::new(2.0, 1, 2),
            Edge::new(3.0, 0, 2),
        ]);

        let (removed, cursor) = ledger.remove_and_retreat(Cursor(1));
        assert_eq!(removed, Edge::new(2.0, 1, 2));
        let cursor = cursor.expect("predecessor exists");
        assert_eq!(ledger.get(cursor), Some(&Edge::new(1.0, 0, 1)));
        assert_eq!(weights(&ledger), vec![1.0, 3.0]);

        let (_, cursor) = ledger.remove_and_retreat(Cursor(0));
        assert_eq!(cursor, None);
        assert_eq!(weights(&ledger), vec![3.0]);
    }

    #[test]
    fn empty_ledger_has_no_cursor() {
        let ledger = EdgeLedger::new([Edge::new(1.0, 3, 3)]);
        assert!(ledger.is_empty());
        assert_eq!(ledger.last_cursor(), None);
    }
}
