use core::fmt;

use crate::Error;
use crate::edge::{NodeId, canonical_pair};

/// Symmetric boolean relation over `node_count` nodes in packed
/// lower-triangular layout.
///
/// Cell `(row, col)` with `row >= col` lives at `row * (row + 1) / 2 + col`.
/// Every accessor canonicalizes its pair first, so `(a, b)` and `(b, a)`
/// alias the same cell.
///
/// Indices are not validated beyond slice bounds: passing a node
/// `>= node_count()` is a caller error and panics (or, for a pair whose
/// packed index happens to land in range, reads the wrong cell in release
/// builds where the debug assertion is compiled out).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedRelation {
    node_count: usize,
    cells: Vec<bool>,
}

impl PackedRelation {
    /// # Panics
    /// Panics if the packed size overflows or cannot be allocated. Use
    /// [`PackedRelation::try_new`] for untrusted node counts.
    pub fn new(node_count: usize) -> Self {
        Self::try_new(node_count).expect("packed relation too large")
    }

    pub fn try_new(node_count: usize) -> Result<Self, Error> {
        let len = packed_len(node_count).ok_or(Error::GraphTooLarge { node_count })?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| Error::GraphTooLarge { node_count })?;
        cells.resize(len, false);
        Ok(Self { node_count, cells })
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of packed cells, `n * (n + 1) / 2`.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn present(&self, u: NodeId, v: NodeId) -> bool {
        self.cells[self.index(u, v)]
    }

    pub fn set(&mut self, u: NodeId, v: NodeId, value: bool) {
        let idx = self.index(u, v);
        self.cells[idx] = value;
    }

    /// Cells `(row, 0..=row)`, contiguous in the packed layout.
    pub fn row(&self, row: NodeId) -> &[bool] {
        assert!(row < self.node_count, "row index out of bounds");
        let start = triangle_start(row);
        &self.cells[start..start + row + 1]
    }

    pub fn degree(&self, v: NodeId) -> usize {
        let below = self.row(v).iter().filter(|&&p| p).count();
        let above = (v + 1..self.node_count)
            .filter(|&i| self.present(i, v))
            .count();
        below + above
    }

    pub fn count_present(&self) -> usize {
        self.cells.iter().filter(|&&p| p).count()
    }

    fn index(&self, u: NodeId, v: NodeId) -> usize {
        debug_assert!(
            u < self.node_count && v < self.node_count,
            "node pair ({u}, {v}) out of range for {} nodes",
            self.node_count
        );
        packed_index(u, v)
    }
}

/// Linear index of the unordered pair `(u, v)`.
pub fn packed_index(u: NodeId, v: NodeId) -> usize {
    let (row, col) = canonical_pair(u, v);
    triangle_start(row) + col
}

fn triangle_start(row: usize) -> usize {
    row * (row + 1) / 2
}

fn packed_len(node_count: usize) -> Option<usize> {
    node_count
        .checked_add(1)
        .and_then(|v| v.checked_mul(node_count))
        .map(|v| v / 2)
}

impl fmt::Display for PackedRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.node_count {
            for (col, &p) in self.row(row).iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                f.write_str(if p { "1" } else { "0" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
