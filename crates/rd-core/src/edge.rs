pub type NodeId = usize;

/// Weighted undirected edge as supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub weight: f32,
    pub a: NodeId,
    pub b: NodeId,
}

impl Edge {
    pub fn new(weight: f32, a: NodeId, b: NodeId) -> Self {
        Self { weight, a, b }
    }

    pub fn is_self_loop(&self) -> bool {
        self.a == self.b
    }

    /// Endpoints ordered as `(row, col)` with `row >= col`.
    pub fn canonical(&self) -> (NodeId, NodeId) {
        canonical_pair(self.a, self.b)
    }
}

impl From<(f32, NodeId, NodeId)> for Edge {
    fn from((weight, a, b): (f32, NodeId, NodeId)) -> Self {
        Self { weight, a, b }
    }
}

pub fn canonical_pair(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    if b > a { (b, a) } else { (a, b) }
}
