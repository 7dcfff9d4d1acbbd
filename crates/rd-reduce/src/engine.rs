use rd_core::{Edge, EdgeList, Error, NodeId, PackedRelation};
use tracing::debug;

use crate::driver::{self, PassReport};
use crate::ledger::EdgeLedger;

/// Reverse-delete reduction engine.
///
/// Owns the packed relation and the edge ledger, which always describe the
/// same edge set between calls. The engine is `Send + Sync`; callers sharing
/// it across threads must guard the whole engine with one lock.
#[derive(Debug, Clone)]
pub struct ReverseDelete {
    relation: PackedRelation,
    ledger: EdgeLedger,
    self_loops_dropped: usize,
}

impl ReverseDelete {
    /// Builds the engine from caller-ordered edges.
    ///
    /// Self-loops are dropped. Out-of-range endpoints, NaN weights and a
    /// repeated unordered pair are rejected.
    pub fn new(node_count: usize, edges: impl IntoIterator<Item = Edge>) -> Result<Self, Error> {
        if node_count == 0 {
            return Err(Error::EmptyGraph);
        }

        let mut relation = PackedRelation::try_new(node_count)?;
        let mut kept = Vec::new();
        let mut self_loops_dropped = 0;

        for edge in edges {
            check_node(edge.a, node_count)?;
            check_node(edge.b, node_count)?;
            if edge.is_self_loop() {
                self_loops_dropped += 1;
                continue;
            }
            if edge.weight.is_nan() {
                return Err(Error::NanWeight {
                    a: edge.a,
                    b: edge.b,
                });
            }
            if relation.present(edge.a, edge.b) {
                return Err(Error::DuplicateEdge {
                    a: edge.a,
                    b: edge.b,
                });
            }
            relation.set(edge.a, edge.b, true);
            kept.push(edge);
        }

        let ledger = EdgeLedger::new(kept);
        debug!(
            node_count,
            edges = ledger.len(),
            self_loops_dropped,
            "built reverse-delete engine"
        );

        Ok(Self {
            relation,
            ledger,
            self_loops_dropped,
        })
    }

    pub fn from_edge_list(list: &EdgeList) -> Result<Self, Error> {
        Self::new(list.node_count, list.edges.iter().copied())
    }

    /// Runs one full descending pass.
    pub fn reduce_step(&mut self) -> PassReport {
        driver::run_pass(&mut self.relation, &mut self.ledger)
    }

    /// Repeats passes until one removes nothing or `max_passes` have run.
    /// Returns the reports of every pass that ran.
    pub fn reduce_until_stable(&mut self, max_passes: usize) -> Vec<PassReport> {
        let mut reports = Vec::new();
        while reports.len() < max_passes {
            let report = self.reduce_step();
            reports.push(report);
            if report.removed == 0 {
                break;
            }
        }
        reports
    }

    /// Snapshot of the remaining edges in ascending weight order.
    pub fn current_edges(&self) -> Vec<Edge> {
        self.ledger.as_slice().to_vec()
    }

    pub fn edges(&self) -> &[Edge] {
        self.ledger.as_slice()
    }

    pub fn node_count(&self) -> usize {
        self.relation.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.ledger.len()
    }

    pub fn self_loops_dropped(&self) -> usize {
        self.self_loops_dropped
    }

    pub fn relation(&self) -> &PackedRelation {
        &self.relation
    }

    pub fn ledger(&self) -> &EdgeLedger {
        &self.ledger
    }

    pub fn to_edge_list(&self) -> EdgeList {
        EdgeList {
            node_count: self.node_count(),
            edges: self.current_edges(),
        }
    }
}

fn check_node(node: NodeId, node_count: usize) -> Result<(), Error> {
    if node >= node_count {
        return Err(Error::NodeOutOfRange { node, node_count });
    }
    Ok(())
}
