//! Property tests for the reduction invariants over random simple graphs.

use std::collections::HashSet;

use proptest::prelude::*;
use rd_core::Edge;
use rd_reduce::ReverseDelete;

fn graph() -> impl Strategy<Value = (usize, Vec<Edge>)> {
    (1usize..12).prop_flat_map(|n| {
        let triples = prop::collection::vec((0..n, 0..n, -100i32..100), 0..=n * 3);
        (Just(n), triples).prop_map(|(n, triples)| {
            let mut seen = HashSet::new();
            let edges = triples
                .into_iter()
                .filter(|&(a, b, _)| a == b || seen.insert((a.max(b), a.min(b))))
                .map(|(a, b, w)| Edge::new(w as f32 * 0.5, a, b))
                .collect();
            (n, edges)
        })
    })
}

fn assert_views_agree(rd: &ReverseDelete) -> Result<(), TestCaseError> {
    let rel = rd.relation();
    for e in rd.edges() {
        prop_assert!(rel.present(e.a, e.b), "ledger edge ({}, {}) missing", e.a, e.b);
    }
    prop_assert_eq!(rel.count_present(), rd.edge_count());
    for v in 0..rd.node_count() {
        prop_assert!(!rel.present(v, v));
    }
    Ok(())
}

proptest! {
    #[test]
    fn relation_mirrors_ledger((n, edges) in graph(), passes in 1usize..4) {
        let mut rd = ReverseDelete::new(n, edges).expect("generated graph is valid");
        assert_views_agree(&rd)?;
        for _ in 0..passes {
            rd.reduce_step();
            assert_views_agree(&rd)?;
        }
    }

    #[test]
    fn ledger_never_grows((n, edges) in graph()) {
        let mut rd = ReverseDelete::new(n, edges).expect("generated graph is valid");
        let mut last = rd.edge_count();
        for _ in 0..3 {
            let report = rd.reduce_step();
            prop_assert!(rd.edge_count() <= last);
            prop_assert_eq!(report.remaining, rd.edge_count());
            prop_assert_eq!(last - report.removed, rd.edge_count());
            last = rd.edge_count();
        }
    }

    #[test]
    fn least_weight_edge_survives((n, edges) in graph()) {
        let mut rd = ReverseDelete::new(n, edges).expect("generated graph is valid");
        let Some(&first) = rd.edges().first() else {
            return Ok(());
        };
        rd.reduce_step();
        rd.reduce_step();
        prop_assert_eq!(rd.edges().first(), Some(&first));
    }

    #[test]
    fn no_self_loops_survive((n, edges) in graph()) {
        let loops = edges.iter().filter(|e| e.is_self_loop()).count();
        let mut rd = ReverseDelete::new(n, edges).expect("generated graph is valid");
        prop_assert_eq!(rd.self_loops_dropped(), loops);
        rd.reduce_step();
        prop_assert!(rd.edges().iter().all(|e| e.a != e.b));
    }

    #[test]
    fn second_pass_is_a_no_op((n, edges) in graph()) {
        let mut rd = ReverseDelete::new(n, edges).expect("generated graph is valid");
        rd.reduce_step();
        let once = rd.current_edges();
        let report = rd.reduce_step();
        prop_assert_eq!(report.removed, 0);
        prop_assert_eq!(rd.current_edges(), once);
    }

    #[test]
    fn every_kept_edge_has_a_pinned_endpoint((n, edges) in graph()) {
        let mut rd = ReverseDelete::new(n, edges).expect("generated graph is valid");
        rd.reduce_step();
        let rel = rd.relation();
        for e in rd.edges().iter().skip(1) {
            let (row, col) = e.canonical();
            prop_assert!(
                rel.degree(row) == 1 || rel.degree(col) == 1,
                "edge ({}, {}) should have been removable", e.a, e.b
            );
        }
    }

    #[test]
    fn ascending_order_is_kept((n, edges) in graph()) {
        let mut rd = ReverseDelete::new(n, edges).expect("generated graph is valid");
        rd.reduce_step();
        prop_assert!(rd.edges().windows(2).all(|w| w[0].weight <= w[1].weight));
    }
}
