use proptest::prelude::*;
use sift_confidence::*;

fn arb_signal() -> impl Strategy<Value = f64> {
    prop_oneof![
        8 => -2.0f64..2.0,
        1 => Just(f64::NAN),
        1 => Just(f64::INFINITY),
    ]
}

fn in_unit(x: f64) -> bool {
    (0.0..=1.0).contains(&x)
}

// ── Bounded outputs ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn retrieval_score_bounded(sims in prop::collection::vec(arb_signal(), 0..50)) {
        prop_assert!(in_unit(retrieval_score(&sims)));
    }

    #[test]
    fn consistency_score_bounded(sims in prop::collection::vec(arb_signal(), 0..50)) {
        prop_assert!(in_unit(consistency_score(&sims)));
    }

    #[test]
    fn faithfulness_bounded(unsupported in 0usize..100, total in 0usize..100) {
        prop_assert!(in_unit(faithfulness_score(unsupported, total)));
    }

    #[test]
    fn fact_score_bounded(
        probs in prop::collection::vec(arb_signal(), 0..20),
        weights in prop::option::of(prop::collection::vec(arb_signal(), 0..30)),
    ) {
        prop_assert!(in_unit(fact_score(&probs, weights.as_deref())));
    }

    #[test]
    fn confidence_bounded(
        rs in arb_signal(), cs in arb_signal(), fs in arb_signal(), fact in arb_signal(),
        alpha in 0.0f64..5.0, beta in 0.0f64..5.0, gamma in 0.0f64..5.0, delta in 0.0f64..5.0,
    ) {
        let w = ConfidenceWeights::new(alpha, beta, gamma, delta);
        prop_assert!(in_unit(confidence_score(rs, cs, fs, fact, &w)));
    }
}

// ── Convexity ────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn retrieval_score_within_min_max(sims in prop::collection::vec(0.0f64..1.0, 1..30)) {
        let s = retrieval_score(&sims);
        let min = sims.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = sims.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(s >= min - 1e-12 && s <= max + 1e-12, "{} not in [{}, {}]", s, min, max);
    }

    #[test]
    fn confidence_within_signal_range(
        rs in 0.0f64..1.0, cs in 0.0f64..1.0, fs in 0.0f64..1.0, fact in 0.0f64..1.0,
    ) {
        let s = confidence_score(rs, cs, fs, fact, &ConfidenceWeights::default());
        let min = rs.min(cs).min(fs).min(fact);
        let max = rs.max(cs).max(fs).max(fact);
        prop_assert!(s >= min - 1e-12 && s <= max + 1e-12);
    }

    #[test]
    fn scoring_is_idempotent(sims in prop::collection::vec(0.0f64..1.0, 0..20)) {
        prop_assert_eq!(retrieval_score(&sims), retrieval_score(&sims));
        prop_assert_eq!(consistency_score(&sims), consistency_score(&sims));
    }
}
