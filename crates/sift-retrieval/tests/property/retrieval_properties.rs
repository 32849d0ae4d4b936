//! Property tests for local ranking and distance mapping.

use proptest::prelude::*;
use sift_core::models::IndexEntry;
use sift_retrieval::ranking::top_k;
use sift_retrieval::remote::protocol::distance_to_score;

const DIM: usize = 6;

fn arb_vector() -> impl Strategy<Value = Vec<f32>> {
    proptest::collection::vec(-10.0f32..10.0, DIM)
}

fn arb_index() -> impl Strategy<Value = Vec<IndexEntry>> {
    proptest::collection::vec(arb_vector(), 0..40).prop_map(|vectors| {
        vectors
            .into_iter()
            .enumerate()
            .map(|(i, embedding)| IndexEntry {
                id: format!("e{i}"),
                title: String::new(),
                content: String::new(),
                source: String::new(),
                embedding,
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn ranking_is_sorted_and_capped(entries in arb_index(), query in arb_vector(), k in 1usize..20) {
        let ranked = top_k(&entries, &query, k);
        prop_assert_eq!(ranked.len(), k.min(entries.len()));
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
        for p in &ranked {
            let s = p.score.unwrap_or(f64::NAN);
            prop_assert!((-1.0..=1.0).contains(&s));
        }
    }

    #[test]
    fn ranking_is_deterministic(entries in arb_index(), query in arb_vector(), k in 1usize..20) {
        prop_assert_eq!(top_k(&entries, &query, k), top_k(&entries, &query, k));
    }

    #[test]
    fn smaller_k_is_a_prefix(entries in arb_index(), query in arb_vector(), k in 1usize..20) {
        let wide = top_k(&entries, &query, k + 5);
        let narrow = top_k(&entries, &query, k);
        prop_assert_eq!(&wide[..narrow.len()], &narrow[..]);
    }

    #[test]
    fn distance_score_is_unit_bounded(d in proptest::num::f64::ANY) {
        match distance_to_score(d) {
            Some(s) => prop_assert!((0.0..=1.0).contains(&s)),
            None => prop_assert!(!d.is_finite()),
        }
    }
}
