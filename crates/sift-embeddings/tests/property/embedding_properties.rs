use proptest::prelude::*;
use sift_embeddings::{cosine_similarity, HashEmbedder};

fn arb_vector(len: usize) -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(-100.0f32..100.0, len)
}

fn arb_pair() -> impl Strategy<Value = (Vec<f32>, Vec<f32>)> {
    (1usize..512).prop_flat_map(|len| (arb_vector(len), arb_vector(len)))
}

// ── Embedding determinism ────────────────────────────────────────────────

proptest! {
    #[test]
    fn same_text_same_vector(text in ".*", dim in 1usize..1024) {
        prop_assert_eq!(HashEmbedder::vector(&text, dim), HashEmbedder::vector(&text, dim));
    }

    #[test]
    fn vector_has_requested_length(text in ".*", dim in 1usize..2048) {
        prop_assert_eq!(HashEmbedder::vector(&text, dim).len(), dim);
    }

    #[test]
    fn components_stay_in_unit_range(text in ".*", dim in 1usize..256) {
        for x in HashEmbedder::vector(&text, dim) {
            prop_assert!((-1.0..=1.0).contains(&x));
        }
    }
}

// ── Cosine similarity ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn cosine_is_symmetric((a, b) in arb_pair()) {
        let ab = cosine_similarity(&a, &b);
        let ba = cosine_similarity(&b, &a);
        prop_assert!((ab - ba).abs() < 1e-12, "{} != {}", ab, ba);
    }

    #[test]
    fn cosine_is_bounded((a, b) in arb_pair()) {
        let s = cosine_similarity(&a, &b);
        prop_assert!((-1.0..=1.0).contains(&s));
    }

    #[test]
    fn cosine_with_self_is_one(a in (1usize..512).prop_flat_map(arb_vector)) {
        prop_assume!(a.iter().any(|&x| x != 0.0));
        let s = cosine_similarity(&a, &a);
        prop_assert!((s - 1.0).abs() < 1e-9, "self-similarity {}", s);
    }

    #[test]
    fn hash_vectors_self_similarity_is_one(text in ".*") {
        let v = HashEmbedder::vector(&text, 128);
        prop_assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-9);
    }
}
