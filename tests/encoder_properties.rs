//! Property tests for the fitting and projection contracts of every encoder.
//!
//! Run with: `cargo test --test encoder_properties`

use ftrgen::prelude::*;
use proptest::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;

// =============================================================================
// NUMERIC
// =============================================================================

mod numeric {
    use super::*;

    fn fitted(values: &[f64]) -> Numeric {
        let mut encoder = Numeric::default();
        for &v in values {
            encoder.update(v);
        }
        encoder
    }

    #[test]
    fn test_scenario_two_and_eight() {
        let encoder = fitted(&[2.0, 8.0]);
        assert_eq!(encoder.get_ftr(2.0), 0.0);
        assert_eq!(encoder.get_ftr(8.0), 1.0);
        assert_eq!(encoder.get_ftr(5.0), 0.5);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn prop_min_not_above_max(values in proptest::collection::vec(-1e9f64..1e9, 1..50)) {
            let encoder = fitted(&values);
            prop_assert!(encoder.min() <= encoder.max());
            prop_assert!(encoder.is_fitted());
        }

        #[test]
        fn prop_bounds_map_to_zero_and_one(values in proptest::collection::vec(-1e6f64..1e6, 2..50)) {
            let encoder = fitted(&values);
            prop_assume!(encoder.max() > encoder.min());

            prop_assert_eq!(encoder.get_ftr(encoder.min()), 0.0);
            prop_assert_eq!(encoder.get_ftr(encoder.max()), 1.0);
        }

        #[test]
        fn prop_scaling_is_monotonic(
            values in proptest::collection::vec(-1e6f64..1e6, 2..20),
            a in -2e6f64..2e6,
            b in -2e6f64..2e6,
        ) {
            let encoder = fitted(&values);
            prop_assume!(encoder.max() > encoder.min());

            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(encoder.get_ftr(lo) <= encoder.get_ftr(hi));
        }

        #[test]
        fn prop_passthrough_without_normalization(
            values in proptest::collection::vec(-1e6f64..1e6, 0..20),
            x in -1e6f64..1e6,
        ) {
            let mut encoder = Numeric::new(NumericParams { normalize: false });
            for v in values {
                encoder.update(v);
            }
            prop_assert_eq!(encoder.get_ftr(x), x);
        }
    }
}

// =============================================================================
// NOMINAL
// =============================================================================

mod nominal {
    use super::*;

    #[test]
    fn test_scenario_colors() {
        let mut encoder = Nominal::new();
        for color in ["red", "blue", "red", "green"] {
            encoder.update(color);
        }

        assert_eq!(encoder.num_values(), 3);
        assert_eq!(encoder.get_ftr("red"), Some(0));
        assert_eq!(encoder.get_ftr("blue"), Some(1));
        assert_eq!(encoder.get_ftr("green"), Some(2));
        assert_eq!(encoder.get_ftr("purple"), None);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_ids_unique_and_dense(values in proptest::collection::vec("[a-e]{1,3}", 0..60)) {
            let mut encoder = Nominal::new();
            for v in &values {
                encoder.update(v);
            }

            let distinct: HashSet<&String> = values.iter().collect();
            prop_assert_eq!(encoder.num_values(), distinct.len());

            let ids: HashSet<usize> = distinct
                .iter()
                .map(|v| encoder.get_ftr(v).unwrap())
                .collect();
            prop_assert_eq!(ids.len(), distinct.len());
            prop_assert!(ids.iter().all(|&id| id < encoder.num_values()));
        }

        #[test]
        fn prop_updates_are_idempotent(values in proptest::collection::vec("[a-z]{1,4}", 1..30)) {
            let mut encoder = Nominal::new();
            for v in &values {
                encoder.update(v);
            }
            let before: Vec<Option<usize>> = values.iter().map(|v| encoder.get_ftr(v)).collect();

            for v in &values {
                encoder.update(v);
            }
            let after: Vec<Option<usize>> = values.iter().map(|v| encoder.get_ftr(v)).collect();

            prop_assert_eq!(before, after);
        }

        #[test]
        fn prop_unseen_value_advances_full_width(
            values in proptest::collection::vec("[a-z]{1,4}", 0..30),
            start in 0usize..1000,
        ) {
            let mut encoder = Nominal::new();
            for v in &values {
                encoder.update(v);
            }

            let mut builder = FeatureVectorBuilder::with_offset(start);
            builder.append_field(&encoder, "UNSEEN-VALUE").unwrap();

            prop_assert!(builder.vector().is_empty());
            prop_assert_eq!(builder.offset(), start + encoder.num_values());
        }
    }
}

// =============================================================================
// MULTI-NOMINAL
// =============================================================================

mod multi_nominal {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_multi_hot_is_a_set(
            fit in proptest::collection::vec("[a-f]", 1..20),
            query in proptest::collection::vec("[a-h]", 0..20),
        ) {
            let mut encoder = MultiNominal::new();
            encoder.update_all(&fit);

            let vector = encoder.encode_to_vector(&query[..]).unwrap();

            let expected: HashSet<usize> = query.iter().filter_map(|q| encoder.get_ftr(q)).collect();
            prop_assert_eq!(vector.len(), expected.len());
            prop_assert!(vector.is_sorted());
            prop_assert!(vector.iter().all(|(i, w)| expected.contains(&i) && w == 1.0));
        }
    }
}

// =============================================================================
// TOKEN
// =============================================================================

mod token {
    use super::*;

    fn encoder() -> Token {
        Token::new(
            Arc::new(StopWordSet::new(["the", "a", "is"])),
            Arc::new(NoStemmer),
        )
    }

    #[test]
    fn test_same_document_twice() {
        let mut encoder = encoder();
        let text = "the cat is on the mat with a hat";

        encoder.update(text);
        let size = encoder.num_tokens();
        encoder.update(text);

        assert_eq!(encoder.docs(), 2);
        assert_eq!(encoder.num_tokens(), size);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_docs_count_updates(docs in proptest::collection::vec("[a-d ]{0,20}", 0..20)) {
            let mut encoder = encoder();
            for d in &docs {
                encoder.update(d);
            }
            prop_assert_eq!(encoder.docs(), docs.len() as u64);
        }

        #[test]
        fn prop_weights_are_term_frequencies(
            fit in "[a-c]{1,2}( [a-c]{1,2}){0,10}",
            text in "[a-d]{1,2}( [a-d]{1,2}){0,10}",
        ) {
            let mut encoder = encoder();
            encoder.update(&fit);

            let vector = encoder.encode_to_vector(text.as_str()).unwrap();
            prop_assert!(vector.is_sorted());

            let tokens = encoder.get_token_v(&text);
            for (index, weight) in vector.iter() {
                let token = encoder.get_val(index).unwrap();
                let count = tokens.iter().filter(|t| t.as_str() == token).count();
                prop_assert_eq!(weight, count as f64);
            }
        }
    }
}

// =============================================================================
// SPARSE NUMERIC
// =============================================================================

mod sparse_numeric {
    use super::*;

    #[test]
    fn test_scenario_offset_ten() {
        let input = SparseVector::from(vec![(0, 1.0), (3, 2.0)]);

        let mut encoder = SparseNumeric::new();
        encoder.update(&input);
        assert_eq!(encoder.num_values(), 4);

        let mut builder = FeatureVectorBuilder::with_offset(10);
        builder.append_field(&encoder, &input).unwrap();

        assert_eq!(builder.offset(), 14);
        assert_eq!(builder.build().entries(), &[(10, 1.0), (13, 2.0)]);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_width_is_max_index_plus_one(
            inputs in proptest::collection::vec(
                proptest::collection::vec((0usize..500, -10.0f64..10.0), 0..10),
                1..10,
            )
        ) {
            let mut encoder = SparseNumeric::new();
            let mut max_index = None;
            for entries in inputs {
                let vector = SparseVector::from(entries);
                max_index = max_index.max(vector.max_index());
                encoder.update(&vector);
            }
            prop_assert_eq!(encoder.num_values(), max_index.map_or(0, |m| m + 1));
        }
    }
}
