//! Property-based tests for stencil-validator.

use proptest::prelude::*;
use serde_json::json;
use stencil_validator::prelude::*;

// ============================================================================
// BOUNDS: min/max agree with plain comparisons
// ============================================================================

proptest! {
    #[test]
    fn number_bounds_match_comparison(lo in -1000i64..1000, span in 0i64..1000, n in -3000i64..3000) {
        let hi = lo + span;
        let schema = Schema::number().rule(min(lo as f64)).rule(max(hi as f64));
        prop_assert_eq!(schema.is_valid(&json!(n)), (lo..=hi).contains(&n));
    }

    #[test]
    fn string_length_counts_chars(s in "\\PC{0,20}", bound in 0usize..20) {
        let schema = Schema::string().rule(max_length(bound));
        prop_assert_eq!(schema.is_valid(&json!(s)), s.chars().count() <= bound);
    }
}

// ============================================================================
// IMMUTABILITY: refining never changes the receiver
// ============================================================================

proptest! {
    #[test]
    fn refinement_leaves_receiver_untouched(n in -100i64..100) {
        let base = Schema::number();
        let refined = base.clone().rule(more_than(0.0));
        prop_assert!(base.is_valid(&json!(n)));
        prop_assert_eq!(refined.is_valid(&json!(n)), n > 0);
    }

    #[test]
    fn validation_is_idempotent(s in ".{0,30}") {
        let schema = Schema::string().required(None).rule(lowercase());
        let first = schema.validate(&json!(s));
        let second = schema.validate(&json!(s));
        prop_assert_eq!(first, second);
    }
}
