//! Property-based tests for path reduction over larger, deeper inputs.
//!
//! The inline property tests in `reduce` use small alphabets; these run many
//! more cases with trees built by extending generated bases.

use super::normalize::normalize;
use super::reduce::reduce_paths;
use super::relationship::{is_sub_directory, PathRelationship};
use proptest::prelude::*;
use std::path::PathBuf;

fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,8}"
}

fn absolute_path_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec(path_component_strategy(), 1..6).prop_map(|parts| {
        let mut path = PathBuf::from("/");
        for part in parts {
            path.push(part);
        }
        path
    })
}

// A handful of bases, each with a few descendants hung underneath.
fn tree_strategy() -> impl Strategy<Value = Vec<PathBuf>> {
    prop::collection::vec(
        (absolute_path_strategy(), prop::collection::vec(1..4usize, 0..4)),
        1..6,
    )
    .prop_map(|groups| {
        let mut all = Vec::new();
        for (base, depths) in groups {
            for depth in depths {
                let mut child = base.clone();
                for i in 0..depth {
                    child.push(format!("level{i}"));
                }
                all.push(child);
            }
            all.push(base);
        }
        all
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Reduction is idempotent
    #[test]
    fn reduction_idempotent(paths in tree_strategy()) {
        let once = reduce_paths(&paths);
        prop_assert_eq!(reduce_paths(&once), once);
    }

    // Every input path is a kept root or beneath one
    #[test]
    fn reduction_covers_all_inputs(paths in tree_strategy()) {
        let roots = reduce_paths(&paths);
        for p in &paths {
            prop_assert!(roots.iter().any(|r| r == p || is_sub_directory(r, p)));
        }
    }

    // Kept roots are pairwise unrelated or identical duplicates
    #[test]
    fn reduction_roots_pairwise_unrelated(paths in tree_strategy()) {
        let roots = reduce_paths(&paths);
        for a in &roots {
            for b in &roots {
                let rel = PathRelationship::between(a, b);
                prop_assert!(matches!(rel, PathRelationship::Same | PathRelationship::Unrelated));
            }
        }
    }

    // Output never grows and keeps sorted order
    #[test]
    fn reduction_sorted_and_no_larger(paths in tree_strategy()) {
        let roots = reduce_paths(&paths);
        prop_assert!(roots.len() <= paths.len());
        prop_assert!(roots.windows(2).all(|w| w[0].as_os_str() <= w[1].as_os_str()));
    }

    // Normalizing an already-clean absolute root leaves it unchanged
    #[test]
    fn normalize_clean_absolute_is_identity(path in absolute_path_strategy()) {
        prop_assert_eq!(normalize(&path).unwrap(), path);
    }
}
