//! Property-based tests for archive path functions.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::path::{archive_root, last_segment, safe_relative_path, strip_entry_prefix, subtree_prefix};
    use proptest::prelude::*;
    use std::path::Component;

    // ============================================================================
    // archive_root property tests
    // ============================================================================

    proptest! {
        /// Property: the archive root is a single path segment
        #[test]
        fn archive_root_is_single_segment(repo in "[a-zA-Z0-9._-]{1,20}", branch in "[a-zA-Z0-9._/-]{1,30}") {
            let root = archive_root(&repo, &branch);
            prop_assert!(!root.contains('/'));
            let expected = format!("{}-", repo);
            prop_assert!(root.starts_with(&expected));
        }
    }

    // ============================================================================
    // subtree prefix filtering property tests
    // ============================================================================

    proptest! {
        /// Property: a sibling directory sharing a name prefix never matches
        #[test]
        fn sibling_with_shared_prefix_never_matches(
            subpath in "[a-z]{1,8}(/[a-z]{1,8}){0,2}",
            suffix in "[a-z0-9]{1,4}",
            file in "[a-z]{1,8}\\.txt",
        ) {
            let prefix = subtree_prefix("repo-main", &subpath);
            let sibling = format!("repo-main/{}{}/{}", subpath, suffix, file);
            prop_assert_eq!(strip_entry_prefix(&sibling, &prefix), None);
        }

        /// Property: stripping leaves no trace of the archive root or subpath
        #[test]
        fn stripped_names_carry_no_prefix_remnants(
            subpath in "[a-z]{1,8}(/[a-z]{1,8}){0,2}",
            rest in "[a-z]{1,8}(/[a-z]{1,8}){0,2}",
        ) {
            let prefix = subtree_prefix("repo-main", &subpath);
            let entry = format!("{}{}", prefix, rest);
            let stripped = strip_entry_prefix(&entry, &prefix);
            prop_assert_eq!(stripped, Some(rest.as_str()));
            prop_assert!(!rest.starts_with('/'));
        }

        /// Property: the destination name is always the final subpath segment
        #[test]
        fn last_segment_has_no_separator(subpath in "[a-z]{1,8}(/[a-z]{1,8}){0,4}") {
            let segment = last_segment(&subpath);
            prop_assert!(!segment.is_empty());
            prop_assert!(!segment.contains('/'));
            prop_assert!(subpath.ends_with(segment));
        }
    }

    // ============================================================================
    // safe_relative_path property tests
    // ============================================================================

    proptest! {
        /// Property: accepted paths only contain normal components
        #[test]
        fn safe_relative_path_only_normal_components(input in "[a-z./]{0,24}") {
            if let Some(path) = safe_relative_path(&input) {
                for component in path.components() {
                    prop_assert!(
                        matches!(component, Component::Normal(_)),
                        "unexpected component {:?} from input '{}'",
                        component,
                        input
                    );
                }
            }
        }

        /// Property: any name containing a parent-directory segment is rejected
        #[test]
        fn safe_relative_path_rejects_parent_segments(
            head in "[a-z]{0,8}",
            tail in "[a-z]{1,8}",
        ) {
            let name = if head.is_empty() {
                format!("../{}", tail)
            } else {
                format!("{}/../../{}", head, tail)
            };
            prop_assert_eq!(safe_relative_path(&name), None);
        }
    }
}
