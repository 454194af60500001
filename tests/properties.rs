//! Property-based tests for class-list sorting
//!
//! These invariants hold for any class list:
//! - Sorting keeps exactly the same tokens
//! - Sorting an already sorted list changes nothing
//! - Unrecognized tokens keep their relative order
//! - Whole-file formatting is idempotent

use proptest::prelude::*;
use tailsort::oracle::ClassRanker;
use tailsort::{sort_class_list, sort_classes, DesignSystem, ParserId, SortOptions};

/// Classes drawn from recognized utilities, variants and unknown words
fn class_token() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec![
            "flex", "block", "hidden", "p-0", "px-2", "mt-4", "-mt-4", "text-sm", "uppercase",
            "bg-red-500", "container", "sm:p-0", "hover:flex", "md:block", "[mask-type:alpha]",
        ])
        .prop_map(str::to_string),
        "[a-z]{3,8}".prop_map(|word| format!("x{word}")),
    ]
}

fn class_list() -> impl Strategy<Value = (String, Vec<String>)> {
    (
        prop::collection::vec(class_token(), 0..12),
        prop::sample::select(vec![" ", "  ", "\t", "\n  "]),
        prop::sample::select(vec!["", " ", "\n"]),
    )
        .prop_map(|(tokens, gap, edge)| (format!("{edge}{}{edge}", tokens.join(gap)), tokens))
}

fn sorted_tokens(mut tokens: Vec<String>) -> Vec<String> {
    tokens.sort();
    tokens
}

proptest! {
    #[test]
    fn prop_sorting_preserves_the_token_multiset((value, tokens) in class_list()) {
        let system = DesignSystem::default();
        let ranker = ClassRanker::new(&system);
        let out = sort_class_list(&value, &ranker, SortOptions::default());
        let out_tokens: Vec<String> = out.split_whitespace().map(str::to_string).collect();
        prop_assert_eq!(sorted_tokens(out_tokens), sorted_tokens(tokens));
    }

    #[test]
    fn prop_sorting_is_idempotent((value, _) in class_list()) {
        let system = DesignSystem::default();
        let ranker = ClassRanker::new(&system);
        let once = sort_class_list(&value, &ranker, SortOptions::default());
        let twice = sort_class_list(&once, &ranker, SortOptions::default());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_unrecognized_tokens_keep_their_order((value, tokens) in class_list()) {
        let system = DesignSystem::default();
        let ranker = ClassRanker::new(&system);
        let out = sort_class_list(&value, &ranker, SortOptions::default());

        let unknown_before: Vec<&str> = tokens
            .iter()
            .map(String::as_str)
            .filter(|t| ranker.rank(t).is_none())
            .collect();
        let unknown_after: Vec<&str> = out
            .split_whitespace()
            .filter(|t| ranker.rank(t).is_none())
            .collect();
        prop_assert_eq!(unknown_before, unknown_after);
    }

    #[test]
    fn prop_formatting_a_file_is_idempotent((value, _) in class_list()) {
        let system = DesignSystem::default();
        let value = value.replace('\n', " ");
        let source = format!("<div class=\"{value}\"></div>\n<p class='{value}'></p>");
        let once = sort_classes(&source, ParserId::Html, &system).unwrap();
        let twice = sort_classes(&once, ParserId::Html, &system).unwrap();
        prop_assert_eq!(once, twice);
    }
}
