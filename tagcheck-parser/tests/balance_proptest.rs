//! Property-based tests for extraction and balance checking

use proptest::prelude::*;
use tagcheck_parser::tagcheck::{
    collect_diagnostics, extract_tags, BalanceChecker, Diagnostic, TagToken, DEFAULT_TAG_NAMES,
};

fn tag_name() -> impl Strategy<Value = String> {
    prop::sample::select(DEFAULT_TAG_NAMES).prop_map(|name| name.to_string())
}

fn token() -> impl Strategy<Value = TagToken> {
    (tag_name(), any::<bool>()).prop_map(|(name, is_closing)| TagToken { name, is_closing })
}

/// Well-nested markup built from the allow-list.
fn balanced_source() -> impl Strategy<Value = String> {
    let leaf = Just(String::from("text"));
    leaf.prop_recursive(4, 32, 4, |inner| {
        (tag_name(), prop::collection::vec(inner, 0..4)).prop_map(|(name, children)| {
            format!("<{name} className=\"x\">{}</{name}>", children.concat())
        })
    })
}

proptest! {
    #[test]
    fn text_without_angle_brackets_yields_no_tokens(source in "[^<]*") {
        prop_assert!(extract_tags(&source).is_empty());
    }

    #[test]
    fn balanced_markup_is_silent(source in balanced_source()) {
        prop_assert!(collect_diagnostics(extract_tags(&source)).is_empty());
    }

    #[test]
    fn rendered_tokens_are_extracted_back(tokens in prop::collection::vec(token(), 0..40)) {
        let source: String = tokens.iter().map(|t| format!("{}>", t)).collect();
        prop_assert_eq!(extract_tags(&source), tokens);
    }

    #[test]
    fn stack_depth_tracks_opens_and_closes(tokens in prop::collection::vec(token(), 0..60)) {
        let mut checker = BalanceChecker::new();
        for token in tokens {
            let before = checker.depth();
            let closing = token.is_closing;
            checker.push(token);
            let expected = match (closing, before) {
                (false, _) => before + 1,
                (true, 0) => 0,
                (true, _) => before - 1,
            };
            prop_assert_eq!(checker.depth(), expected);
        }
    }

    #[test]
    fn at_most_one_unclosed_report_and_it_comes_last(
        tokens in prop::collection::vec(token(), 0..60)
    ) {
        let diagnostics = collect_diagnostics(tokens.clone());
        let unclosed: Vec<usize> = diagnostics
            .iter()
            .enumerate()
            .filter(|(_, d)| matches!(d, Diagnostic::Unclosed { .. }))
            .map(|(i, _)| i)
            .collect();
        prop_assert!(unclosed.len() <= 1);
        if let Some(&index) = unclosed.first() {
            prop_assert_eq!(index, diagnostics.len() - 1);
        }
        prop_assert_eq!(collect_diagnostics(tokens), diagnostics);
    }
}
