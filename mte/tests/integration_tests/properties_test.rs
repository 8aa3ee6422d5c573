// tests/integration_tests/properties_test.rs
use super::common::count_markers;
use mte::{compute_statistics, highlight_lines, render_highlight};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_character_count_is_exact(text in any::<String>()) {
        prop_assert_eq!(compute_statistics(&text).characters, text.chars().count());
    }

    #[test]
    fn prop_statistics_are_idempotent(text in any::<String>()) {
        prop_assert_eq!(compute_statistics(&text), compute_statistics(&text));
    }

    #[test]
    fn prop_highlight_is_idempotent(text in any::<String>()) {
        prop_assert_eq!(render_highlight(&text), render_highlight(&text));
    }

    #[test]
    fn prop_markers_account_for_all_whitespace(text in "[ a-z\t/:#<>&\n-]{0,64}") {
        let html = render_highlight(&text);
        let expected = text.matches(' ').count() + 4 * text.matches('\t').count();
        prop_assert_eq!(count_markers(&html), expected);
    }

    #[test]
    fn prop_one_rendered_line_per_source_line(text in "[ a-z/:#>\n-]{1,64}") {
        let html = render_highlight(&text);
        prop_assert_eq!(html.split('\n').count(), text.split('\n').count());
        prop_assert_eq!(highlight_lines(&text).len(), text.split('\n').count());
    }

    #[test]
    fn prop_blank_text_has_zero_counts(text in "[ \t\n\r]{0,32}") {
        let stats = compute_statistics(&text);
        prop_assert_eq!(stats.words, 0);
        prop_assert_eq!(stats.sentences, 0);
        prop_assert_eq!(stats.paragraphs, 0);
    }
}
