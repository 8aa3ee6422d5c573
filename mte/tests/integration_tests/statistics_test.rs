// tests/integration_tests/statistics_test.rs
use super::common::SAMPLE_DOCUMENT;
use mte::{WordStrategy, compute_statistics, compute_statistics_with, format_duration};
use std::time::Duration;

#[test]
fn test_empty_document() {
    let stats = compute_statistics("");
    assert_eq!(stats.characters, 0);
    assert_eq!(stats.words, 0);
    assert_eq!(stats.sentences, 0);
    assert_eq!(stats.paragraphs, 0);
    assert_eq!(stats.reading_time_label(), "0 sec");
}

#[test]
fn test_hello_world() {
    let stats = compute_statistics("Hello world.");
    assert_eq!(stats.words, 2);
    assert_eq!(stats.sentences, 1);
}

#[test]
fn test_contractions_and_terminator_runs() {
    let stats = compute_statistics("Don't stop. Why? Go!!");
    assert_eq!(stats.sentences, 3, "`.`, `?` and `!!` are three terminators");
    assert_eq!(stats.words, 4, "\"Don't\" is a single word");

    let stats = compute_statistics_with("Don't stop. Why? Go!!", WordStrategy::Pattern);
    assert_eq!(stats.words, 4);
}

#[test]
fn test_sample_document() {
    let stats = compute_statistics(SAMPLE_DOCUMENT);
    assert_eq!(stats.characters, SAMPLE_DOCUMENT.chars().count());
    assert_eq!(stats.paragraphs, 2, "One blank line separates two paragraphs");
    assert_eq!(stats.sentences, 3);
    assert!(stats.words >= 15, "Expected a word count in the high teens");
}

#[test]
fn test_reading_time_for_long_text() {
    let text = "word ".repeat(1000);
    let stats = compute_statistics(&text);
    assert_eq!(stats.words, 1000);
    assert_eq!(stats.reading_time, Duration::from_secs(300));
    assert_eq!(stats.reading_time_label(), "5 min 0 sec");
}

#[test]
fn test_format_duration_examples() {
    assert_eq!(format_duration(45.0), "45 sec");
    assert_eq!(format_duration(90.0), "1 min 30 sec");
    assert_eq!(format_duration(3661.0), "1 hr 01 min 01 sec");
}
