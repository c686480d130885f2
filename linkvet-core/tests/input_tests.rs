// Tests for input normalization and deduplication

use linkvet_core::error::ValidateError;
use linkvet_core::input::{load_url_set, normalize_line, normalize_urls};
use std::fs;
use tempfile::TempDir;

// ============================================================================
// Line Normalization Tests
// ============================================================================

#[test]
fn test_normalize_line_trims_whitespace() {
    let result = normalize_line("  https://example.com  ");
    assert_eq!(result, Some("https://example.com".to_string()));
}

#[test]
fn test_normalize_line_strips_trailing_slash() {
    let result = normalize_line("https://example.com/repo/");
    assert_eq!(result, Some("https://example.com/repo".to_string()));
}

#[test]
fn test_normalize_line_strips_multiple_trailing_slashes() {
    let result = normalize_line("https://example.com/repo///");
    assert_eq!(result, Some("https://example.com/repo".to_string()));
}

#[test]
fn test_normalize_line_empty() {
    assert_eq!(normalize_line(""), None);
}

#[test]
fn test_normalize_line_whitespace_only() {
    assert_eq!(normalize_line("   \t  "), None);
}

#[test]
fn test_normalize_line_keeps_internal_slashes() {
    let result = normalize_line("https://example.com/a/b/c");
    assert_eq!(result, Some("https://example.com/a/b/c".to_string()));
}

// ============================================================================
// Deduplication Tests
// ============================================================================

#[test]
fn test_dedup_trailing_slash_variants() {
    // `url` and `url/` must collapse into a single entry equal to `url`
    let urls = normalize_urls(["https://a.test/", "https://a.test", "https://b.test"]);
    assert_eq!(urls, vec!["https://a.test", "https://b.test"]);
}

#[test]
fn test_dedup_exact_duplicates() {
    let urls = normalize_urls(["https://a.test", "https://a.test", "https://a.test"]);
    assert_eq!(urls, vec!["https://a.test"]);
}

#[test]
fn test_dedup_preserves_first_seen_order() {
    let urls = normalize_urls(["https://c.test", "https://a.test", "https://c.test/"]);
    assert_eq!(urls, vec!["https://c.test", "https://a.test"]);
}

#[test]
fn test_normalize_urls_skips_blank_lines() {
    let urls = normalize_urls(["", "https://a.test", "   ", "https://b.test", ""]);
    assert_eq!(urls, vec!["https://a.test", "https://b.test"]);
}

#[test]
fn test_normalize_urls_idempotent() {
    let input = vec![
        "  https://a.test/ ".to_string(),
        "https://b.test".to_string(),
        "https://a.test".to_string(),
    ];
    let once = normalize_urls(&input);
    let twice = normalize_urls(&once);
    assert_eq!(once, twice);
}

#[test]
fn test_normalize_urls_empty_input() {
    let urls = normalize_urls(Vec::<String>::new());
    assert!(urls.is_empty());
}

// ============================================================================
// File Loading Tests
// ============================================================================

#[test]
fn test_load_url_set_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("urls.txt");
    fs::write(
        &input_path,
        "https://a.test/\n\nhttps://a.test\n  https://b.test  \n",
    )
    .unwrap();

    let urls = load_url_set(&input_path).unwrap();
    assert_eq!(urls, vec!["https://a.test", "https://b.test"]);
}

#[test]
fn test_load_url_set_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.txt");

    let result = load_url_set(&missing);
    assert!(matches!(result, Err(ValidateError::SourceNotFound(_))));
}

#[test]
fn test_load_url_set_empty_file() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("empty.txt");
    fs::write(&input_path, "").unwrap();

    let urls = load_url_set(&input_path).unwrap();
    assert!(urls.is_empty());
}
