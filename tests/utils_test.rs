use spoytcli::types::Track;
use spoytcli::utils::*;

// Helper function to create a test track
fn create_test_track(name: &str, artists: &[&str]) -> Track {
    Track {
        name: name.to_string(),
        artists: artists.iter().map(|a| a.to_string()).collect(),
        duration_ms: Some(180_000),
    }
}

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    // Should not be empty
    assert!(!challenge.is_empty());

    // Should be deterministic - same input produces same output
    let challenge2 = generate_code_challenge(verifier);
    assert_eq!(challenge, challenge2);

    // Different input should produce different output
    let challenge3 = generate_code_challenge("different_verifier");
    assert_ne!(challenge, challenge3);

    // Should be base64-encoded (URL-safe, no padding)
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_normalize_match_key_case_insensitive() {
    let key1 = normalize_match_key("Song A", &["Artist X".to_string()]);
    let key2 = normalize_match_key("SONG a", &["artist x".to_string()]);
    assert_eq!(key1, key2);
    assert_eq!(key1, "song a artist x");
}

#[test]
fn test_normalize_match_key_collapses_whitespace() {
    let key = normalize_match_key("  Song   A ", &[" Artist\tX ".to_string()]);
    assert_eq!(key, "song a artist x");
}

#[test]
fn test_normalize_match_key_includes_all_artists_in_order() {
    let key = normalize_match_key(
        "Song A",
        &["Artist X".to_string(), "Artist Y".to_string()],
    );
    assert_eq!(key, "song a artist x artist y");

    // Order matters
    let swapped = normalize_match_key(
        "Song A",
        &["Artist Y".to_string(), "Artist X".to_string()],
    );
    assert_ne!(key, swapped);
}

#[test]
fn test_build_search_query() {
    let track = create_test_track("Song A", &["Artist X", "Artist Y"]);
    assert_eq!(build_search_query(&track), "Song A Artist X Artist Y");

    // Original casing is preserved, the query is not the cache key
    let track = create_test_track("SONG a", &["ARTIST x"]);
    assert_eq!(build_search_query(&track), "SONG a ARTIST x");
}

#[test]
fn test_join_artists() {
    assert_eq!(join_artists(&["Artist X".to_string()]), "Artist X");
    assert_eq!(
        join_artists(&["Artist X".to_string(), "Artist Y".to_string()]),
        "Artist X, Artist Y"
    );
    assert_eq!(join_artists(&[]), "");
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(200_000), "3:20");
    assert_eq!(format_duration(60_000), "1:00");
    assert_eq!(format_duration(59_999), "0:59");

    // Seconds are zero-padded
    assert_eq!(format_duration(61_000), "1:01");

    // Over an hour stays in minutes
    assert_eq!(format_duration(3_600_000), "60:00");
}
