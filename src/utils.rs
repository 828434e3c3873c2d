use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::types::Track;

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Cache key for video lookups: track name plus all artists in listed order,
/// lowercased, with runs of whitespace collapsed to single spaces. Used only
/// as a key, never sent as the search query itself.
pub fn normalize_match_key(name: &str, artists: &[String]) -> String {
    let mut raw = name.to_string();
    for artist in artists {
        raw.push(' ');
        raw.push_str(artist);
    }

    raw.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Search query for a track: name and artist names joined by single spaces.
pub fn build_search_query(track: &Track) -> String {
    let mut query = track.name.clone();
    for artist in &track.artists {
        query.push(' ');
        query.push_str(artist);
    }
    query
}

pub fn join_artists(artists: &[String]) -> String {
    artists.join(", ")
}

pub fn format_duration(duration_ms: u64) -> String {
    let minutes = duration_ms / 60_000;
    let seconds = (duration_ms % 60_000) / 1_000;
    format!("{}:{:02}", minutes, seconds)
}
