use super::*;
use crate::audio::MediaSource;
use std::path::PathBuf;

fn mp3() -> Vec<String> {
    vec!["mp3".to_string()]
}

#[test]
fn parse_credits_splits_requester_and_title() {
    let c = parse_credits("Alice - Sunrise.mp3", &mp3());
    assert_eq!(c.requester.as_deref(), Some("Alice"));
    assert_eq!(c.title.as_deref(), Some("Sunrise"));
}

#[test]
fn parse_credits_without_separator_has_no_title() {
    let c = parse_credits("Sunrise.mp3", &mp3());
    assert_eq!(c.requester.as_deref(), Some("Sunrise"));
    assert_eq!(c.title, None);
}

#[test]
fn parse_credits_ignores_parts_after_the_second() {
    let c = parse_credits("Bob - Night - Live.mp3", &mp3());
    assert_eq!(c.requester.as_deref(), Some("Bob"));
    assert_eq!(c.title.as_deref(), Some("Night"));
}

#[test]
fn parse_credits_strips_only_a_trailing_known_extension() {
    let c = parse_credits("Eve - mix.mp3 edit.MP3", &mp3());
    assert_eq!(c.title.as_deref(), Some("mix.mp3 edit"));

    let c = parse_credits("Eve - Rain.flac", &mp3());
    assert_eq!(c.title.as_deref(), Some("Rain.flac"));
}

#[test]
fn track_name_comes_from_file_name_or_uri_segment() {
    let t = Track::from_path("/music/requests/Alice - Sunrise.mp3");
    assert_eq!(t.name, "Alice - Sunrise.mp3");
    assert_eq!(
        t.source,
        MediaSource::File(PathBuf::from("/music/requests/Alice - Sunrise.mp3"))
    );

    let t = Track::from_uri("https://cdn.example.org/requests/Bob%20-%20Night.mp3");
    assert_eq!(t.name, "Bob%20-%20Night.mp3");
    assert!(matches!(t.source, MediaSource::Uri(_)));
}
