use daynote_core::{DateKey, DateKeyParseError, NoteExt, NoteReference, ViewerConfig};
use std::str::FromStr;

fn key(value: &str) -> DateKey {
    DateKey::from_str(value).unwrap()
}

#[test]
fn parse_format_roundtrip() {
    for value in ["2026-02-20", "2026-12-31", "2000-01-01"] {
        assert_eq!(key(value).to_string(), value);
    }
}

#[test]
fn parse_rejects_garbage_and_impossible_dates() {
    assert!(matches!(
        DateKey::from_str("today").unwrap_err(),
        DateKeyParseError::Malformed(_)
    ));
    assert!(matches!(
        DateKey::from_str("2026-2-20").unwrap_err(),
        DateKeyParseError::Malformed(_)
    ));
    assert!(matches!(
        DateKey::from_str("2026-02-30").unwrap_err(),
        DateKeyParseError::ImpossibleDate(_)
    ));
    assert!(matches!(
        DateKey::from_str("2025-02-29").unwrap_err(),
        DateKeyParseError::ImpossibleDate(_)
    ));
}

#[test]
fn leap_day_parses_in_leap_years() {
    assert_eq!(key("2028-02-29").to_string(), "2028-02-29");
}

#[test]
fn ordering_matches_string_order() {
    let mut keys = vec![key("2026-03-01"), key("2026-02-19"), key("2026-02-28")];
    keys.sort();
    let rendered: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
    let mut strings = rendered.clone();
    strings.sort();
    assert_eq!(rendered, strings);
}

#[test]
fn step_roundtrip_returns_original_key() {
    for value in ["2026-02-28", "2026-12-31", "2026-01-01"] {
        let original = key(value);
        let forward = original.step(1).expect("step forward should stay in range");
        assert_eq!(forward.step(-1).unwrap(), original);
    }
}

#[test]
fn step_zero_is_identity() {
    let original = key("2026-02-20");
    assert_eq!(original.step(0).unwrap(), original);
}

#[test]
fn serde_uses_canonical_string_form() {
    let serialized = serde_json::to_string(&key("2026-02-20")).unwrap();
    assert_eq!(serialized, "\"2026-02-20\"");

    let deserialized: DateKey = serde_json::from_str("\"2026-03-01\"").unwrap();
    assert_eq!(deserialized, key("2026-03-01"));

    assert!(serde_json::from_str::<DateKey>("\"2026-02-31\"").is_err());
}

#[test]
fn config_serde_roundtrip() {
    let config = ViewerConfig {
        start_date: key("2026-02-20"),
        notes_folder: "notes".to_string(),
        ext: NoteExt::Jpg,
    };
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"jpg\""));
    let back: ViewerConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn reference_composition_is_deterministic() {
    let a = NoteReference::compose("notes", key("2026-02-20"), NoteExt::Png);
    let b = NoteReference::compose("notes", key("2026-02-20"), NoteExt::Png);
    assert_eq!(a, b);
    assert_eq!(a.to_string(), "notes/2026-02-20.png");
}
