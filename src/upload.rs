//! List Upload Parsing
//!
//! Turns a user-supplied JSON file into the places payload of a
//! create-list request. Entries without a resolvable phone number are
//! dropped silently; structural problems fail with a typed error.

use serde::Deserialize;

use crate::api::types::UploadPlace;

/// Errors raised while processing an uploaded file
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    /// File content is not valid JSON
    #[error("File is not valid JSON: {0}")]
    InvalidJson(String),

    /// Top-level JSON value is not an array
    #[error("Expected a JSON array of places")]
    NotAnArray,

    /// Every entry was dropped during normalization
    #[error("No valid places found in file")]
    NoValidPlaces,
}

/// Raw entry shape as found in uploaded exports
///
/// Aliases cover the two field spellings seen in the wild: `phone` for
/// `phone_number` and `facebook_url` for `url`.
#[derive(Debug, Deserialize)]
struct RawPlace {
    #[serde(default)]
    name: Option<String>,
    #[serde(default, alias = "phone")]
    phone_number: Option<String>,
    #[serde(default, alias = "facebook_url")]
    url: Option<String>,
}

/// Normalize an Egyptian phone number to `+20...` form
///
/// Strips non-digits, then: `01...` gains a `+2` prefix, `201...` gains a
/// `+`, and the `2001...` double-prefix form collapses to `+201...`. Any
/// other shape resolves to no phone and the entry is dropped.
pub fn normalize_phone(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.starts_with("01") {
        Some(format!("+2{}", digits))
    } else if digits.starts_with("201") {
        Some(format!("+{}", digits))
    } else if digits.starts_with("2001") {
        Some(format!("+2{}", &digits[2..]))
    } else {
        None
    }
}

/// Parse an uploaded JSON file into normalized upload places
pub fn parse_places(text: &str) -> Result<Vec<UploadPlace>, UploadError> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| UploadError::InvalidJson(e.to_string()))?;

    let entries = value.as_array().ok_or(UploadError::NotAnArray)?;

    let places: Vec<UploadPlace> = entries
        .iter()
        .filter_map(|entry| {
            let raw: RawPlace = serde_json::from_value(entry.clone()).ok()?;
            let phone = normalize_phone(raw.phone_number.as_deref()?)?;
            Some(UploadPlace {
                name: raw.name.unwrap_or_default(),
                phone,
                facebook_url: raw.url.unwrap_or_default(),
            })
        })
        .collect();

    if places.is_empty() {
        return Err(UploadError::NoValidPlaces);
    }

    Ok(places)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_phone_known_prefixes() {
        assert_eq!(
            normalize_phone("0100000000"),
            Some("+20100000000".to_string())
        );
        assert_eq!(
            normalize_phone("201000000000"),
            Some("+201000000000".to_string())
        );
        // Double country prefix collapses to one
        assert_eq!(
            normalize_phone("2001000000000"),
            Some("+201000000000".to_string())
        );
        assert_eq!(normalize_phone("abc"), None);
        assert_eq!(normalize_phone(""), None);
        assert_eq!(normalize_phone("+44 20 7946 0000"), None);
    }

    #[test]
    fn test_normalize_phone_strips_formatting() {
        assert_eq!(
            normalize_phone("+2 (010) 1234-567"),
            Some("+20101234567".to_string())
        );
    }

    #[test]
    fn test_normalize_phone_idempotent() {
        let once = normalize_phone("0101234567").unwrap();
        assert_eq!(normalize_phone(&once), Some(once.clone()));

        let once = normalize_phone("2001000000000").unwrap();
        assert_eq!(normalize_phone(&once), Some(once));
    }

    #[test]
    fn test_parse_drops_unparsable_phones() {
        let json = r#"[
            {"name": "Cafe Nile", "phone_number": "0101234567", "url": "https://fb.com/cafenile"},
            {"name": "No Phone", "phone_number": "abc"}
        ]"#;

        let places = parse_places(json).unwrap();

        assert_eq!(places.len(), 1);
        assert_eq!(places[0].name, "Cafe Nile");
        assert_eq!(places[0].phone, "+20101234567");
        assert_eq!(places[0].facebook_url, "https://fb.com/cafenile");
    }

    #[test]
    fn test_parse_accepts_field_aliases() {
        let json = r#"[{"name": "Aliased", "phone": "0109876543", "facebook_url": "https://fb.com/a"}]"#;

        let places = parse_places(json).unwrap();

        assert_eq!(places[0].phone, "+20109876543");
        assert_eq!(places[0].facebook_url, "https://fb.com/a");
    }

    #[test]
    fn test_parse_defaults_missing_name_and_url() {
        let json = r#"[{"phone_number": "0101111111"}]"#;

        let places = parse_places(json).unwrap();

        assert_eq!(places[0].name, "");
        assert_eq!(places[0].facebook_url, "");
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        assert!(matches!(
            parse_places("not json"),
            Err(UploadError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_parse_rejects_non_array() {
        assert_eq!(
            parse_places(r#"{"name": "single object"}"#),
            Err(UploadError::NotAnArray)
        );
    }

    #[test]
    fn test_parse_rejects_files_with_no_usable_entries() {
        assert_eq!(parse_places("[]"), Err(UploadError::NoValidPlaces));
        assert_eq!(
            parse_places(r#"[{"name": "phoneless"}, {"phone_number": "999"}]"#),
            Err(UploadError::NoValidPlaces)
        );
    }
}
