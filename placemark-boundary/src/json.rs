//! JSON text codec for placemark records.
//!
//! The document is a flat object with the keys `id`, `name`, `description`,
//! `latitude` and `longitude`. There is no version tag.

use placemark_entities as e;
use thiserror::Error;

/// Why a document could not be decoded into a record.
#[derive(Debug, Error)]
pub enum DecodingError {
    /// Malformed JSON, a missing key, or a value of the wrong type.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// The `id` value is a string but not a well-formed UUID.
    #[error(transparent)]
    Id(#[from] e::id::IdParseError),
}

/// Encodes a record as a JSON document.
pub fn encode(location: &e::location::Location) -> serde_json::Result<String> {
    serde_json::to_string(&crate::Location::from(location.clone()))
}

/// Decodes a JSON document into a record.
///
/// Fails if a required key is missing or a value cannot be parsed into its
/// expected type. The caller decides how to react; nothing is retried or
/// substituted.
pub fn decode(document: &str) -> Result<e::location::Location, DecodingError> {
    let location: crate::Location = serde_json::from_str(document)?;
    Ok(location.try_into()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_decode_round_trip() {
        let location =
            e::location::Location::new("Eiffel Tower", "Iconic landmark", 48.8584, 2.2945);
        let document = encode(&location).unwrap();
        let decoded = decode(&document).unwrap();
        assert_eq!(location, decoded);
    }

    #[test]
    fn decode_a_handwritten_document() {
        let document = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "name": "Brandenburg Gate",
            "description": "City landmark",
            "latitude": 52.5163,
            "longitude": 13.3777
        }"#;
        let location = decode(document).unwrap();
        assert_eq!(
            "550e8400-e29b-41d4-a716-446655440000",
            location.id().to_string()
        );
        assert_eq!("Brandenburg Gate", location.name);
        assert_eq!(52.5163, location.latitude());
        assert_eq!(13.3777, location.longitude());
    }

    #[test]
    fn decode_fails_without_latitude() {
        let document = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "name": "n",
            "description": "d",
            "longitude": 2.2945
        }"#;
        let err = decode(document).unwrap_err();
        assert!(matches!(err, DecodingError::Json(_)));
    }

    #[test]
    fn decode_fails_on_non_numeric_longitude() {
        let document = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "name": "n",
            "description": "d",
            "latitude": 48.8584,
            "longitude": "abc"
        }"#;
        let err = decode(document).unwrap_err();
        assert!(matches!(err, DecodingError::Json(_)));
    }

    #[test]
    fn decode_fails_on_malformed_id() {
        let document = r#"{
            "id": "xyz",
            "name": "n",
            "description": "d",
            "latitude": 48.8584,
            "longitude": 2.2945
        }"#;
        let err = decode(document).unwrap_err();
        assert!(matches!(err, DecodingError::Id(_)));
    }

    #[test]
    fn field_order_does_not_matter() {
        let document = r#"{
            "longitude": 2.2945,
            "latitude": 48.8584,
            "description": "d",
            "name": "n",
            "id": "550e8400-e29b-41d4-a716-446655440000"
        }"#;
        assert!(decode(document).is_ok());
    }
}
