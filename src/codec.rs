use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// (De)serialization failures, kept separate from the keychain error taxonomy
/// so callers can tell a malformed payload apart from a backend failure.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Failed to encode the secret: {0}")]
    EncodingFailed(String),

    #[error("Failed to decode the secret: {0}")]
    DecodingFailed(String),
}

/// Pluggable encode/decode capability between typed models and the opaque
/// byte payload the backend persists.
pub trait Codec {
    fn encode<T: Serialize>(&self, model: &T) -> Result<Vec<u8>, CodecError>;
    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError>;
}

/// JSON codec over serde_json. The default for both the library and the CLI.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn encode<T: Serialize>(&self, model: &T) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec(model).map_err(|e| CodecError::EncodingFailed(e.to_string()))
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError> {
        serde_json::from_slice(bytes).map_err(|e| CodecError::DecodingFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Token {
        id: u32,
        name: String,
    }

    #[test]
    fn test_json_roundtrip() {
        let token = Token {
            id: 7,
            name: "api".into(),
        };
        let bytes = JsonCodec.encode(&token).unwrap();
        let back: Token = JsonCodec.decode(&bytes).unwrap();
        assert_eq!(back, token);
    }

    #[test]
    fn test_decode_garbage_returns_decoding_failed() {
        let err = JsonCodec.decode::<Token>(b"not json").unwrap_err();
        assert!(matches!(err, CodecError::DecodingFailed(_)));
    }

    #[test]
    fn test_decode_wrong_shape_returns_decoding_failed() {
        let bytes = JsonCodec.encode(&"just a string").unwrap();
        let err = JsonCodec.decode::<Token>(&bytes).unwrap_err();
        assert!(matches!(err, CodecError::DecodingFailed(_)));
    }
}
