//! Shared response-envelope handling for generator and verifier bodies.
//!
//! Bodies are decoded in two steps: the envelope first, so a non-success
//! status is reported as such even when the payload has a different shape,
//! then the payload into the chart kind's own schema.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{Endpoint, VerifyError};

/// Status code the endpoints use for success.
pub const STATUS_OK: u16 = 200;

/// Generator envelope: `{status, message, data}`.
#[derive(Deserialize)]
struct GenerateEnvelope {
    status: u16,
    #[serde(default, deserialize_with = "null_as_default")]
    message: String,
    #[serde(default)]
    data: Value,
}

/// Verifier envelope: an optional `status`/`message` beside the payload.
#[derive(Deserialize)]
struct VerifyEnvelope {
    #[serde(default)]
    status: Option<u16>,
    #[serde(default, deserialize_with = "null_as_default")]
    message: String,
}

/// Read an explicit `null` the same way as a missing key.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn decode_error(endpoint: Endpoint) -> impl Fn(serde_json::Error) -> VerifyError {
    move |error| VerifyError::Decode { endpoint, error }
}

/// Decode a generator body, returning its `data` payload as `T`.
pub fn decode_generated<T: DeserializeOwned>(body: &str) -> Result<T, VerifyError> {
    let envelope: GenerateEnvelope =
        serde_json::from_str(body).map_err(decode_error(Endpoint::Generator))?;
    if envelope.status != STATUS_OK {
        return Err(VerifyError::Status {
            endpoint: Endpoint::Generator,
            status: envelope.status,
            message: envelope.message,
        });
    }
    serde_json::from_value(envelope.data).map_err(decode_error(Endpoint::Generator))
}

/// Decode a verifier body as `T`, after checking its optional status.
pub fn decode_reference<T: DeserializeOwned>(body: &str) -> Result<T, VerifyError> {
    let value: Value = serde_json::from_str(body).map_err(decode_error(Endpoint::Verifier))?;
    let envelope = VerifyEnvelope::deserialize(&value).map_err(decode_error(Endpoint::Verifier))?;
    if let Some(status) = envelope.status.filter(|s| *s != STATUS_OK) {
        return Err(VerifyError::Status {
            endpoint: Endpoint::Verifier,
            status,
            message: envelope.message,
        });
    }
    serde_json::from_value(value).map_err(decode_error(Endpoint::Verifier))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Payload {
        n: u8,
    }

    #[test]
    fn generated_payload_is_unwrapped() {
        let payload: Payload =
            decode_generated(r#"{"status": 200, "message": "ok", "data": {"n": 3}}"#).unwrap();
        assert_eq!(payload.n, 3);
    }

    #[test]
    fn generated_status_checked_before_payload_shape() {
        let err = decode_generated::<Payload>(
            r#"{"status": 500, "message": "ephemeris unavailable", "data": null}"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            VerifyError::Status { endpoint: Endpoint::Generator, status: 500, ref message }
                if message == "ephemeris unavailable"
        ));
    }

    #[test]
    fn generated_body_without_status_is_a_decode_error() {
        let err = decode_generated::<Payload>(r#"{"data": {"n": 1}}"#).unwrap_err();
        assert!(matches!(err, VerifyError::Decode { endpoint: Endpoint::Generator, .. }));
    }

    #[test]
    fn reference_status_is_optional() {
        let payload: Payload = decode_reference(r#"{"n": 9}"#).unwrap();
        assert_eq!(payload.n, 9);
        let payload: Payload = decode_reference(r#"{"status": 200, "n": 4}"#).unwrap();
        assert_eq!(payload.n, 4);
    }

    #[test]
    fn reference_failure_status_is_reported() {
        let err = decode_reference::<Payload>(r#"{"status": 429, "message": "slow down"}"#)
            .unwrap_err();
        assert!(matches!(
            err,
            VerifyError::Status { endpoint: Endpoint::Verifier, status: 429, .. }
        ));
    }

    #[test]
    fn null_message_reads_as_empty() {
        let payload: Payload =
            decode_generated(r#"{"status": 200, "message": null, "data": {"n": 5}}"#).unwrap();
        assert_eq!(payload.n, 5);

        let err = decode_reference::<Payload>(r#"{"status": 503, "message": null}"#).unwrap_err();
        assert!(matches!(
            err,
            VerifyError::Status { endpoint: Endpoint::Verifier, status: 503, ref message }
                if message.is_empty()
        ));
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        let err = decode_reference::<Payload>("<html>").unwrap_err();
        assert!(matches!(err, VerifyError::Decode { endpoint: Endpoint::Verifier, .. }));
    }
}
