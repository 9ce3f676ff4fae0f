use crate::core::errors::ExchangeError;
use serde::Deserialize;

/// Universal `{code, message, data}` response wrapper.
///
/// Every endpoint of the exchange answers in this shape; `code == 0` is
/// success. `data` is `Option` because action endpoints answer with `null`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    pub code: i64,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.code == 0
    }
}

/// Unwrap an envelope into its payload.
///
/// A non-zero code becomes [`ExchangeError::ApiError`] carrying the
/// exchange's code and message verbatim. A success envelope without a
/// payload is a protocol violation for value-returning endpoints. The
/// payload itself is returned unchanged; its internal shape is the
/// caller's concern.
pub fn unwrap_envelope<T>(envelope: ApiEnvelope<T>) -> Result<T, ExchangeError> {
    if !envelope.is_success() {
        return Err(ExchangeError::ApiError {
            code: envelope.code,
            message: envelope.message,
        });
    }

    envelope
        .data
        .ok_or_else(|| ExchangeError::ProtocolError("no response data".to_string()))
}

/// Unwrap an action envelope, discarding the payload.
///
/// Cancel-style endpoints report success purely through `code == 0`; their
/// `data` is `null` and carries no information.
pub fn unwrap_action<T>(envelope: ApiEnvelope<T>) -> Result<(), ExchangeError> {
    if !envelope.is_success() {
        return Err(ExchangeError::ApiError {
            code: envelope.code,
            message: envelope.message,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_returns_data_unchanged() {
        let envelope: ApiEnvelope<Vec<String>> = serde_json::from_str(
            r#"{"code":0,"message":"","data":["BTCUSDT","ETHUSDT"]}"#,
        )
        .unwrap();
        let data = unwrap_envelope(envelope).unwrap();
        assert_eq!(data, vec!["BTCUSDT".to_string(), "ETHUSDT".to_string()]);
    }

    #[test]
    fn nonzero_code_becomes_api_error() {
        let envelope: ApiEnvelope<Vec<String>> =
            serde_json::from_str(r#"{"code":25,"message":"signature error","data":null}"#).unwrap();
        match unwrap_envelope(envelope) {
            Err(ExchangeError::ApiError { code, message }) => {
                assert_eq!(code, 25);
                assert_eq!(message, "signature error");
            }
            other => panic!("expected ApiError, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn missing_data_on_success_is_protocol_error() {
        let envelope: ApiEnvelope<Vec<String>> =
            serde_json::from_str(r#"{"code":0,"message":"","data":null}"#).unwrap();
        assert!(matches!(
            unwrap_envelope(envelope),
            Err(ExchangeError::ProtocolError(_))
        ));
    }

    #[test]
    fn action_unwrap_only_checks_code() {
        let ok: ApiEnvelope<serde_json::Value> =
            serde_json::from_str(r#"{"code":0,"message":"","data":null}"#).unwrap();
        assert!(unwrap_action(ok).is_ok());

        let err: ApiEnvelope<serde_json::Value> =
            serde_json::from_str(r#"{"code":107,"message":"insufficient balance","data":null}"#)
                .unwrap();
        assert!(matches!(
            unwrap_action(err),
            Err(ExchangeError::ApiError { code: 107, .. })
        ));
    }

    #[test]
    fn missing_message_field_defaults_to_empty() {
        let envelope: ApiEnvelope<i64> = serde_json::from_str(r#"{"code":0,"data":7}"#).unwrap();
        assert_eq!(unwrap_envelope(envelope).unwrap(), 7);
    }
}
