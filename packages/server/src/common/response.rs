//! Uniform response envelopes
//!
//! Every service response is wrapped so clients can branch on `success`
//! without inspecting the status code.

use serde::{Deserialize, Serialize};

/// Success envelope: `{ success: true, data, message }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSuccess<T> {
    pub success: bool,
    pub data: T,
    pub message: String,
}

impl<T> ApiSuccess<T> {
    pub fn new(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
        }
    }
}

/// Error envelope: `{ success: false, data, statusCode, message }`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    pub success: bool,
    pub data: serde_json::Value,
    pub status_code: u16,
    pub message: String,
}

impl ErrorEnvelope {
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: serde_json::json!({}),
            status_code,
            message: message.into(),
        }
    }
}

/// Bare error body used by the authentication layer: `{ error }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_envelope_uses_camel_case() {
        let value = serde_json::to_value(ErrorEnvelope::new(404, "gone")).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "success": false,
                "data": {},
                "statusCode": 404,
                "message": "gone"
            })
        );
    }

    #[test]
    fn test_success_envelope() {
        let value = serde_json::to_value(ApiSuccess::new(3usize, "ok")).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["data"], 3);
        assert_eq!(value["message"], "ok");
    }
}
