//! API result model
//!
//! Every call against the attendance server resolves to an [`ApiResult`],
//! mirroring the `{success, data?, error?}` envelope the server writes.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::utils::errors::Result;

/// Reported when a `success: false` envelope carries no message
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

/// Reported when the body parses but is not a `{success: bool}` envelope
pub const MISSING_SUCCESS_FLAG_MESSAGE: &str = "Response missing success flag";

/// Outcome of a single API call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum ApiResult {
    /// `{"success": true, "data": ...}`; `data` is absent for plain acks
    Success { data: Option<Value> },
    /// `{"success": false, "error": "..."}`
    Failure { error: String },
}

impl ApiResult {
    pub fn success(data: Option<Value>) -> Self {
        ApiResult::Success { data }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        ApiResult::Failure { error: error.into() }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ApiResult::Success { .. })
    }

    /// Payload of a successful call
    pub fn data(&self) -> Option<&Value> {
        match self {
            ApiResult::Success { data } => data.as_ref(),
            ApiResult::Failure { .. } => None,
        }
    }

    /// Error message of a failed call
    pub fn error(&self) -> Option<&str> {
        match self {
            ApiResult::Success { .. } => None,
            ApiResult::Failure { error } => Some(error),
        }
    }

    pub fn into_data(self) -> Option<Value> {
        match self {
            ApiResult::Success { data } => data,
            ApiResult::Failure { .. } => None,
        }
    }

    /// Decode the payload into a typed view
    ///
    /// Returns `Ok(None)` for failures and for successes without data.
    pub fn data_as<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        match self.data() {
            Some(data) => Ok(Some(T::deserialize(data)?)),
            None => Ok(None),
        }
    }

    /// The envelope as the server would have written it
    pub fn to_json(&self) -> Value {
        Value::from(self.clone())
    }
}

impl From<Value> for ApiResult {
    fn from(value: Value) -> Self {
        let mut envelope = match value {
            Value::Object(map) => map,
            _ => return ApiResult::failure(MISSING_SUCCESS_FLAG_MESSAGE),
        };

        match envelope.get("success").and_then(Value::as_bool) {
            Some(true) => ApiResult::Success {
                data: envelope.remove("data"),
            },
            Some(false) => {
                let error = envelope
                    .remove("error")
                    .and_then(|error| match error {
                        Value::String(message) => Some(message),
                        Value::Null => None,
                        other => Some(other.to_string()),
                    })
                    .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string());
                ApiResult::Failure { error }
            }
            None => ApiResult::failure(MISSING_SUCCESS_FLAG_MESSAGE),
        }
    }
}

impl From<ApiResult> for Value {
    fn from(result: ApiResult) -> Self {
        let mut envelope = Map::new();
        match result {
            ApiResult::Success { data } => {
                envelope.insert("success".to_string(), Value::Bool(true));
                if let Some(data) = data {
                    envelope.insert("data".to_string(), data);
                }
            }
            ApiResult::Failure { error } => {
                envelope.insert("success".to_string(), Value::Bool(false));
                envelope.insert("error".to_string(), Value::String(error));
            }
        }
        Value::Object(envelope)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::models::AttendancePercentage;

    #[test]
    fn test_success_envelope_is_kept_verbatim() {
        let body = json!({"success": true, "data": {"id": 7, "name": "Alice"}});
        let result = ApiResult::from(body.clone());
        assert_eq!(result.data(), Some(&json!({"id": 7, "name": "Alice"})));
        assert_eq!(result.to_json(), body);
    }

    #[test]
    fn test_ack_without_data() {
        let result: ApiResult = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert_eq!(result, ApiResult::success(None));
        assert_eq!(serde_json::to_string(&result).unwrap(), r#"{"success":true}"#);
    }

    #[test]
    fn test_failure_envelope() {
        let result = ApiResult::from(json!({"success": false, "error": "Invalid credentials"}));
        assert!(!result.is_success());
        assert_eq!(result.error(), Some("Invalid credentials"));
        assert_eq!(result.data(), None);
    }

    #[test]
    fn test_failure_without_message() {
        let result = ApiResult::from(json!({"success": false}));
        assert_eq!(result.error(), Some(UNKNOWN_ERROR_MESSAGE));
    }

    #[test]
    fn test_body_without_success_flag() {
        assert_eq!(
            ApiResult::from(json!([1, 2, 3])).error(),
            Some(MISSING_SUCCESS_FLAG_MESSAGE)
        );
        assert_eq!(
            ApiResult::from(json!({"data": []})).error(),
            Some(MISSING_SUCCESS_FLAG_MESSAGE)
        );
    }

    #[test]
    fn test_typed_payload() {
        let result = ApiResult::from(json!({"success": true, "data": {"percentage": 87.5}}));
        let percentage: AttendancePercentage = result.data_as().unwrap().unwrap();
        assert_eq!(percentage.percentage, 87.5);

        let failed = ApiResult::failure("boom");
        assert!(failed.data_as::<AttendancePercentage>().unwrap().is_none());
    }

    #[test]
    fn test_typed_payload_shape_mismatch() {
        let result = ApiResult::from(json!({"success": true, "data": ["not", "a", "percentage"]}));
        assert!(result.data_as::<AttendancePercentage>().is_err());
    }
}
