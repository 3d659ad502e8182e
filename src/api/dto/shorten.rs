//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a long URL.
///
/// Field names are snake_case; the camelCase spellings are accepted too.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The URL to shorten. A missing field is treated as empty and rejected.
    #[serde(default, alias = "longUrl")]
    #[validate(length(min = 1, message = "long_url is required"))]
    pub long_url: String,

    /// Optional secondary token to attach to the canonical URL.
    #[serde(default, alias = "customAlias")]
    pub custom_alias: Option<String>,
}

/// Response carrying the canonical short code, and the stored alias if one
/// was requested.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ShortenResponse {
    pub short_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_alias: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_accepts_camel_case() {
        let req: ShortenRequest = serde_json::from_value(json!({
            "longUrl": "https://example.com",
            "customAlias": "ex"
        }))
        .unwrap();

        assert_eq!(req.long_url, "https://example.com");
        assert_eq!(req.custom_alias.as_deref(), Some("ex"));
    }

    #[test]
    fn test_missing_long_url_fails_validation() {
        let req: ShortenRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_response_omits_absent_alias() {
        let body = serde_json::to_value(ShortenResponse {
            short_id: "1".to_string(),
            custom_alias: None,
        })
        .unwrap();

        assert_eq!(body, json!({ "short_id": "1" }));
    }

    #[test]
    fn test_response_includes_alias() {
        let body = serde_json::to_value(ShortenResponse {
            short_id: "1".to_string(),
            custom_alias: Some("fastapisite".to_string()),
        })
        .unwrap();

        assert_eq!(body, json!({ "short_id": "1", "custom_alias": "fastapisite" }));
    }
}
