use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{ClientError, ClientResult};

/// Value of `success` on a body the backend considers successful
pub const SUCCESS_MARKER: &str = "success";

/// Envelope every backend endpoint answers with.
///
/// Failure bodies carry `metadata` instead of `data`, so both are optional and
/// the envelope parses the same way on 2xx and non-2xx responses. Any JSON
/// object parses: a missing `success` reads as an empty marker (a failure) and
/// keys outside the envelope are kept in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub success: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ErrorMeta>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        self.success == SUCCESS_MARKER
    }

    /// Branch on the `success` marker instead of comparing strings at the call site.
    /// A successful body may still carry no payload (create/delete answer `data: null`).
    pub fn into_result(self) -> Result<Option<T>, ApiFailure> {
        if self.is_success() {
            Ok(self.data)
        } else {
            Err(ApiFailure::from_envelope(self.success, self.metadata, &self.extra))
        }
    }

    /// Like [`into_result`](Self::into_result) but requires a payload.
    pub fn into_data(self) -> ClientResult<T> {
        self.into_result()?
            .ok_or(ClientError::MissingData("response data"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaginationMeta {
    #[serde(default)]
    pub current_page: i64,
    #[serde(default)]
    pub total_pages: i64,
    #[serde(default)]
    pub total_items: i64,
}

/// Top-level pagination block; the list endpoints currently report through `meta` instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: i64,
    pub current_elements: i64,
    pub total_pages: i64,
    pub total_elements: i64,
    #[serde(default)]
    pub sort_by: String,
    pub cursor_start: Option<String>,
    pub cursor_end: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorMeta {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub code: String,
    #[serde(rename = "statusCode", default)]
    pub status_code: u16,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default)]
    pub timestamp: String,
}

/// Application-level failure reported inside a parsed body
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiFailure {
    pub success: String,
    pub message: String,
    pub code: Option<String>,
    pub status_code: Option<u16>,
}

impl ApiFailure {
    fn from_envelope(success: String, metadata: Option<ErrorMeta>, extra: &Map<String, Value>) -> Self {
        match metadata {
            Some(meta) => {
                let message = match meta.error {
                    Some(error) if !error.is_empty() => error,
                    _ if !meta.message.is_empty() => meta.message,
                    _ => format!("request failed with status marker '{}'", success),
                };
                Self {
                    success,
                    message,
                    code: Some(meta.code).filter(|c| !c.is_empty()),
                    status_code: Some(meta.status_code).filter(|s| *s != 0),
                }
            }
            // Bodies from proxies or rate limiters: {"error": "..."} and friends
            None => Self {
                message: ["error", "message"]
                    .iter()
                    .find_map(|key| extra.get(*key).and_then(Value::as_str).filter(|m| !m.is_empty()))
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("request failed with status marker '{}'", success)),
                success,
                code: None,
                status_code: None,
            },
        }
    }
}
