use serde::{Deserialize, Serialize};

/// Error body returned by every endpoint
///
/// ```json
/// {"status":404,"error":"NOT_FOUND","message":"quote for symbol not available","path":"/quote/XYZ"}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub error: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}
