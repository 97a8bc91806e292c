use serde::Serialize;

/// Success envelope around a data payload.
///
/// Every successful endpoint wraps its payload so clients can branch on
/// `success` without inspecting status codes:
///
/// ```ignore
/// Ok(Json(DataResponse::new(cars)))
/// // => {"success": true, "data": [...]}
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Success envelope for endpoints that report an outcome with no payload.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
