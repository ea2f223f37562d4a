use serde::Serialize;

/// Standard API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_omits_message() {
        let body = serde_json::to_value(ApiResponse::success(7)).unwrap();
        assert_eq!(body, json!({ "success": true, "data": 7 }));
    }

    #[test]
    fn message_omits_data() {
        let body = serde_json::to_value(ApiResponse::message("done")).unwrap();
        assert_eq!(body, json!({ "success": true, "message": "done" }));
    }
}
