use serde::Deserialize;

// Error body returned by the REST table API on non-2xx responses
#[derive(Debug, Deserialize)]
pub struct StoreErrorResponse {
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}

impl StoreErrorResponse {
    /// Extracts a readable message from a raw error body, falling back to
    /// the body itself when it is not the store's JSON error shape.
    pub fn message_from_body(body: &str) -> String {
        match serde_json::from_str::<StoreErrorResponse>(body) {
            Ok(err) => match (err.code, err.details) {
                (Some(code), Some(details)) => format!("{} ({}): {}", err.message, code, details),
                (Some(code), None) => format!("{} ({})", err.message, code),
                _ => err.message,
            },
            Err(_) if body.trim().is_empty() => "Unknown error".to_string(),
            Err(_) => body.trim().to_string(),
        }
    }
}
