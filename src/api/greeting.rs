// frontend_greeting/src/api/greeting.rs
use gloo::console::error;
use gloo::net::http::Request;
use serde::Deserialize;

/// Fixed origin of the local backend. Intentionally not configurable.
pub const BACKEND_URL: &str = "http://localhost:8000";

/// Text shown before the fetch has completed.
pub const LOADING_TEXT: &str = "Loading...";

/// Fallback shown when the request fails or the body is not valid JSON.
pub const ERROR_TEXT: &str = "Error fetching from backend";

/// Body returned by the backend root endpoint.
///
/// `message` is optional: a response without the field still decodes and
/// renders as an empty string instead of taking the error path.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct GreetingResponse {
    pub message: Option<String>,
}

/// Fetch the greeting from the fixed backend origin.
pub async fn fetch_greeting() -> Result<GreetingResponse, String> {
    fetch_greeting_from(BACKEND_URL).await
}

/// Fetch a greeting from an explicit origin. Network errors and JSON decode
/// errors both collapse into an `Err`; the causes are logged separately.
pub async fn fetch_greeting_from(url: &str) -> Result<GreetingResponse, String> {
    match Request::get(url).send().await {
        Ok(response) => match response.json::<GreetingResponse>().await {
            Ok(greeting) => Ok(greeting),
            Err(e) => {
                let error_msg = format!("Failed to parse greeting response: {:?}", e);
                error!(&error_msg);
                Err("Failed to parse response".to_string())
            }
        },
        Err(e) => {
            let error_msg = format!("Greeting request failed: {:?}", e);
            error!(&error_msg);
            Err("Request failed".to_string())
        }
    }
}

/// Map the outcome of the one fetch to the text the component displays.
/// A missing `message` field renders as the empty string.
pub fn display_text(outcome: Result<GreetingResponse, String>) -> String {
    match outcome {
        Ok(greeting) => greeting.message.unwrap_or_default(),
        Err(_) => ERROR_TEXT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn decodes_message_field() {
        let greeting: GreetingResponse = serde_json::from_str(r#"{"message": "Hello"}"#).unwrap();
        assert_eq!(greeting.message.as_deref(), Some("Hello"));
        assert_eq!(display_text(Ok(greeting)), "Hello");
    }

    #[wasm_bindgen_test]
    fn missing_message_renders_empty() {
        let greeting: GreetingResponse = serde_json::from_str(r#"{"other": "x"}"#).unwrap();
        assert_eq!(greeting.message, None);
        assert_eq!(display_text(Ok(greeting)), "");
    }

    #[wasm_bindgen_test]
    fn non_json_body_fails_to_decode() {
        assert!(serde_json::from_str::<GreetingResponse>("not json").is_err());
    }

    #[wasm_bindgen_test]
    fn failure_maps_to_fixed_fallback() {
        assert_eq!(
            display_text(Err("Request failed".to_string())),
            ERROR_TEXT
        );
    }
}
