//! HTTP API Client
//!
//! Functions for communicating with the Bittree backend API.
//!
//! Every route is a path relative to the hosting page's own origin, so the
//! same build works unchanged under any deployment host.

use gloo_net::http::Request;
use tracing::debug;

use crate::state::form::LinkForm;

/// Base path of the backend API, resolved against the page's origin
pub const API_BASE: &str = "/api";

/// Shown when the server confirms creation without a message of its own
pub const DEFAULT_SUCCESS_MSG: &str = "Created successfully";

/// Shown when the server rejects the draft without a message of its own
pub const DEFAULT_FAILURE_MSG: &str = "Something went wrong";

/// Shown when the call itself fails (unreachable server, undecodable body)
pub const NETWORK_ERROR_MSG: &str = "Network or server error";

/// Response body of `POST /api/add`
#[derive(Debug, Clone, serde::Deserialize)]
pub struct AddResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl AddResponse {
    /// The server-provided message, or the stock text for this outcome
    pub fn notice(&self) -> &str {
        self.message.as_deref().unwrap_or(if self.success {
            DEFAULT_SUCCESS_MSG
        } else {
            DEFAULT_FAILURE_MSG
        })
    }
}

/// Submit a drafted profile for creation.
///
/// Performs exactly one POST with the JSON-encoded draft as the body. The
/// response body is decoded whatever the HTTP status; `Err` means the call
/// itself failed or the body wasn't the expected JSON, and the caller shows
/// a generic notification for it. A rejected draft (`success: false`) is a
/// normal `Ok` outcome carrying the server's reason.
pub async fn create_bittree(form: &LinkForm) -> Result<AddResponse, String> {
    debug!("POST {}/add for handle {:?}", API_BASE, form.handle);

    let response = Request::post(&format!("{}/add", API_BASE))
        .json(form)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_with_message_uses_it_verbatim() {
        let rsp: AddResponse =
            serde_json::from_str(r#"{"success":true,"message":"Created"}"#).unwrap();
        assert!(rsp.success);
        assert_eq!(rsp.notice(), "Created");
    }

    #[test]
    fn successful_response_without_message_uses_the_default() {
        let rsp: AddResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(rsp.success);
        assert_eq!(rsp.notice(), DEFAULT_SUCCESS_MSG);
    }

    #[test]
    fn rejection_carries_the_server_reason() {
        let rsp: AddResponse =
            serde_json::from_str(r#"{"success":false,"message":"Handle taken"}"#).unwrap();
        assert!(!rsp.success);
        assert_eq!(rsp.notice(), "Handle taken");
    }

    #[test]
    fn rejection_without_message_uses_the_default() {
        let rsp: AddResponse = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert_eq!(rsp.notice(), DEFAULT_FAILURE_MSG);
    }

    #[test]
    fn body_without_the_expected_shape_is_a_decode_error() {
        assert!(serde_json::from_str::<AddResponse>(r#"{"message":"hi"}"#).is_err());
        assert!(serde_json::from_str::<AddResponse>("<html>").is_err());
    }
}
