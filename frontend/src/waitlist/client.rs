use gloo_net::http::Request;
use serde::Deserialize;
use web_sys::FormData;

use super::state::{Signup, WaitlistError};
use crate::config;

/// Body Web3Forms sends back for every submission.
#[derive(Debug, Deserialize)]
pub struct SubmitResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl SubmitResponse {
    pub fn into_result(self) -> Result<(), WaitlistError> {
        if self.success {
            Ok(())
        } else {
            Err(WaitlistError::Rejected(
                self.message
                    .unwrap_or_else(|| "the signup service declined the request".to_string()),
            ))
        }
    }
}

/// Interprets a raw response body. Only an explicit `"success": true` counts.
pub fn parse_response(body: &str) -> Result<(), WaitlistError> {
    serde_json::from_str::<SubmitResponse>(body)
        .map_err(|e| WaitlistError::Decode(e.to_string()))?
        .into_result()
}

fn form_data(signup: &Signup) -> Result<FormData, WaitlistError> {
    let js_err = |e: wasm_bindgen::JsValue| WaitlistError::Network(format!("{:?}", e));
    let form = FormData::new().map_err(js_err)?;
    for (name, value) in signup.form_fields(config::get_web3forms_key()) {
        form.append_with_str(name, &value).map_err(js_err)?;
    }
    Ok(form)
}

/// Sends one waitlist registration. There is no retry; the caller decides
/// whether to try again.
pub async fn submit(signup: &Signup) -> Result<(), WaitlistError> {
    if config::get_web3forms_key().is_empty() {
        log::warn!("WEB3FORMS_KEY was not set at build time; the submission will be rejected");
    }
    let response = Request::post(config::WEB3FORMS_URL)
        .body(form_data(signup)?)
        .send()
        .await?;
    let status = response.status();
    let body = response.text().await?;
    log::info!("waitlist submission answered with status {}", status);
    parse_response(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_flag_is_required() {
        assert_eq!(parse_response(r#"{"success": true, "message": "ok"}"#), Ok(()));
        assert_eq!(
            parse_response(r#"{"success": false, "message": "Invalid access key"}"#),
            Err(WaitlistError::Rejected("Invalid access key".to_string()))
        );
    }

    #[test]
    fn rejection_without_message_still_fails() {
        assert!(matches!(
            parse_response(r#"{"success": false}"#),
            Err(WaitlistError::Rejected(_))
        ));
    }

    #[test]
    fn unreadable_body_is_a_decode_error() {
        assert!(matches!(
            parse_response("<html>502 Bad Gateway</html>"),
            Err(WaitlistError::Decode(_))
        ));
        assert!(matches!(parse_response("{}"), Err(WaitlistError::Decode(_))));
    }
}
