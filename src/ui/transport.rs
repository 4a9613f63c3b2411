//! Browser transport for the webinar form

use gloo_net::http::Request;

use crate::core::form::endpoint_errors;
use crate::core::{FormError, FormTransport, TransportResponse};

/// Posts the field set as `FormData` through `fetch`
pub struct FetchTransport;

impl FormTransport for FetchTransport {
    async fn post(
        &self,
        endpoint: &str,
        fields: &[(&'static str, String)],
    ) -> Result<TransportResponse, FormError> {
        let form_data = web_sys::FormData::new()
            .map_err(|e| FormError::Transport(format!("{:?}", e)))?;
        for (name, value) in fields {
            let _ = form_data.append_with_str(name, value);
        }

        let response = Request::post(endpoint)
            .header("Accept", "application/json")
            .body(form_data)
            .map_err(|e| FormError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| FormError::Transport(e.to_string()))?;

        let mut reply = TransportResponse::new(response.status());
        if !response.ok() {
            if let Ok(body) = response.text().await {
                let errors = endpoint_errors(&body);
                if !errors.is_empty() {
                    leptos::logging::warn!("Form endpoint rejected registration: {}", errors.join("; "));
                }
                reply = reply.with_body(body);
            }
        }
        Ok(reply)
    }
}
