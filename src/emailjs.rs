use std::sync::OnceLock;

use async_trait::async_trait;
use serde::Serialize;

use crate::{
    config::EmailJsConfig,
    contact::{DispatchError, DispatchResponse, EmailDispatcher, FormFields},
};

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    // EmailJS still calls the public key `user_id`
    user_id: &'a str,
    template_params: &'a FormFields,
}

/// Sends the contact form through the EmailJS REST API.
///
/// The HTTP client is built on the first send, so server renders never create one.
pub struct EmailJsClient {
    config: EmailJsConfig,
    http: OnceLock<reqwest::Client>,
    endpoint: String,
}

impl EmailJsClient {
    pub fn new(config: EmailJsConfig) -> Self {
        Self {
            config,
            http: OnceLock::new(),
            endpoint: EMAILJS_SEND_URL.to_string(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn http(&self) -> &reqwest::Client {
        self.http.get_or_init(reqwest::Client::new)
    }

    fn request<'a>(&'a self, fields: &'a FormFields) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: fields,
        }
    }
}

#[async_trait(?Send)]
impl EmailDispatcher for EmailJsClient {
    async fn send(&self, fields: &FormFields) -> Result<DispatchResponse, DispatchError> {
        if !self.config.is_complete() {
            return Err(DispatchError::NotConfigured);
        }

        let res = self
            .http()
            .post(&self.endpoint)
            .json(&self.request(fields))
            .send()
            .await
            .map_err(|e| DispatchError::Request(e.to_string()))?;

        let status = res.status();
        // the body is plain text ("OK" or a reason), not JSON
        let text = res
            .text()
            .await
            .map_err(|e| DispatchError::Request(e.to_string()))?;

        if status.is_success() {
            Ok(DispatchResponse { status, text })
        } else {
            Err(DispatchError::Rejected { status, body: text })
        }
    }
}
