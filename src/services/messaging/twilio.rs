use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

use super::{MessagingError, MessagingProvider, OutboundMessage};

pub struct TwilioWhatsAppProvider {
    account_sid: String,
    auth_token: String,
    api_base: String,
    client: reqwest::Client,
}

/// Error document Twilio returns with non-2xx responses.
#[derive(Debug, Deserialize)]
struct TwilioErrorBody {
    code: Option<i64>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TwilioMessageResource {
    sid: Option<String>,
}

impl TwilioWhatsAppProvider {
    pub fn new(account_sid: String, auth_token: String, api_base: String) -> Self {
        Self {
            account_sid,
            auth_token,
            api_base: api_base.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.api_base, self.account_sid
        )
    }
}

fn provider_error_message(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<TwilioErrorBody>(body) {
        Ok(TwilioErrorBody {
            message: Some(message),
            code,
        }) if !message.trim().is_empty() => {
            tracing::debug!(?code, %status, "twilio rejected message");
            message
        }
        _ => format!("messaging provider returned HTTP {}", status.as_u16()),
    }
}

#[async_trait]
impl MessagingProvider for TwilioWhatsAppProvider {
    async fn send_message(&self, message: &OutboundMessage) -> Result<(), MessagingError> {
        let resp = self
            .client
            .post(self.messages_url())
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&[
                ("To", message.to.as_str()),
                ("From", message.from.as_str()),
                ("Body", message.body.as_str()),
            ])
            .send()
            .await
            .map_err(|e| MessagingError::Provider(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| MessagingError::Provider(e.to_string()))?;

        if !status.is_success() {
            return Err(MessagingError::Provider(provider_error_message(status, &text)));
        }

        let sid = serde_json::from_str::<TwilioMessageResource>(&text)
            .ok()
            .and_then(|r| r.sid);
        tracing::debug!(sid = sid.as_deref().unwrap_or("unknown"), "twilio accepted message");

        Ok(())
    }
}
