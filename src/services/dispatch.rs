use crate::config::ProviderConfig;
use crate::errors::DispatchError;
use crate::models::DispatchRequest;
use crate::services::messaging::{MessagingProvider, OutboundMessage};
use crate::services::template::render_message;
use crate::services::validation::{normalize_phone, validate_presence, NormalizedPhone};

pub const WHATSAPP_CHANNEL: &str = "whatsapp:";

/// Runs one lead through config check, validation, rendering and a single provider send.
pub struct Dispatcher {
    config: ProviderConfig,
    messaging: Box<dyn MessagingProvider>,
}

impl Dispatcher {
    pub fn new(config: ProviderConfig, messaging: Box<dyn MessagingProvider>) -> Self {
        Self { config, messaging }
    }

    pub fn check_config(&self) -> Result<(), DispatchError> {
        let missing = self.config.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(DispatchError::MissingConfig(missing))
        }
    }

    pub async fn dispatch(&self, request: DispatchRequest) -> Result<(), DispatchError> {
        let result = self.run(request).await;
        if let Err(e) = &result {
            log_failure(e);
        }
        result
    }

    /// Outcome for a body that could not be parsed. Configuration problems still take precedence.
    pub fn reject_unreadable(&self, error: &serde_json::Error) -> DispatchError {
        let err = match self.check_config() {
            Err(config_err) => config_err,
            Ok(()) => {
                tracing::warn!(error = %error, "unreadable send-message body");
                DispatchError::Unknown
            }
        };
        log_failure(&err);
        err
    }

    async fn run(&self, request: DispatchRequest) -> Result<(), DispatchError> {
        self.check_config()?;

        let lead = validate_presence(&request)?;
        let phone = normalize_phone(&lead.phone_number)?;
        let body = render_message(&lead.message_template, &lead.full_name);

        let message = OutboundMessage {
            from: with_channel(self.config.whatsapp_from.trim()),
            to: channel_address(&phone),
            body,
        };

        self.messaging.send_message(&message).await?;

        tracing::info!(to = %message.to, "message dispatched");
        Ok(())
    }
}

fn log_failure(err: &DispatchError) {
    match err {
        DispatchError::Provider(_) | DispatchError::Unknown => {
            tracing::error!(error = %err, category = ?err.category(), "dispatch failed")
        }
        _ => tracing::warn!(error = %err, category = ?err.category(), "dispatch rejected"),
    }
}

fn channel_address(phone: &NormalizedPhone) -> String {
    format!("{WHATSAPP_CHANNEL}{}", phone.as_str())
}

fn with_channel(address: &str) -> String {
    if address.starts_with(WHATSAPP_CHANNEL) {
        address.to_string()
    } else {
        format!("{WHATSAPP_CHANNEL}{address}")
    }
}
