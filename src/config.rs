use std::env;

pub const DEFAULT_TWILIO_API_BASE: &str = "https://api.twilio.com";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub provider: ProviderConfig,
}

/// Credentials for the messaging provider. Empty values mean the variable was not set.
#[derive(Clone, Debug, Default)]
pub struct ProviderConfig {
    pub account_sid: String,
    pub auth_token: String,
    pub whatsapp_from: String,
    pub api_base: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            provider: ProviderConfig {
                account_sid: env::var("TWILIO_ACCOUNT_SID").unwrap_or_default(),
                auth_token: env::var("TWILIO_AUTH_TOKEN").unwrap_or_default(),
                whatsapp_from: env::var("TWILIO_WHATSAPP_FROM").unwrap_or_default(),
                api_base: env::var("TWILIO_API_BASE")
                    .unwrap_or_else(|_| DEFAULT_TWILIO_API_BASE.to_string()),
            },
        }
    }
}

impl ProviderConfig {
    /// Names of every required variable that is unset or blank, in declaration order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("TWILIO_ACCOUNT_SID", &self.account_sid),
            ("TWILIO_AUTH_TOKEN", &self.auth_token),
            ("TWILIO_WHATSAPP_FROM", &self.whatsapp_from),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}
