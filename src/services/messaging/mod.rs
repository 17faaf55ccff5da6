pub mod twilio;

use async_trait::async_trait;

/// A single message ready to hand to the provider. Addresses already carry the channel marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub from: String,
    pub to: String,
    pub body: String,
}

#[derive(Debug, thiserror::Error)]
pub enum MessagingError {
    /// The provider rejected or could not complete the send; the text is shown to the caller.
    #[error("{0}")]
    Provider(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[async_trait]
pub trait MessagingProvider: Send + Sync {
    async fn send_message(&self, message: &OutboundMessage) -> Result<(), MessagingError>;
}
