//! Out-of-band delivery of reset tokens.
//!
//! Mail transport is an external collaborator: the reset token stays valid
//! whether or not the message arrives, so delivery failures are logged and
//! swallowed by the caller.
use lettre::AsyncSmtpTransport;
use lettre::AsyncTransport;
use lettre::Message;
use lettre::Tokio1Executor;
use lettre::message::Mailbox;

/// Delivery seam for recovery links.
#[async_trait::async_trait]
pub trait Mailer: Send + Sync {
    async fn reset(&self, to: &str, token: &str) -> anyhow::Result<()>;
}

/// SMTP delivery via lettre.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    reset_url: String,
}

impl SmtpMailer {
    /// Build from `SMTP_URL`, `MAIL_FROM`, and `RESET_URL`.
    pub fn from_env() -> anyhow::Result<Self> {
        let url = std::env::var("SMTP_URL")?;
        let transport = AsyncSmtpTransport::<Tokio1Executor>::from_url(&url)?.build();
        let from = std::env::var("MAIL_FROM")?.parse::<Mailbox>()?;
        let reset_url = std::env::var("RESET_URL")?;
        Ok(Self {
            transport,
            from,
            reset_url,
        })
    }
}

#[async_trait::async_trait]
impl Mailer for SmtpMailer {
    async fn reset(&self, to: &str, token: &str) -> anyhow::Result<()> {
        let link = format!("{}?token={}", self.reset_url, token);
        let message = Message::builder()
            .from(self.from.clone())
            .to(to.parse::<Mailbox>()?)
            .subject("Password reset")
            .body(format!(
                "A password reset was requested for this address.\n\n{}\n\nThe link expires in one hour.",
                link
            ))?;
        self.transport.send(message).await?;
        Ok(())
    }
}

/// Logs the recovery link instead of sending it.
/// Used when no SMTP transport is configured, and in tests.
pub struct NullMailer;

#[async_trait::async_trait]
impl Mailer for NullMailer {
    async fn reset(&self, to: &str, token: &str) -> anyhow::Result<()> {
        log::info!("reset token for {}: {}", to, token);
        Ok(())
    }
}
