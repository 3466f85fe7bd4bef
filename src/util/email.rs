use crate::config::email_conf::SmtpSecurity;
use crate::config::{EmailConfig, ConfigError};
use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{header::ContentType, Mailbox, MultiPart, SinglePart},
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
};
use tracing::{error, info, instrument};

/// Email service errors
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("SMTP error: {0}")]
    SmtpError(String),

    #[error("Message building error: {0}")]
    MessageError(String),

    #[error("Address error: {0}")]
    AddressError(String),
}

impl From<ConfigError> for EmailError {
    fn from(err: ConfigError) -> Self {
        EmailError::ConfigError(err.to_string())
    }
}

/// Email message builder
#[derive(Debug, Clone)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub reply_to: Option<String>,
    pub text_body: Option<String>,
    pub html_body: Option<String>,
}

impl EmailMessage {
    pub fn new(to: String, subject: String) -> Self {
        Self {
            to,
            subject,
            reply_to: None,
            text_body: None,
            html_body: None,
        }
    }

    pub fn with_reply_to(mut self, reply_to: String) -> Self {
        self.reply_to = Some(reply_to);
        self
    }

    pub fn with_text_body(mut self, body: String) -> Self {
        self.text_body = Some(body);
        self
    }

    pub fn with_html_body(mut self, body: String) -> Self {
        self.html_body = Some(body);
        self
    }
}

/// Outbound mail seam; lead and booking notifications go through it.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_email(&self, message: EmailMessage) -> Result<(), EmailError>;

    /// Recipient configured for back-office notifications, if any
    fn notify_address(&self) -> Option<String> {
        None
    }
}

/// Plain key/value rows rendered into a notification email
pub struct NotificationBody<'a> {
    pub heading: &'a str,
    pub rows: Vec<(&'a str, String)>,
}

impl NotificationBody<'_> {
    pub fn to_text(&self) -> String {
        let mut out = format!("{}\n\n", self.heading);
        for (label, value) in &self.rows {
            out.push_str(&format!("{}: {}\n", label, value));
        }
        out
    }

    pub fn to_html(&self) -> String {
        let rows: String = self
            .rows
            .iter()
            .map(|(label, value)| {
                format!(
                    "<tr><th align=\"left\" style=\"padding:4px 12px 4px 0\">{}</th><td>{}</td></tr>",
                    html_escape::encode_text(label),
                    html_escape::encode_text(value).replace('\n', "<br>")
                )
            })
            .collect();
        format!(
            "<!DOCTYPE html><html><body style=\"font-family:Arial,sans-serif\"><h2>{}</h2><table>{}</table></body></html>",
            html_escape::encode_text(self.heading),
            rows
        )
    }
}

/// SMTP email service implementation
pub struct SmtpEmailService {
    pub config: EmailConfig,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpEmailService {
    /// Create a new SMTP email service
    #[instrument(skip(config), fields(host = %config.smtp_host, port = config.smtp_port))]
    pub fn new(config: EmailConfig) -> Result<Self, EmailError> {
        info!("Initializing SMTP email service");

        config.validate().map_err(EmailError::from)?;

        let mut transport_builder = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.smtp_host)
            .port(config.smtp_port)
            .timeout(Some(std::time::Duration::from_secs(config.timeout_secs)));

        transport_builder = match config.security {
            SmtpSecurity::None => transport_builder.tls(Tls::None),
            SmtpSecurity::StartTls | SmtpSecurity::Tls => {
                let tls_parameters = TlsParameters::new(config.smtp_host.clone())
                    .map_err(|e| EmailError::ConfigError(format!("TLS configuration error: {}", e)))?;
                if config.security == SmtpSecurity::Tls {
                    transport_builder.tls(Tls::Wrapper(tls_parameters))
                } else {
                    transport_builder.tls(Tls::Required(tls_parameters))
                }
            }
        };

        if let Some((username, password)) = config.credentials() {
            transport_builder =
                transport_builder.credentials(Credentials::new(username.to_string(), password.to_string()));
        }

        let transport = transport_builder.build();

        info!("SMTP email service initialized successfully");
        Ok(Self { config, transport })
    }

    /// Build a lettre Message from EmailMessage
    pub fn build_message(&self, email_message: EmailMessage) -> Result<Message, EmailError> {
        validate_email_address(&email_message.to)?;

        let from_mailbox: Mailbox = format!("{} <{}>", self.config.from_name, self.config.from_email)
            .parse()
            .map_err(|e| EmailError::AddressError(format!("Invalid from address: {}", e)))?;

        let to_mailbox: Mailbox = email_message.to
            .parse()
            .map_err(|e| EmailError::AddressError(format!("Invalid to address: {}", e)))?;

        let mut message_builder = Message::builder()
            .from(from_mailbox)
            .to(to_mailbox)
            .subject(&email_message.subject);

        if let Some(reply_to) = email_message.reply_to {
            let reply_mailbox: Mailbox = reply_to
                .parse()
                .map_err(|e| EmailError::AddressError(format!("Invalid reply-to address: {}", e)))?;
            message_builder = message_builder.reply_to(reply_mailbox);
        }

        match (email_message.text_body, email_message.html_body) {
            (Some(text), Some(html)) => message_builder
                .multipart(
                    MultiPart::alternative()
                        .singlepart(SinglePart::builder().header(ContentType::TEXT_PLAIN).body(text))
                        .singlepart(SinglePart::builder().header(ContentType::TEXT_HTML).body(html)),
                )
                .map_err(|e| EmailError::MessageError(format!("Failed to build multipart message: {}", e))),
            (Some(text), None) => message_builder
                .body(text)
                .map_err(|e| EmailError::MessageError(format!("Failed to build text message: {}", e))),
            (None, Some(html)) => message_builder
                .singlepart(SinglePart::builder().header(ContentType::TEXT_HTML).body(html))
                .map_err(|e| EmailError::MessageError(format!("Failed to build HTML message: {}", e))),
            (None, None) => Err(EmailError::MessageError("No message body provided".to_string())),
        }
    }
}

#[async_trait]
impl Mailer for SmtpEmailService {
    #[instrument(skip(self, message), fields(to = %message.to, subject = %message.subject))]
    async fn send_email(&self, message: EmailMessage) -> Result<(), EmailError> {
        info!("Sending email to: {}", message.to);

        let email_message = self.build_message(message)?;

        self.transport
            .send(email_message)
            .await
            .map_err(|e| {
                error!("Failed to send email: {}", e);
                EmailError::SmtpError(format!("Failed to send email: {}", e))
            })?;

        info!("Email sent successfully");
        Ok(())
    }

    fn notify_address(&self) -> Option<String> {
        self.config.notify_email.clone()
    }
}

/// Basic shape check before handing an address to lettre
pub fn validate_email_address(email: &str) -> Result<(), EmailError> {
    if email.is_empty() {
        return Err(EmailError::AddressError("Email address cannot be empty".to_string()));
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return Err(EmailError::AddressError("Invalid email format".to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_body_escapes_html() {
        let body = NotificationBody {
            heading: "New lead",
            rows: vec![("Name", "<script>alert(1)</script>".to_string())],
        };
        let html = body.to_html();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(body.to_text().contains("Name: <script>"));
    }

    #[test]
    fn test_validate_email_address() {
        assert!(validate_email_address("a@b.com").is_ok());
        assert!(validate_email_address("").is_err());
        assert!(validate_email_address("no-at-sign").is_err());
        assert!(validate_email_address("@b.com").is_err());
    }
}
