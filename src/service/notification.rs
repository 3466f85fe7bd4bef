use crate::repository::settings_repo::SettingsRepository;
use crate::util::email::{EmailMessage, Mailer, NotificationBody};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Back-office notifications for new leads and bookings.
///
/// Delivery is best effort: nothing here returns an error to the caller.
pub struct Notifier {
    mailer: Option<Arc<dyn Mailer>>,
    settings_repo: Arc<dyn SettingsRepository>,
}

impl Notifier {
    pub fn new(mailer: Option<Arc<dyn Mailer>>, settings_repo: Arc<dyn SettingsRepository>) -> Self {
        Notifier { mailer, settings_repo }
    }

    async fn recipient(&self, mailer: &dyn Mailer) -> Option<String> {
        if let Some(address) = mailer.notify_address() {
            return Some(address);
        }
        match self.settings_repo.get().await {
            Ok(settings) => settings.and_then(|s| s.email).filter(|e| !e.trim().is_empty()),
            Err(e) => {
                warn!("Could not read settings for notification address: {}", e);
                None
            }
        }
    }

    pub async fn notify(&self, subject: &str, body: NotificationBody<'_>, reply_to: Option<&str>) {
        let Some(mailer) = self.mailer.as_deref() else {
            debug!("Email notifications disabled, skipping '{}'", subject);
            return;
        };
        let Some(to) = self.recipient(mailer).await else {
            warn!("No notification address configured, skipping '{}'", subject);
            return;
        };

        let mut message = EmailMessage::new(to, subject.to_string())
            .with_text_body(body.to_text())
            .with_html_body(body.to_html());
        if let Some(reply_to) = reply_to {
            message = message.with_reply_to(reply_to.to_string());
        }

        match mailer.send_email(message).await {
            Ok(()) => info!("Notification sent: {}", subject),
            Err(e) => warn!("Notification '{}' could not be sent: {}", subject, e),
        }
    }
}
