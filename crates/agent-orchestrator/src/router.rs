use std::sync::Arc;

use notification_service::{Alert, AlertPriority, NotificationTransport};

use crate::settings::AgentSettings;

/// Which channels fire for a given alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDecision {
    pub push: bool,
    pub email: bool,
    pub sms: bool,
}

/// Decide channels from priority and preferences. Push and email follow
/// their flags unconditionally; SMS additionally requires High or Critical
/// priority and a destination number.
pub fn routes(priority: AlertPriority, settings: &AgentSettings) -> RouteDecision {
    RouteDecision {
        push: settings.push_enabled,
        email: settings.email_enabled,
        sms: settings.sms_enabled
            && priority >= AlertPriority::High
            && !settings.phone_number.is_empty(),
    }
}

/// Routes alerts to notification channels through a transport.
///
/// Dispatch is fire-and-forget: a failing transport is logged and never
/// surfaces to the monitor that raised the alert.
pub struct NotificationRouter {
    transport: Arc<dyn NotificationTransport>,
}

impl NotificationRouter {
    pub fn new(transport: Arc<dyn NotificationTransport>) -> Self {
        Self { transport }
    }

    pub async fn dispatch(&self, alert: &Alert, settings: &AgentSettings) {
        let decision = routes(alert.priority, settings);

        if decision.push {
            if let Err(e) = self.transport.send_push(alert).await {
                tracing::warn!(title = %alert.title, "push delivery failed: {e}");
            }
        }

        if decision.email {
            if let Err(e) = self.transport.send_email(alert).await {
                tracing::warn!(title = %alert.title, "email delivery failed: {e}");
            }
        }

        if decision.sms {
            let body = alert.sms_body();
            if let Err(e) = self.transport.send_sms(&settings.phone_number, &body).await {
                tracing::warn!(title = %alert.title, "sms delivery failed: {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use notification_service::{AlertKind, NotificationError};
    use tokio::sync::Mutex;
    use wallet_core::RiskTolerance;

    #[derive(Default)]
    struct RecordingTransport {
        sent: Mutex<Vec<String>>,
        fail_email: bool,
    }

    #[async_trait]
    impl NotificationTransport for RecordingTransport {
        async fn send_push(&self, alert: &Alert) -> Result<(), NotificationError> {
            self.sent.lock().await.push(format!("push:{}", alert.title));
            Ok(())
        }

        async fn send_email(&self, alert: &Alert) -> Result<(), NotificationError> {
            if self.fail_email {
                return Err(NotificationError::Email("smtp down".into()));
            }
            self.sent
                .lock()
                .await
                .push(format!("email:{}", alert.title));
            Ok(())
        }

        async fn send_sms(&self, phone: &str, body: &str) -> Result<(), NotificationError> {
            self.sent.lock().await.push(format!("sms:{phone}:{body}"));
            Ok(())
        }
    }

    fn settings(sms: bool) -> AgentSettings {
        let mut settings = AgentSettings::new(RiskTolerance::Moderate, "+15550001111");
        settings.sms_enabled = sms;
        settings
    }

    fn alert(priority: AlertPriority) -> Alert {
        Alert::new(AlertKind::RiskAlert, priority, "t", "m", "Review Position")
    }

    #[test]
    fn sms_requires_high_priority() {
        let settings = settings(true);
        for priority in [AlertPriority::Low, AlertPriority::Medium] {
            assert!(!routes(priority, &settings).sms, "{priority}");
        }
        for priority in [AlertPriority::High, AlertPriority::Critical] {
            assert!(routes(priority, &settings).sms, "{priority}");
        }
    }

    #[test]
    fn sms_disabled_never_fires() {
        let settings = settings(false);
        assert!(!routes(AlertPriority::Critical, &settings).sms);
    }

    #[test]
    fn sms_skipped_without_phone_number() {
        let mut settings = settings(true);
        settings.phone_number.clear();
        assert!(!routes(AlertPriority::Critical, &settings).sms);
    }

    #[test]
    fn push_and_email_ignore_priority() {
        let settings = settings(false);
        let decision = routes(AlertPriority::Low, &settings);
        assert!(decision.push);
        assert!(decision.email);
    }

    #[tokio::test]
    async fn dispatch_sends_to_selected_channels() {
        let transport = Arc::new(RecordingTransport::default());
        let router = NotificationRouter::new(Arc::clone(&transport) as _);

        router
            .dispatch(&alert(AlertPriority::Critical), &settings(true))
            .await;

        let sent = transport.sent.lock().await;
        assert_eq!(sent.len(), 3);
        assert!(sent[2].starts_with("sms:+15550001111:[CRITICAL] Stellar Compass:"));
    }

    #[tokio::test]
    async fn transport_failure_does_not_stop_other_channels() {
        let transport = Arc::new(RecordingTransport {
            fail_email: true,
            ..Default::default()
        });
        let router = NotificationRouter::new(Arc::clone(&transport) as _);

        router
            .dispatch(&alert(AlertPriority::High), &settings(true))
            .await;

        let sent = transport.sent.lock().await;
        assert_eq!(sent.len(), 2);
        assert!(sent.iter().any(|s| s.starts_with("push:")));
        assert!(sent.iter().any(|s| s.starts_with("sms:")));
    }
}
