use crate::{Alert, AlertKind};

pub struct EmailTemplate;

impl EmailTemplate {
    pub fn render(alert: &Alert) -> String {
        let (accent, heading) = match alert.kind {
            AlertKind::IdleAsset => ("#F59E0B", "Idle Assets Detected"),
            AlertKind::ApySpike => ("#4F46E5", "New Yield Opportunity"),
            AlertKind::RiskAlert => ("#EF4444", "Security Alert"),
            AlertKind::Rebalance => ("#4F46E5", "Rebalancing Suggested"),
            AlertKind::Harvest => ("#10B981", "Rewards Ready to Claim"),
            AlertKind::PriceMovement => ("#4F46E5", "Price Movement Alert"),
        };

        let title = escape(&alert.title);
        let message = escape(&alert.message);
        let action = escape(&alert.suggested_action);

        format!(
            r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><meta name="viewport" content="width=device-width,initial-scale=1"></head>
<body style="margin:0;padding:0;background:#F3F4F6;font-family:Arial,sans-serif;color:#333;">
<table width="100%" cellpadding="0" cellspacing="0" style="background:#F3F4F6;padding:32px 0;">
  <tr><td align="center">
    <table width="600" cellpadding="0" cellspacing="0" style="background:#ffffff;border-radius:8px;overflow:hidden;">
      <tr><td style="background:{accent};color:#fff;padding:12px 20px;font-size:18px;font-weight:700;">
        {heading} &mdash; [{priority}]
      </td></tr>
      <tr><td style="padding:20px;">
        <h3 style="margin-top:0;">{title}</h3>
        <div style="background:#F3F4F6;padding:20px;border-radius:8px;border-left:4px solid {accent};">
          <p style="margin:0;">{message}</p>
        </div>
        <p style="margin-top:16px;">
          <span style="background:{accent};color:#fff;padding:12px 24px;border-radius:6px;display:inline-block;">{action}</span>
        </p>
      </td></tr>
      <tr><td style="padding:16px 20px;border-top:1px solid #e2e8f0;">
        <p style="margin:0;color:#94a3b8;font-size:12px;">Sent at {ts} UTC</p>
      </td></tr>
    </table>
    <p style="color:#94a3b8;font-size:11px;margin-top:16px;">Stellar Compass Notifications</p>
  </td></tr>
</table>
</body>
</html>"#,
            priority = alert.priority,
            ts = alert.created_at.format("%Y-%m-%d %H:%M:%S"),
        )
    }
}

// Ampersands first, or already-escaped text gets double-encoded.
fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AlertPriority;

    #[test]
    fn render_includes_title_and_priority_tag() {
        let alert = Alert::new(
            AlertKind::RiskAlert,
            AlertPriority::Critical,
            "Oracle outage",
            "Price feed <stale> for 2 hours",
            "Review Position",
        );

        let html = EmailTemplate::render(&alert);
        assert!(html.contains("Oracle outage"));
        assert!(html.contains("[CRITICAL]"));
        assert!(html.contains("Security Alert"));
        // Markup in the message body is escaped.
        assert!(html.contains("&lt;stale&gt;"));
    }

    #[test]
    fn escape_encodes_ampersands_before_brackets() {
        assert_eq!(escape("AQUA & XLM"), "AQUA &amp; XLM");
        // Literal entity text in a message stays literal, not re-interpreted.
        assert_eq!(escape("shows as &lt;b&gt;"), "shows as &amp;lt;b&amp;gt;");
        assert_eq!(escape("<a>"), "&lt;a&gt;");
    }
}
