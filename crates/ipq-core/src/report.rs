//! Rendering of a reputation record into the chat report.

use crate::{formatting::StyledMessage, reputation::ReputationRecord, risk::RiskLevel};

/// Build the report body for one queried IP.
///
/// Field order and wording are fixed; rendering the same inputs twice yields
/// byte-identical output. The header echoes the queried IP rather than the
/// record's, so the caller sees exactly what was looked up.
pub fn render_report(ip: &str, record: &ReputationRecord, level: RiskLevel) -> StyledMessage {
    StyledMessage::new()
        .bold(format!("📊 IP Quality Report for {ip}"))
        .blank()
        .quote(format!("🌍 Country: {}", record.country_code))
        .quote(format!("🏢 ISP: {}", record.isp))
        .quote(format!(
            "{} {} - {}",
            level.glyph(),
            level.label(),
            level.summary()
        ))
        .bold("Additional Details:")
        .quote(format!("🔒 Proxy/VPN/Tor: {}", yes_no(record.proxy)))
        .quote(format!("📱 Mobile: {}", yes_no(record.mobile)))
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::classify;

    fn record() -> ReputationRecord {
        ReputationRecord {
            ip: "8.8.8.8".to_string(),
            fraud_score: Some(95.0),
            country_code: "US".to_string(),
            isp: "Google LLC".to_string(),
            proxy: true,
            mobile: false,
        }
    }

    #[test]
    fn renders_all_sections() {
        let r = record();
        let html = render_report("8.8.8.8", &r, classify(r.fraud_score)).to_html();

        assert!(html.contains("<b>📊 IP Quality Report for 8.8.8.8</b>"));
        assert!(html.contains("<blockquote>🌍 Country: US</blockquote>"));
        assert!(html.contains("<blockquote>🏢 ISP: Google LLC</blockquote>"));
        assert!(html.contains("⛔ Frequent Abusive Behavior"));
        assert!(html.contains("<b>Additional Details:</b>"));
        assert!(html.contains("🔒 Proxy/VPN/Tor: Yes"));
        assert!(html.contains("📱 Mobile: No"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let r = record();
        let a = render_report("8.8.8.8", &r, classify(r.fraud_score)).to_html();
        let b = render_report("8.8.8.8", &r, classify(r.fraud_score)).to_html();
        assert_eq!(a, b);
    }

    #[test]
    fn adversarial_ip_text_cannot_break_markup() {
        let r = ReputationRecord::default();
        let html = render_report("<script>1.2.3.4", &r, RiskLevel::Low).to_html();
        assert!(html.contains("&lt;script&gt;1.2.3.4"));
        assert!(!html.contains("<script>"));
    }
}
