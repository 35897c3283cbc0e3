//! Fraud-score classification.

/// Risk bucket derived from the reputation service's fraud score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiskLevel {
    Severe,
    High,
    Suspicious,
    Low,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Severe => "Frequent Abusive Behavior",
            RiskLevel::High => "High Risk",
            RiskLevel::Suspicious => "Suspicious",
            RiskLevel::Low => "Low Risk",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            RiskLevel::Severe => "⛔",
            RiskLevel::High => "🚨",
            RiskLevel::Suspicious => "⚠️",
            RiskLevel::Low => "✅",
        }
    }

    /// One-line explanation shown next to the label.
    pub fn summary(self) -> &'static str {
        match self {
            RiskLevel::Severe => {
                "Has demonstrated frequent abusive behavior over the past 24-72 hours."
            }
            RiskLevel::High => "Has suspicious behavior signals.",
            RiskLevel::Suspicious => {
                "Has had previous reputation issues or is using a low risk proxy/VPN."
            }
            RiskLevel::Low => "This IP appears to be safe.",
        }
    }
}

/// Map a fraud score to a risk bucket. Highest threshold wins; a missing
/// score (the upstream omitted or mangled `fraud_score`) is treated as low.
/// Never fails.
pub fn classify(score: Option<f64>) -> RiskLevel {
    let Some(score) = score else {
        return RiskLevel::Low;
    };

    if score >= 90.0 {
        RiskLevel::Severe
    } else if score >= 85.0 {
        RiskLevel::High
    } else if score >= 75.0 {
        RiskLevel::Suspicious
    } else {
        RiskLevel::Low
    }
}
