//! Reputation record returned by the scoring service.

/// One lookup result, as the upstream reports it. Read-only: the pipeline
/// never mutates a record, only projects it into a report.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReputationRecord {
    pub ip: String,
    pub fraud_score: Option<f64>,
    pub country_code: String,
    pub isp: String,
    pub proxy: bool,
    pub mobile: bool,
}

impl ReputationRecord {
    /// Project the raw upstream JSON into a record.
    ///
    /// Total: absent or mistyped fields fall back to defaults rather than
    /// failing the lookup. A non-numeric `fraud_score` becomes `None`, which
    /// classification treats as low risk.
    pub fn from_value(v: &serde_json::Value) -> Self {
        let get_str = |k: &str| v.get(k).and_then(|x| x.as_str()).unwrap_or("").to_string();
        let get_bool = |k: &str| v.get(k).and_then(|x| x.as_bool()).unwrap_or(false);

        Self {
            ip: get_str("ip"),
            fraud_score: v.get("fraud_score").and_then(|x| x.as_f64()),
            country_code: get_str("country_code"),
            isp: get_str("ISP"),
            proxy: get_bool("proxy"),
            mobile: get_bool("mobile"),
        }
    }
}
