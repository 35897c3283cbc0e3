//! IPv4 syntax check for free-text chat input.

use std::sync::OnceLock;

use regex::Regex;

/// Matches exactly four dot-separated groups of 1-3 digits, nothing else.
fn ipv4_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^([0-9]{1,3}\.){3}[0-9]{1,3}$").expect("valid regex"))
}

/// Syntactic filter only: octets are not range-checked, so `999.1.1.1`
/// passes. The reputation service is the authority on whether an address is
/// meaningful.
pub fn is_valid_ipv4(text: &str) -> bool {
    ipv4_pattern().is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_dotted_quads() {
        assert!(is_valid_ipv4("1.2.3.4"));
        assert!(is_valid_ipv4("8.8.8.8"));
        assert!(is_valid_ipv4("192.168.001.254"));
    }

    #[test]
    fn accepts_out_of_range_octets() {
        // Syntactic only; range checking is out of contract.
        assert!(is_valid_ipv4("999.1.1.1"));
    }

    #[test]
    fn rejects_everything_else() {
        assert!(!is_valid_ipv4(""));
        assert!(!is_valid_ipv4("abc"));
        assert!(!is_valid_ipv4("1.2.3"));
        assert!(!is_valid_ipv4("1.2.3.4.5"));
        assert!(!is_valid_ipv4("1234.1.1.1"));
        assert!(!is_valid_ipv4(" 1.2.3.4"));
        assert!(!is_valid_ipv4("1.2.3.4 "));
        assert!(!is_valid_ipv4("1.2.3.x"));
        assert!(!is_valid_ipv4("2001:db8::1"));
    }
}
