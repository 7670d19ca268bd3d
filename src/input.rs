//! Address list parsing and validation.

use std::net::IpAddr;

/// Split a comma-separated address list into trimmed, non-empty candidates.
///
/// Order is preserved and repeats are kept; callers decide how to dedupe.
pub fn split_addresses(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse an IPv4 or IPv6 literal. No DNS resolution.
pub fn parse_ip(candidate: &str) -> Option<IpAddr> {
    candidate.parse().ok()
}

/// Whether `candidate` is a valid IPv4 or IPv6 literal.
pub fn is_valid_ip(candidate: &str) -> bool {
    parse_ip(candidate).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_addresses() {
        let parts = split_addresses(Some(" 8.8.8.8, ,1.1.1.1,,8.8.8.8 "));
        assert_eq!(parts, vec!["8.8.8.8", "1.1.1.1", "8.8.8.8"]);
    }

    #[test]
    fn test_split_addresses_none_and_empty() {
        assert!(split_addresses(None).is_empty());
        assert!(split_addresses(Some("")).is_empty());
        assert!(split_addresses(Some(" , ,")).is_empty());
    }

    #[test]
    fn test_split_addresses_trailing_comma() {
        let parts = split_addresses(Some("invalid-ip,also-bad,"));
        assert_eq!(parts, vec!["invalid-ip", "also-bad"]);
    }

    #[test]
    fn test_is_valid_ip() {
        assert!(is_valid_ip("118.25.6.39"));
        assert!(is_valid_ip("::1"));
        assert!(is_valid_ip("2001:4860:4860::8888"));
        assert!(!is_valid_ip("999.999.999.999"));
        assert!(!is_valid_ip(""));
        assert!(!is_valid_ip("example.com"));
        assert!(!is_valid_ip("10.0.0.0/8"));
    }

    #[test]
    fn test_parse_ip() {
        assert_eq!(parse_ip("1.1.1.1"), Some("1.1.1.1".parse().unwrap()));
        assert_eq!(parse_ip("not-an-ip"), None);
    }
}
