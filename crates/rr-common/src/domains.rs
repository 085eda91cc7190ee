/// Normalize the raw textarea content into the `domains_to_block` list:
/// one domain per line, trimmed, empty lines dropped. Order is preserved
/// and duplicates are allowed.
pub fn parse_domain_list(raw: &str) -> Vec<String> {
    raw.lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(parse_domain_list("").is_empty());
        assert!(parse_domain_list("\n\n\n").is_empty());
        assert!(parse_domain_list("   \n\t\n  ").is_empty());
    }

    #[test]
    fn test_trims_and_drops_empties() {
        let parsed = parse_domain_list("  ads.example.com  \n\n bad.example.com\n");
        assert_eq!(parsed, vec!["ads.example.com", "bad.example.com"]);
    }

    #[test]
    fn test_preserves_order_and_duplicates() {
        let parsed = parse_domain_list("b.com\na.com\nb.com");
        assert_eq!(parsed, vec!["b.com", "a.com", "b.com"]);
    }

    #[test]
    fn test_crlf_input() {
        let parsed = parse_domain_list("ads.example.com\r\ntracker.example.net\r\n");
        assert_eq!(parsed, vec!["ads.example.com", "tracker.example.net"]);
    }

    #[test]
    fn test_never_longer_than_line_count() {
        let raw = "a.com\n\nb.com\n  \nc.com";
        assert!(parse_domain_list(raw).len() <= raw.lines().count());
    }
}
