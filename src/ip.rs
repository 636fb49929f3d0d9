/// Strict IPv4 matching over free-text topic labels.
use regex::Regex;

/// Anchored dotted-quad: four decimal octets 0-255, nothing before or after.
const IPV4_PATTERN: &str = concat!(
    r"^(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.",
    r"(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.",
    r"(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.",
    r"(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$",
);

/// Compiled IPv4 matcher, built once per run and shared by label scanning
/// and the emission-time re-check.
pub struct IpPattern {
    pattern: Regex,
}

impl IpPattern {
    /// # Panics
    ///
    /// Panics if the hardcoded IPv4 regex is invalid (compile-time invariant).
    pub fn new() -> Self {
        return Self {
            pattern: Regex::new(IPV4_PATTERN).expect("valid regex"),
        };
    }

    /// First label that is a complete-string dotted-quad match.
    /// Later labels are ignored even when they would also match.
    pub fn first_in_labels<'a>(&self, labels: &'a [String]) -> Option<&'a str> {
        return labels
            .iter()
            .map(String::as_str)
            .find(|label| self.is_valid(label));
    }

    /// Full-string match only; embedded or partial addresses do not qualify.
    pub fn is_valid(&self, candidate: &str) -> bool {
        return self.pattern.is_match(candidate);
    }
}
