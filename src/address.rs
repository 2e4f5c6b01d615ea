//! Address validation and sender classification

use email_address::{EmailAddress, Options};
use regex::Regex;
use tracing::debug;

/// Applicant-tracking and bulk-mail domains whose senders are always automated
pub const DEFAULT_BULK_DOMAINS: &[&str] = &[
    "us.greenhouse-mail.io",
    "smartrecruiters.com",
    "linkedin.com",
    "ashbyhq.com",
    "hire.lever.co",
    "hi.wellfound.com",
    "talent.icims.com",
    "myworkday.com",
    "otta.com",
];

/// Two-label public suffixes where the organisation sits one label further left
const SECOND_LEVEL_SUFFIXES: &[&str] = &[
    "co.uk", "org.uk", "ac.uk", "gov.uk", "co.jp", "co.nz", "co.za", "co.in", "co.kr", "com.au",
    "net.au", "org.au", "com.br", "com.cn", "com.mx", "com.sg", "com.tr", "com.hk",
];

static AUTOMATED_LOCAL_PART: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"(?i)^(?:no[-_.]?reply|do[-_.]?not[-_.]?reply|notifications|team|hello)@").unwrap()
});

/// Check that an address is a bare `local@domain` with a dotted domain.
///
/// Display-name forms, domain literals and numeric top-level labels are
/// rejected. Never fails; malformed input is simply `false`.
#[must_use]
pub fn is_valid_email(address: &str) -> bool {
    let options = Options::default()
        .without_display_text()
        .without_domain_literal();
    if let Err(e) = EmailAddress::parse_with_options(address, options) {
        debug!("Rejected address {address}: {e}");
        return false;
    }

    let domain = domain_of(address);
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() > 1
        && labels.iter().all(|label| !label.is_empty())
        && labels
            .last()
            .is_some_and(|tld| !tld.chars().all(|c| c.is_ascii_digit()))
}

/// Classify a sender address as automated using the default bulk domains
#[must_use]
pub fn is_automated_email(address: &str) -> bool {
    is_automated_with(address, DEFAULT_BULK_DOMAINS)
}

/// Classify a sender address as automated against a custom domain list.
///
/// Matches role-style local parts (`noreply`, `do-not-reply`,
/// `notifications`, `team`, `hello`) or an exact bulk-domain match.
#[must_use]
pub fn is_automated_with<S: AsRef<str>>(address: &str, bulk_domains: &[S]) -> bool {
    if AUTOMATED_LOCAL_PART.is_match(address) {
        return true;
    }

    let domain = domain_of(address);
    !domain.is_empty()
        && bulk_domains
            .iter()
            .any(|d| d.as_ref().eq_ignore_ascii_case(domain))
}

/// Domain part of an address: everything after the first `@`, or empty
#[must_use]
pub fn domain_of(address: &str) -> &str {
    address.split_once('@').map_or("", |(_, domain)| domain)
}

/// Label naming the organisation behind a domain.
///
/// `acme.com` gives `acme`, `notify.acme-corp.com` gives `acme-corp` and
/// `mail.acme.co.uk` gives `acme`. Single-label domains come back whole.
#[must_use]
pub fn organization_label(domain: &str) -> &str {
    let domain = domain.trim().trim_end_matches('.');
    let labels: Vec<&str> = domain.split('.').collect();

    let suffix_len = if labels.len() > 2 {
        let tail = labels[labels.len() - 2..].join(".").to_lowercase();
        if SECOND_LEVEL_SUFFIXES.contains(&tail.as_str()) {
            2
        } else {
            1
        }
    } else {
        1
    };

    match labels.len().checked_sub(suffix_len + 1) {
        Some(idx) => labels[idx],
        None => labels[0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn organization_label_skips_subdomains() {
        assert_eq!(organization_label("b.com"), "b");
        assert_eq!(organization_label("notify.acme-corp.com"), "acme-corp");
        assert_eq!(organization_label("mail.acme.co.uk"), "acme");
        assert_eq!(organization_label("localhost"), "localhost");
        assert_eq!(organization_label(""), "");
    }

    #[test]
    fn organization_label_two_label_suffix_alone() {
        // Nothing left of the suffix; keep the first label.
        assert_eq!(organization_label("co.uk"), "co");
    }
}
