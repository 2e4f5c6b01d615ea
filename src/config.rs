//! Extractor configuration

use crate::address::DEFAULT_BULK_DOMAINS;
use serde::{Deserialize, Serialize};

/// How deep the body extractor looks for text parts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyScan {
    /// Only the direct children of `payload.parts`
    #[default]
    Shallow,

    /// Walk nested multipart trees depth-first
    Recursive,
}

/// Tuning knobs for [`crate::Extractor`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    pub body_scan: BodyScan,

    /// Sender domains treated as automated regardless of local part
    pub bulk_domains: Vec<String>,

    /// Fall back to the sender's domain when the body yields no name
    pub domain_fallback: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            body_scan: BodyScan::default(),
            bulk_domains: DEFAULT_BULK_DOMAINS
                .iter()
                .map(ToString::to_string)
                .collect(),
            domain_fallback: true,
        }
    }
}

impl ExtractorConfig {
    #[must_use]
    pub const fn with_body_scan(mut self, scan: BodyScan) -> Self {
        self.body_scan = scan;
        self
    }

    #[must_use]
    pub fn with_bulk_domain(mut self, domain: impl Into<String>) -> Self {
        self.bulk_domains.push(domain.into());
        self
    }

    #[must_use]
    pub const fn with_domain_fallback(mut self, enabled: bool) -> Self {
        self.domain_fallback = enabled;
        self
    }
}
