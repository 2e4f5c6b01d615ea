//! Per-message classification

use crate::address::is_automated_with;
use crate::body::extract_plain_text_with;
use crate::company::company_name_with;
use crate::config::ExtractorConfig;
use crate::headers::{get_from_address, get_received_at, get_subject};
use crate::types::{Classification, Message};
use tracing::debug;

/// Classification pipeline bound to a configuration.
///
/// Holds no mutable state, so one instance can be shared across threads
/// and messages processed in any order.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractorConfig,
}

impl Extractor {
    #[must_use]
    pub const fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    #[must_use]
    pub fn is_automated(&self, address: &str) -> bool {
        is_automated_with(address, self.config.bulk_domains.as_slice())
    }

    #[must_use]
    pub fn plain_text(&self, message: &Message) -> Vec<String> {
        extract_plain_text_with(message, self.config.body_scan)
    }

    #[must_use]
    pub fn company_name(&self, message: &Message) -> String {
        company_name_with(message, &self.config)
    }

    /// Derive all fields for one message
    #[must_use]
    pub fn classify(&self, message: &Message) -> Classification {
        let from_address = get_from_address(message);
        let classification = Classification {
            is_automated: self.is_automated(from_address),
            company_name: self.company_name(message),
            subject: get_subject(message).to_string(),
            from_address: from_address.to_string(),
            received_at: get_received_at(message),
        };

        debug!(
            "msg {}: automated={} company={:?}",
            message.log_id(),
            classification.is_automated,
            classification.company_name
        );
        classification
    }

    /// Classify a batch, preserving input order
    pub fn classify_all<'a, I>(&self, messages: I) -> Vec<Classification>
    where
        I: IntoIterator<Item = &'a Message>,
    {
        messages.into_iter().map(|m| self.classify(m)).collect()
    }
}

/// Classify one message with the default configuration
#[must_use]
pub fn classify(message: &Message) -> Classification {
    Extractor::default().classify(message)
}

/// Classify a batch with the default configuration
pub fn classify_all<'a, I>(messages: I) -> Vec<Classification>
where
    I: IntoIterator<Item = &'a Message>,
{
    Extractor::default().classify_all(messages)
}
