//! Company-name extraction from message text and sender domain

use crate::address::{domain_of, organization_label};
use crate::body::extract_plain_text_with;
use crate::cleaner::clean_text;
use crate::config::ExtractorConfig;
use crate::frequency::rank_frequency;
use crate::headers::get_from_address;
use crate::types::{Message, TokenFrequency};
use tracing::debug;

/// Leading run of capitalized tokens sharing the top capitalized count.
///
/// Lowercase tokens are skipped. The first capitalized token fixes the
/// count to match; the scan stops at the first capitalized token ranked
/// below it. Matching tokens are joined with single spaces.
#[must_use]
pub fn top_consecutive_capitalized_words(ranking: &TokenFrequency) -> String {
    let mut run: Vec<(&str, usize)> = Vec::new();
    let mut words: Vec<&str> = Vec::new();
    let mut current_max: Option<usize> = None;

    for (token, count) in ranking.iter() {
        if !is_capitalized(token) {
            continue;
        }

        if run.is_empty() {
            current_max = Some(count);
            run.push((token, count));
        } else if run.last().is_some_and(|&(_, last)| last == count) {
            run.push((token, count));
        }

        if current_max.is_some_and(|max| count < max) {
            break;
        }

        words.push(token);
    }

    words.join(" ")
}

fn is_capitalized(token: &str) -> bool {
    token.chars().next().is_some_and(char::is_uppercase)
}

/// Company name for a message using the default configuration
#[must_use]
pub fn get_company_name(message: &Message) -> String {
    company_name_with(message, &ExtractorConfig::default())
}

pub(crate) fn company_name_with(message: &Message, config: &ExtractorConfig) -> String {
    let top_word = top_word_in_body(message, config);
    if !top_word.is_empty() {
        debug!("msg {}: company from body: {top_word}", message.log_id());
        return top_word;
    }

    if !config.domain_fallback {
        return String::new();
    }

    // No usable body, typically a calendar invite
    let label = organization_label(domain_of(get_from_address(message)));
    debug!("msg {}: company from sender domain: {label}", message.log_id());
    label.to_string()
}

fn top_word_in_body(message: &Message, config: &ExtractorConfig) -> String {
    let Some(text) = extract_plain_text_with(message, config.body_scan).into_iter().next() else {
        return String::new();
    };

    let Some(cleaned) = clean_text(&text).into_iter().next() else {
        debug!("msg {}: nothing left after cleaning", message.log_id());
        return String::new();
    };

    top_consecutive_capitalized_words(&rank_frequency(&cleaned))
}
