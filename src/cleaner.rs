//! Text normalization: tokenize and drop stopwords, punctuation and numbers

use crate::error::{ExtractError, Result};
use crate::stopwords::{NUMBER_WORDS, STOPWORDS};
use regex::Regex;
use std::collections::HashSet;
use tracing::{debug, error};

/// Decimal numbers, words with inner apostrophes, or runs of other symbols
const TOKEN_PATTERN: &str = r"\d+(?:[.,]\d+)+|\w+(?:['’]\w+)*|[^\w\s]+";

/// Contraction and possessive endings split off a word, as `n't` / `'s` etc.
const CLITICS: &[&str] = &["n't", "'s", "'d", "'ll", "'m", "'re", "'ve"];

static MODEL: std::sync::LazyLock<Result<TextModel>> = std::sync::LazyLock::new(TextModel::load);

/// Load the shared text model ahead of first use.
///
/// Calling this is optional; [`clean_text`] loads the model on demand.
pub fn init() -> Result<&'static TextModel> {
    (*MODEL)
        .as_ref()
        .map_err(|e| ExtractError::Model(e.to_string()))
}

/// Clean raw text into a single space-joined string of content tokens.
///
/// Returns an empty sequence when the input is blank, nothing survives
/// cleaning, or the model is unavailable.
#[must_use]
pub fn clean_text(raw: &str) -> Vec<String> {
    match init() {
        Ok(model) => model.clean(raw),
        Err(e) => {
            error!("Cannot clean text: {e}");
            Vec::new()
        }
    }
}

/// English tokenizer with stopword and number-word tables
#[derive(Debug)]
pub struct TextModel {
    tokenizer: Regex,
    stopwords: HashSet<&'static str>,
    number_words: HashSet<&'static str>,
}

impl TextModel {
    pub fn load() -> Result<Self> {
        let tokenizer = Regex::new(TOKEN_PATTERN).map_err(|e| ExtractError::Model(e.to_string()))?;
        debug!(
            "Loaded text model with {} stopwords and {} number words",
            STOPWORDS.len(),
            NUMBER_WORDS.len()
        );

        Ok(Self {
            tokenizer,
            stopwords: STOPWORDS.iter().copied().collect(),
            number_words: NUMBER_WORDS.iter().copied().collect(),
        })
    }

    /// Tokens in order of appearance, contractions reduced to their stem
    pub fn tokens<'t>(&'t self, text: &'t str) -> impl Iterator<Item = &'t str> + 't {
        self.tokenizer
            .find_iter(text)
            .map(|m| strip_clitic(m.as_str()))
            .filter(|token| !token.is_empty())
    }

    /// Clean `raw`; see [`clean_text`]
    #[must_use]
    pub fn clean(&self, raw: &str) -> Vec<String> {
        if raw.trim().is_empty() {
            return Vec::new();
        }

        let kept: Vec<&str> = self
            .tokens(raw)
            .filter(|token| {
                !self.is_stopword(token) && !is_punctuation(token) && !self.is_number_like(token)
            })
            .collect();

        if kept.is_empty() {
            Vec::new()
        } else {
            vec![kept.join(" ")]
        }
    }

    #[must_use]
    pub fn is_stopword(&self, token: &str) -> bool {
        let lower = token.to_lowercase().replace('’', "'");
        self.stopwords.contains(lower.as_str())
    }

    /// Digits with `,`/`.` separators and an optional sign, digit
    /// ordinals (`3rd`, `21st`), simple fractions, or spelled-out numbers
    #[must_use]
    pub fn is_number_like(&self, token: &str) -> bool {
        let unsigned = token.trim_start_matches(['+', '-', '±', '~']);
        let digits: String = unsigned.chars().filter(|c| *c != ',' && *c != '.').collect();
        if is_digits(&digits) {
            return true;
        }

        let lower = digits.to_lowercase();
        if let Some(stem) = ["st", "nd", "rd", "th"]
            .iter()
            .find_map(|suffix| lower.strip_suffix(suffix))
            && is_digits(stem)
        {
            return true;
        }

        if let Some((num, denom)) = unsigned.split_once('/')
            && is_digits(num)
            && is_digits(denom)
        {
            return true;
        }

        self.number_words.contains(token.to_lowercase().as_str())
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

fn is_punctuation(token: &str) -> bool {
    !token.chars().any(char::is_alphanumeric)
}

fn strip_clitic(token: &str) -> &str {
    let normalized = token.replace('’', "'").to_lowercase();
    CLITICS
        .iter()
        .find(|clitic| normalized.len() > clitic.len() && normalized.ends_with(*clitic))
        .map_or(token, |clitic| {
            // The curly apostrophe is three bytes; the straight one is one
            let curly = token.to_lowercase().ends_with(&clitic.replace('\'', "’"));
            let cut = clitic.len() + if curly { 2 } else { 0 };
            &token[..token.len() - cut]
        })
}
