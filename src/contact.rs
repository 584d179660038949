//! Contact field extraction: name, email and phone.
//!
//! Misses are not errors. Any field that cannot be found comes back as
//! [`UNKNOWN`](crate::model::UNKNOWN).

use std::sync::Arc;

use regex::Regex;

use crate::model::ContactRecord;

/// Named-entity recognizer used for name detection.
///
/// Implementations are owned by the caller and handed to
/// [`ContactExtractor::with_recognizer`]; the library never loads a model
/// on its own.
pub trait NameRecognizer: Send + Sync {
    /// Return the first entity tagged PERSON in `text`, if any.
    fn first_person(&self, text: &str) -> Option<String>;
}

/// Pulls a [`ContactRecord`] out of résumé text.
#[derive(Clone)]
pub struct ContactExtractor {
    email_regex: Regex,
    phone_regex: Regex,
    recognizer: Option<Arc<dyn NameRecognizer>>,
}

impl ContactExtractor {
    /// Create an extractor using the first-line name heuristic.
    pub fn new() -> Self {
        Self {
            email_regex: Regex::new(r"[\w.-]+@[\w.-]+").expect("email pattern is valid"),
            // Optional country code starting at a word boundary or `+`,
            // optional parentheses around the area code, space or hyphen
            // between 3-3-4 digit groups.
            phone_regex: Regex::new(
                r"(?:(?:\+|\b)\d{1,2}[ -]?)?(?:\(\d{3}\)|\b\d{3})[ -]?\d{3}[ -]\d{4}\b",
            )
            .expect("phone pattern is valid"),
            recognizer: None,
        }
    }

    /// Use `recognizer` instead of the first-line heuristic for names.
    pub fn with_recognizer(mut self, recognizer: Arc<dyn NameRecognizer>) -> Self {
        self.recognizer = Some(recognizer);
        self
    }

    /// Whether a name recognizer is configured.
    pub fn has_recognizer(&self) -> bool {
        self.recognizer.is_some()
    }

    /// Extract all three fields from the full document text.
    pub fn extract(&self, text: &str) -> ContactRecord {
        let record = ContactRecord::new(self.name(text), self.email(text), self.phone(text));
        log::debug!("contact fields: {}", record);
        record
    }

    /// First email-like token.
    pub fn email(&self, text: &str) -> Option<String> {
        self.email_regex
            .find(text)
            .map(|m| m.as_str().trim_end_matches('.').to_string())
    }

    /// First US-style phone number.
    pub fn phone(&self, text: &str) -> Option<String> {
        self.phone_regex
            .find(text)
            .map(|m| m.as_str().trim().to_string())
    }

    /// Candidate name.
    ///
    /// With a recognizer, its first PERSON entity and nothing else. Without
    /// one, the first non-blank line.
    pub fn name(&self, text: &str) -> Option<String> {
        if let Some(recognizer) = &self.recognizer {
            return recognizer
                .first_person(text)
                .map(|person| person.trim().to_string())
                .filter(|person| !person.is_empty());
        }

        text.lines()
            .map(str::trim)
            .find(|l| !l.is_empty())
            .map(str::to_string)
    }
}

impl Default for ContactExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ContactExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactExtractor")
            .field("recognizer", &self.recognizer.is_some())
            .finish()
    }
}
