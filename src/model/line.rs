//! Classified résumé lines.

use serde::{Deserialize, Serialize};

/// Role of a line within the résumé.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineRole {
    /// Section title such as "Work History"
    Header,
    /// Anything else
    Body,
}

/// A non-blank line labelled by the section classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedLine {
    /// Line text after date normalization
    pub text: String,

    /// Header or body
    pub role: LineRole,

    /// Canonical section name for headers, `None` for body lines
    pub canonical_section: Option<String>,
}

impl ClassifiedLine {
    /// A header line mapped to `section`.
    pub fn header(text: impl Into<String>, section: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            role: LineRole::Header,
            canonical_section: Some(section.into()),
        }
    }

    /// A body line.
    pub fn body(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            role: LineRole::Body,
            canonical_section: None,
        }
    }

    /// Check if this is a section header.
    pub fn is_header(&self) -> bool {
        self.role == LineRole::Header
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let h = ClassifiedLine::header("Work History", "EXPERIENCE");
        assert!(h.is_header());
        assert_eq!(h.canonical_section.as_deref(), Some("EXPERIENCE"));

        let b = ClassifiedLine::body("Built things");
        assert!(!b.is_header());
        assert!(b.canonical_section.is_none());
    }
}
