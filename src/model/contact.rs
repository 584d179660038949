//! Contact fields pulled from the top of a résumé.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder for a contact field that could not be found.
pub const UNKNOWN: &str = "Unknown";

/// Name, email and phone of the candidate.
///
/// Missing fields hold [`UNKNOWN`] rather than being absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    /// Candidate name
    pub name: String,
    /// Email address
    pub email: String,
    /// Phone number as written in the source
    pub phone: String,
}

impl ContactRecord {
    /// Build a record, substituting [`UNKNOWN`] for missing fields.
    pub fn new(name: Option<String>, email: Option<String>, phone: Option<String>) -> Self {
        Self {
            name: name.unwrap_or_else(|| UNKNOWN.to_string()),
            email: email.unwrap_or_else(|| UNKNOWN.to_string()),
            phone: phone.unwrap_or_else(|| UNKNOWN.to_string()),
        }
    }

    /// A record with every field unknown.
    pub fn unknown() -> Self {
        Self::new(None, None, None)
    }

    /// Whether no field was found.
    pub fn is_unknown(&self) -> bool {
        self.name == UNKNOWN && self.email == UNKNOWN && self.phone == UNKNOWN
    }

    /// Single header line: `name | email | phone`.
    pub fn header_line(&self) -> String {
        format!("{} | {} | {}", self.name, self.email, self.phone)
    }
}

impl Default for ContactRecord {
    fn default() -> Self {
        Self::unknown()
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.header_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_unknown() {
        let record = ContactRecord::new(Some("Jane Doe".into()), None, None);
        assert_eq!(record.email, UNKNOWN);
        assert_eq!(record.phone, UNKNOWN);
        assert!(!record.is_unknown());
        assert!(ContactRecord::default().is_unknown());
    }

    #[test]
    fn test_header_line() {
        let record = ContactRecord::new(
            Some("Jane Doe".into()),
            Some("jane@example.com".into()),
            None,
        );
        assert_eq!(record.header_line(), "Jane Doe | jane@example.com | Unknown");
    }
}
