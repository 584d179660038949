//! Section classification against an ATS profile.

use crate::model::ClassifiedLine;
use crate::profile::AtsProfile;

/// Labels lines as section headers or body text.
///
/// A line is a header only when it is shorter than the profile's
/// `max_header_len` *and* contains one of the profile's synonyms. The first
/// matching section in profile order wins.
#[derive(Debug, Clone)]
pub struct SectionClassifier {
    profile: AtsProfile,
}

impl SectionClassifier {
    /// Create a classifier for `profile`.
    pub fn new(profile: AtsProfile) -> Self {
        Self { profile }
    }

    /// The active profile.
    pub fn profile(&self) -> &AtsProfile {
        &self.profile
    }

    /// Classify one non-blank line.
    pub fn classify(&self, line: &str) -> ClassifiedLine {
        let text = line.trim();
        if text.chars().count() >= self.profile.max_header_len {
            return ClassifiedLine::body(text);
        }

        let lowered = text.to_lowercase();
        match self.profile.match_section(&lowered) {
            Some(section) => ClassifiedLine::header(text, section.name.to_uppercase()),
            None => ClassifiedLine::body(text),
        }
    }

    /// Classify lines in order.
    pub fn classify_all<S: AsRef<str>>(&self, lines: &[S]) -> Vec<ClassifiedLine> {
        lines.iter().map(|l| self.classify(l.as_ref())).collect()
    }
}

impl Default for SectionClassifier {
    fn default() -> Self {
        Self::new(AtsProfile::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LineRole;
    use crate::profile::ProfileId;

    fn workday() -> SectionClassifier {
        SectionClassifier::new(AtsProfile::builtin(ProfileId::Workday))
    }

    #[test]
    fn test_header_detected() {
        let line = workday().classify("Experience");
        assert_eq!(line.role, LineRole::Header);
        assert_eq!(line.canonical_section.as_deref(), Some("EXPERIENCE"));
        assert_eq!(line.text, "Experience");
    }

    #[test]
    fn test_synonym_maps_to_canonical() {
        let line = workday().classify("WORK HISTORY");
        assert_eq!(line.canonical_section.as_deref(), Some("EXPERIENCE"));

        let line = workday().classify("Core Competencies");
        assert_eq!(line.canonical_section.as_deref(), Some("SKILLS"));
    }

    #[test]
    fn test_length_gate() {
        let line = format!("Education {}", "x".repeat(70));
        assert_eq!(line.chars().count(), 80);
        let classified = workday().classify(&line);
        assert_eq!(classified.role, LineRole::Body);
        assert!(classified.canonical_section.is_none());
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let profile = AtsProfile::builtin(ProfileId::Workday).with_max_header_len(10);
        let classifier = SectionClassifier::new(profile);
        assert!(classifier.classify("Education").is_header()); // 9 chars
        assert!(!classifier.classify("Educations").is_header()); // 10 chars
    }

    #[test]
    fn test_first_section_wins() {
        // Both EXPERIENCE and SKILLS synonyms occur; EXPERIENCE is declared first.
        let line = workday().classify("Skills & Experience");
        assert_eq!(line.canonical_section.as_deref(), Some("EXPERIENCE"));
    }

    #[test]
    fn test_profiles_differ() {
        let generic = SectionClassifier::new(AtsProfile::builtin(ProfileId::Generic));
        assert!(generic.classify("Projects").is_header());
        assert!(!workday().classify("Projects").is_header());
    }

    #[test]
    fn test_body_line() {
        let line = workday().classify("Built a billing system in Rust");
        assert_eq!(line.role, LineRole::Body);
    }

    #[test]
    fn test_classify_all_preserves_order() {
        let lines = ["Jane Doe", "Education", "BSc, 2019"];
        let classified = workday().classify_all(&lines);
        assert_eq!(classified.len(), 3);
        assert_eq!(classified[0].text, "Jane Doe");
        assert!(classified[1].is_header());
        assert_eq!(classified[2].text, "BSc, 2019");
    }
}
