//! ATS profiles: per-vendor section vocabularies.
//!
//! Every profile is a row in one data table rather than its own code path.
//! A profile lists canonical section names in priority order; each canonical
//! name owns the lowercase trigger substrings that mark a line as that
//! section's header.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target applicant tracking system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileId {
    /// Workday Recruiting
    Workday,
    /// Lever
    Lever,
    /// AshbyHQ
    Ashby,
    /// Vendor-neutral vocabulary
    #[default]
    Generic,
}

impl ProfileId {
    /// All built-in profile ids.
    pub const ALL: [ProfileId; 4] = [
        ProfileId::Workday,
        ProfileId::Lever,
        ProfileId::Ashby,
        ProfileId::Generic,
    ];

    /// Lowercase identifier, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileId::Workday => "workday",
            ProfileId::Lever => "lever",
            ProfileId::Ashby => "ashby",
            ProfileId::Generic => "generic",
        }
    }

    /// Capitalized name used in output filenames.
    pub fn display_name(&self) -> &'static str {
        match self {
            ProfileId::Workday => "Workday",
            ProfileId::Lever => "Lever",
            ProfileId::Ashby => "Ashby",
            ProfileId::Generic => "Generic",
        }
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "workday" => Ok(ProfileId::Workday),
            "lever" => Ok(ProfileId::Lever),
            "ashby" | "ashbyhq" => Ok(ProfileId::Ashby),
            "generic" => Ok(ProfileId::Generic),
            _ => Err(Error::UnknownProfile(s.to_string())),
        }
    }
}

/// A canonical section and its header triggers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionVocabulary {
    /// Canonical section name, uppercase (e.g. "EXPERIENCE")
    pub name: String,

    /// Lowercase substrings that identify the section header
    pub synonyms: Vec<String>,
}

impl SectionVocabulary {
    /// Build a vocabulary entry, normalizing case.
    pub fn new<S: AsRef<str>>(name: &str, synonyms: &[S]) -> Self {
        Self {
            name: name.trim().to_uppercase(),
            synonyms: synonyms
                .iter()
                .map(|s| s.as_ref().trim().to_lowercase())
                .collect(),
        }
    }

    /// Whether any synonym occurs in `lowered`, which must already be lowercase.
    pub fn matches(&self, lowered: &str) -> bool {
        self.synonyms.iter().any(|s| lowered.contains(s.as_str()))
    }
}

/// Default header length threshold in characters.
pub const DEFAULT_MAX_HEADER_LEN: usize = 30;

fn default_max_header_len() -> usize {
    DEFAULT_MAX_HEADER_LEN
}

/// Header vocabulary for one ATS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtsProfile {
    /// Which ATS this profile targets
    pub id: ProfileId,

    /// Lines at or above this many characters are never headers
    #[serde(default = "default_max_header_len")]
    pub max_header_len: usize,

    /// Canonical sections in tie-break order
    pub sections: Vec<SectionVocabulary>,
}

type SectionRow = (&'static str, &'static [&'static str]);

const WORKDAY_SECTIONS: &[SectionRow] = &[
    ("EXPERIENCE", &["experience", "employment", "work history"]),
    ("EDUCATION", &["education", "academic"]),
    ("SKILLS", &["skills", "competencies", "technologies"]),
];

const LEVER_SECTIONS: &[SectionRow] = &[
    ("SUMMARY", &["summary", "objective", "about me"]),
    (
        "EXPERIENCE",
        &["experience", "employment", "work history", "career history"],
    ),
    ("EDUCATION", &["education", "academic"]),
    ("SKILLS", &["skills", "competencies", "technologies", "tools"]),
    ("PROJECTS", &["projects", "portfolio"]),
];

const ASHBY_SECTIONS: &[SectionRow] = &[
    (
        "EXPERIENCE",
        &["experience", "employment", "work history", "positions held"],
    ),
    ("EDUCATION", &["education", "academic"]),
    ("SKILLS", &["skills", "competencies", "technologies"]),
    ("PROJECTS", &["projects"]),
    ("CERTIFICATIONS", &["certification", "licenses", "licences"]),
    ("AWARDS", &["awards", "honors", "honours"]),
];

const GENERIC_SECTIONS: &[SectionRow] = &[
    ("SUMMARY", &["summary", "objective", "profile"]),
    ("EXPERIENCE", &["experience", "employment", "work history"]),
    ("EDUCATION", &["education", "academic"]),
    ("SKILLS", &["skills", "competencies", "technologies"]),
    ("PROJECTS", &["projects"]),
    ("CERTIFICATIONS", &["certification", "licenses"]),
];

/// Built-in profile table: id, header length threshold, sections.
const PROFILE_TABLE: &[(ProfileId, usize, &[SectionRow])] = &[
    (ProfileId::Workday, 30, WORKDAY_SECTIONS),
    (ProfileId::Lever, 35, LEVER_SECTIONS),
    (ProfileId::Ashby, 40, ASHBY_SECTIONS),
    (ProfileId::Generic, 30, GENERIC_SECTIONS),
];

impl AtsProfile {
    /// Look up a built-in profile.
    pub fn builtin(id: ProfileId) -> Self {
        let (_, max_header_len, rows) = PROFILE_TABLE
            .iter()
            .find(|(row_id, _, _)| *row_id == id)
            .copied()
            .unwrap_or((id, DEFAULT_MAX_HEADER_LEN, GENERIC_SECTIONS));

        Self {
            id,
            max_header_len,
            sections: rows
                .iter()
                .map(|(name, synonyms)| SectionVocabulary::new(name, *synonyms))
                .collect(),
        }
    }

    /// All built-in profiles, in [`ProfileId::ALL`] order.
    pub fn builtins() -> Vec<Self> {
        ProfileId::ALL.iter().map(|id| Self::builtin(*id)).collect()
    }

    /// Look up a built-in profile by its string id.
    pub fn by_name(name: &str) -> Result<Self> {
        name.parse().map(Self::builtin)
    }

    /// Load a custom profile from JSON.
    ///
    /// ```
    /// use atsready::profile::{AtsProfile, ProfileId};
    ///
    /// let json = r#"{
    ///     "id": "lever",
    ///     "max_header_len": 32,
    ///     "sections": [{ "name": "Experience", "synonyms": ["Experience", "roles"] }]
    /// }"#;
    /// let profile = AtsProfile::from_json(json).unwrap();
    /// assert_eq!(profile.id, ProfileId::Lever);
    /// assert_eq!(profile.sections[0].name, "EXPERIENCE");
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: AtsProfile =
            serde_json::from_str(json).map_err(|e| Error::Profile(e.to_string()))?;
        raw.validated()
    }

    /// Normalize case and reject profiles that cannot classify anything.
    pub fn validated(self) -> Result<Self> {
        if self.max_header_len == 0 {
            return Err(Error::Profile("max_header_len must be positive".into()));
        }
        if self.sections.is_empty() {
            return Err(Error::Profile("profile declares no sections".into()));
        }

        let mut sections = Vec::with_capacity(self.sections.len());
        for section in &self.sections {
            let normalized = SectionVocabulary::new(&section.name, section.synonyms.as_slice());
            if normalized.name.is_empty() {
                return Err(Error::Profile("section with empty name".into()));
            }
            if normalized.synonyms.is_empty() || normalized.synonyms.iter().any(|s| s.is_empty()) {
                return Err(Error::Profile(format!(
                    "section {} needs non-empty synonyms",
                    normalized.name
                )));
            }
            sections.push(normalized);
        }

        Ok(Self {
            id: self.id,
            max_header_len: self.max_header_len,
            sections,
        })
    }

    /// Override the header length threshold.
    pub fn with_max_header_len(mut self, len: usize) -> Self {
        self.max_header_len = len;
        self
    }

    /// Canonical section names in declaration order.
    pub fn header_vocabulary(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.name.as_str()).collect()
    }

    /// First section whose synonyms occur in `lowered`.
    pub fn match_section(&self, lowered: &str) -> Option<&SectionVocabulary> {
        self.sections.iter().find(|s| s.matches(lowered))
    }
}

impl Default for AtsProfile {
    fn default() -> Self {
        Self::builtin(ProfileId::Generic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_id_parse() {
        assert_eq!("Workday".parse::<ProfileId>().unwrap(), ProfileId::Workday);
        assert_eq!("ashbyhq".parse::<ProfileId>().unwrap(), ProfileId::Ashby);
        assert!(matches!(
            "taleo".parse::<ProfileId>(),
            Err(Error::UnknownProfile(_))
        ));
        assert_eq!(ProfileId::default(), ProfileId::Generic);
    }

    #[test]
    fn test_every_id_has_table_row() {
        for id in ProfileId::ALL {
            assert!(PROFILE_TABLE.iter().any(|(row, _, _)| *row == id));
        }
    }

    #[test]
    fn test_workday_vocabulary() {
        let profile = AtsProfile::builtin(ProfileId::Workday);
        assert_eq!(
            profile.header_vocabulary(),
            vec!["EXPERIENCE", "EDUCATION", "SKILLS"]
        );
        assert_eq!(profile.max_header_len, 30);
    }

    #[test]
    fn test_thresholds_in_range() {
        for profile in AtsProfile::builtins() {
            assert!((30..=40).contains(&profile.max_header_len));
        }
    }

    #[test]
    fn test_match_section_order() {
        let profile = AtsProfile::builtin(ProfileId::Generic);
        // "skills" and "experience" both match; EXPERIENCE is declared first.
        let hit = profile.match_section("experience & skills").unwrap();
        assert_eq!(hit.name, "EXPERIENCE");
        assert!(profile.match_section("hobbies").is_none());
    }

    #[test]
    fn test_from_json_defaults_threshold() {
        let json = r#"{"id":"ashby","sections":[{"name":"skills","synonyms":["Stack"]}]}"#;
        let profile = AtsProfile::from_json(json).unwrap();
        assert_eq!(profile.max_header_len, DEFAULT_MAX_HEADER_LEN);
        assert_eq!(profile.sections[0].name, "SKILLS");
        assert_eq!(profile.sections[0].synonyms, vec!["stack"]);
    }

    #[test]
    fn test_from_json_rejects_empty() {
        assert!(matches!(
            AtsProfile::from_json(r#"{"id":"lever","sections":[]}"#),
            Err(Error::Profile(_))
        ));
        assert!(matches!(
            AtsProfile::from_json(r#"{"id":"lever","sections":[{"name":"X","synonyms":[" "]}]}"#),
            Err(Error::Profile(_))
        ));
        assert!(matches!(
            AtsProfile::from_json("not json"),
            Err(Error::Profile(_))
        ));
    }
}
