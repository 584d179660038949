//! Per-line text cleanup applied to extracted résumé text.
//!
//! Every step works on one line at a time, so the line count of a
//! [`RawDocument`](crate::model::RawDocument) never changes.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Options for line cleanup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupOptions {
    /// Normalize Unicode to NFC form
    pub normalize_unicode: bool,

    /// Fix ligatures (fi, fl, etc.)
    pub fix_ligatures: bool,

    /// Replace decorative bullet glyphs with a plain hyphen
    pub standardize_bullets: bool,

    /// Remove Private Use Area (PUA) characters, common in icon fonts
    pub remove_pua: bool,

    /// Remove Unicode replacement character (U+FFFD)
    pub remove_replacement_char: bool,

    /// Remove C0 control characters other than tab, which XML 1.0 forbids
    pub remove_control_chars: bool,

    /// Collapse runs of whitespace inside a line to one space
    pub collapse_whitespace: bool,
}

impl CleanupOptions {
    /// Every step enabled.
    pub fn standard() -> Self {
        Self {
            normalize_unicode: true,
            fix_ligatures: true,
            standardize_bullets: true,
            remove_pua: true,
            remove_replacement_char: true,
            remove_control_chars: true,
            collapse_whitespace: true,
        }
    }

    /// Every step disabled; lines pass through untouched.
    pub fn disabled() -> Self {
        Self {
            normalize_unicode: false,
            fix_ligatures: false,
            standardize_bullets: false,
            remove_pua: false,
            remove_replacement_char: false,
            remove_control_chars: false,
            collapse_whitespace: false,
        }
    }

    /// Whether any step is enabled.
    pub fn is_enabled(&self) -> bool {
        self.normalize_unicode
            || self.fix_ligatures
            || self.standardize_bullets
            || self.remove_pua
            || self.remove_replacement_char
            || self.remove_control_chars
            || self.collapse_whitespace
    }
}

impl Default for CleanupOptions {
    fn default() -> Self {
        Self::standard()
    }
}

/// Bullet glyphs that ATS parsers tend to drop or mangle.
const BULLETS: [char; 14] = [
    '•', '●', '○', '■', '□', '◆', '◇', '▪', '▫', '►', '▻', '➢', '➤', '◦',
];

/// Line cleanup pipeline.
#[derive(Debug, Clone)]
pub struct LineCleanup {
    options: CleanupOptions,
    whitespace_regex: Regex,
    ligature_map: Vec<(&'static str, &'static str)>,
}

impl LineCleanup {
    /// Create a new cleanup pipeline with the given options.
    pub fn new(options: CleanupOptions) -> Self {
        Self {
            options,
            whitespace_regex: Regex::new(r"\s{2,}").expect("whitespace pattern is valid"),
            ligature_map: vec![
                ("\u{FB00}", "ff"),  // ﬀ
                ("\u{FB01}", "fi"),  // ﬁ
                ("\u{FB02}", "fl"),  // ﬂ
                ("\u{FB03}", "ffi"), // ﬃ
                ("\u{FB04}", "ffl"), // ﬄ
                ("\u{FB05}", "st"),  // ﬅ
                ("\u{FB06}", "st"),  // ﬆ
            ],
        }
    }

    /// Options this pipeline was built with.
    pub fn options(&self) -> &CleanupOptions {
        &self.options
    }

    /// Clean a single line.
    pub fn process(&self, line: &str) -> String {
        let mut result = line.to_string();

        if self.options.normalize_unicode {
            result = result.nfc().collect();
        }

        if self.options.fix_ligatures {
            for (ligature, replacement) in &self.ligature_map {
                result = result.replace(ligature, replacement);
            }
        }

        if self.options.remove_pua {
            result = remove_pua_chars(&result);
        }

        if self.options.remove_replacement_char {
            result = result.replace('\u{FFFD}', "");
        }

        if self.options.remove_control_chars {
            result = remove_control_chars(&result);
        }

        if self.options.standardize_bullets {
            result = result.replace(&BULLETS[..], "-");
        }

        if self.options.collapse_whitespace {
            result = self.whitespace_regex.replace_all(&result, " ").to_string();
        }

        result.trim().to_string()
    }
}

impl Default for LineCleanup {
    fn default() -> Self {
        Self::new(CleanupOptions::default())
    }
}

fn remove_pua_chars(text: &str) -> String {
    text.chars()
        .filter(|c| {
            let code = *c as u32;
            !(0xE000..=0xF8FF).contains(&code)
                && !(0xF0000..=0xFFFFD).contains(&code)
                && !(0x100000..=0x10FFFD).contains(&code)
        })
        .collect()
}

/// Drop C0 controls except tab. Broken PDF font encodings emit these.
fn remove_control_chars(text: &str) -> String {
    text.chars()
        .filter(|c| *c == '\t' || !c.is_ascii_control())
        .collect()
}
