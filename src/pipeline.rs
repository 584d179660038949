//! End-to-end conversion: bytes → extraction → cleanup → contact and dates →
//! classification → assembly.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use rayon::prelude::*;

use crate::assemble::DocumentAssembler;
use crate::classify::SectionClassifier;
use crate::contact::{ContactExtractor, NameRecognizer};
use crate::dates::DateNormalizer;
use crate::detect::{detect_format_from_bytes, SourceFormat};
use crate::error::{Error, Result};
use crate::extract::{CleanupOptions, ExtractorRegistry, LineCleanup, TextExtractor};
use crate::model::DocumentStyle;
use crate::profile::AtsProfile;
use crate::render::{Conversion, ConversionStats};

/// Options for a conversion run.
#[derive(Clone, Default)]
pub struct ConvertOptions {
    /// ATS profile driving section classification
    pub profile: AtsProfile,

    /// Per-line text cleanup applied after extraction
    pub cleanup: CleanupOptions,

    /// Optional person-name recognizer for the contact extractor
    pub recognizer: Option<Arc<dyn NameRecognizer>>,

    /// Global output style
    pub style: DocumentStyle,
}

impl ConvertOptions {
    /// Create default options (generic profile, standard cleanup).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ATS profile.
    pub fn with_profile(mut self, profile: AtsProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Set the cleanup options.
    pub fn with_cleanup(mut self, cleanup: CleanupOptions) -> Self {
        self.cleanup = cleanup;
        self
    }

    /// Turn line cleanup off.
    pub fn without_cleanup(mut self) -> Self {
        self.cleanup = CleanupOptions::disabled();
        self
    }

    /// Use a name recognizer.
    pub fn with_recognizer(mut self, recognizer: Arc<dyn NameRecognizer>) -> Self {
        self.recognizer = Some(recognizer);
        self
    }

    /// Set the output style.
    pub fn with_style(mut self, style: DocumentStyle) -> Self {
        self.style = style;
        self
    }
}

impl fmt::Debug for ConvertOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConvertOptions")
            .field("profile", &self.profile.id)
            .field("cleanup", &self.cleanup)
            .field("recognizer", &self.recognizer.is_some())
            .field("style", &self.style)
            .finish()
    }
}

/// A configured conversion pipeline.
///
/// Holds no per-document state, so one pipeline can serve any number of
/// documents, including concurrently.
///
/// # Example
///
/// ```
/// use atsready::pipeline::{ConvertOptions, Pipeline};
/// use atsready::detect::SourceFormat;
///
/// let pipeline = Pipeline::new(ConvertOptions::default());
/// let text = "Jane Doe\njane@example.com\nExperience\nAcme, Jan 2020 - 3/23";
/// let conversion = pipeline.convert_bytes(text.as_bytes(), Some(SourceFormat::Txt)).unwrap();
///
/// assert_eq!(conversion.contact.email, "jane@example.com");
/// assert_eq!(conversion.document.paragraphs[3].text, "EXPERIENCE");
/// ```
#[derive(Clone)]
pub struct Pipeline {
    registry: ExtractorRegistry,
    cleanup: LineCleanup,
    contacts: ContactExtractor,
    dates: DateNormalizer,
    classifier: SectionClassifier,
    assembler: DocumentAssembler,
}

impl Pipeline {
    /// Build a pipeline from options.
    pub fn new(options: ConvertOptions) -> Self {
        let mut contacts = ContactExtractor::new();
        if let Some(recognizer) = options.recognizer {
            contacts = contacts.with_recognizer(recognizer);
        }

        Self {
            registry: ExtractorRegistry::with_defaults(),
            cleanup: LineCleanup::new(options.cleanup),
            contacts,
            dates: DateNormalizer::new(),
            classifier: SectionClassifier::new(options.profile),
            assembler: DocumentAssembler::new().with_style(options.style),
        }
    }

    /// Replace the extractor registry.
    pub fn with_registry(mut self, registry: ExtractorRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Register an additional extractor, replacing any for the same format.
    pub fn register_extractor(&mut self, extractor: Arc<dyn TextExtractor>) {
        self.registry.register(extractor);
    }

    /// The active profile.
    pub fn profile(&self) -> &AtsProfile {
        self.classifier.profile()
    }

    /// Convert an in-memory document.
    ///
    /// When `format` is `None` the format is sniffed from the bytes.
    pub fn convert_bytes(&self, bytes: &[u8], format: Option<SourceFormat>) -> Result<Conversion> {
        let format = match format {
            Some(format) => format,
            None => detect_format_from_bytes(bytes)?,
        };

        let mut raw = self.registry.extract(bytes, format)?;
        if self.cleanup.options().is_enabled() {
            raw = raw.map_lines(|line| self.cleanup.process(line));
        }

        if raw.is_blank() {
            log::debug!("{} document has no text", format);
            return Err(Error::EmptyDocument);
        }

        let text = raw.text();
        let lines = raw.non_blank_lines();
        log::debug!("extracted {} non-blank lines from {}", lines.len(), format);

        let (contact, normalized) = rayon::join(
            || self.contacts.extract(&text),
            || {
                lines
                    .iter()
                    .map(|line| self.dates.normalize_counted(line))
                    .collect::<Vec<_>>()
            },
        );

        let dates_normalized: usize = normalized.iter().map(|(_, n)| n).sum();
        let normalized: Vec<String> = normalized.into_iter().map(|(line, _)| line).collect();
        log::debug!("normalized {} date expressions", dates_normalized);

        let classified = self.classifier.classify_all(normalized.as_slice());
        let document = self.assembler.assemble(&contact, &classified);
        let stats = ConversionStats::from_lines(&classified, dates_normalized as u32);
        log::debug!(
            "classified {} lines: {} headers, {} body",
            stats.line_count,
            stats.header_count,
            stats.body_count
        );

        Ok(Conversion {
            source_format: format,
            profile: self.classifier.profile().id,
            contact,
            lines: classified,
            document,
            stats,
        })
    }

    /// Convert a file, taking the format from its extension and sniffing the
    /// contents when the extension is missing or unrecognized.
    pub fn convert_file<P: AsRef<Path>>(&self, path: P) -> Result<Conversion> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let format = SourceFormat::from_path(path);
        log::debug!("converting {}", path.display());
        self.convert_bytes(&bytes, format)
    }

    /// Convert many files in parallel. Results come back in input order,
    /// one per path.
    pub fn convert_batch<P: AsRef<Path> + Sync>(&self, paths: &[P]) -> Vec<Result<Conversion>> {
        self.convert_batch_with(paths, |_, _| {})
    }

    /// Like [`convert_batch`](Self::convert_batch), calling `on_done` as each
    /// document finishes. Completion order is unspecified.
    pub fn convert_batch_with<P, F>(&self, paths: &[P], on_done: F) -> Vec<Result<Conversion>>
    where
        P: AsRef<Path> + Sync,
        F: Fn(&Path, &Result<Conversion>) + Sync,
    {
        paths
            .par_iter()
            .map(|path| {
                let result = self.convert_file(path);
                on_done(path.as_ref(), &result);
                result
            })
            .collect()
    }

    /// Read a file with `tokio::fs` and convert it on a blocking task.
    #[cfg(feature = "async")]
    pub async fn convert_file_async<P: AsRef<Path>>(&self, path: P) -> Result<Conversion> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let format = SourceFormat::from_path(path);
        let pipeline = self.clone();

        tokio::task::spawn_blocking(move || pipeline.convert_bytes(&bytes, format))
            .await
            .map_err(|e| Error::Io(std::io::Error::other(e)))?
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(ConvertOptions::default())
    }
}
