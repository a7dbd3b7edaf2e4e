use crate::document::extension_of;
use shared_types::ResumeExtractor;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// The two extension-keyed fallback slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FallbackKind {
    /// `.doc` word-processor exports
    WordDocument,
    /// `.eml` mail exports
    Email,
}

impl FallbackKind {
    pub const ALL: [FallbackKind; 2] = [FallbackKind::WordDocument, FallbackKind::Email];

    pub fn extension(&self) -> &'static str {
        match self {
            FallbackKind::WordDocument => "doc",
            FallbackKind::Email => "eml",
        }
    }

    /// Case-insensitive match on the extension of `path`.
    pub fn for_path(path: &Path) -> Option<Self> {
        let extension = extension_of(path)?;
        Self::ALL
            .into_iter()
            .find(|kind| kind.extension() == extension)
    }
}

impl fmt::Display for FallbackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackKind::WordDocument => write!(f, "word-document"),
            FallbackKind::Email => write!(f, "email"),
        }
    }
}

/// Extractors in dispatch priority order plus the fallback slots.
#[derive(Clone, Default)]
pub struct ExtractorRegistry {
    extractors: Vec<Arc<dyn ResumeExtractor>>,
    word_document: Option<Arc<dyn ResumeExtractor>>,
    email: Option<Arc<dyn ResumeExtractor>>,
}

impl ExtractorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `extractor` after every extractor registered so far.
    pub fn register(mut self, extractor: Arc<dyn ResumeExtractor>) -> Self {
        self.extractors.push(extractor);
        self
    }

    /// Fill the `kind` slot, replacing any previous occupant.
    ///
    /// The fallback does not have to be registered for the capability phase.
    pub fn with_fallback(
        mut self,
        kind: FallbackKind,
        extractor: Arc<dyn ResumeExtractor>,
    ) -> Self {
        match kind {
            FallbackKind::WordDocument => self.word_document = Some(extractor),
            FallbackKind::Email => self.email = Some(extractor),
        }
        self
    }

    pub fn extractors(&self) -> impl Iterator<Item = &dyn ResumeExtractor> + '_ {
        self.extractors.iter().map(|extractor| extractor.as_ref())
    }

    pub fn fallback(&self, kind: FallbackKind) -> Option<&dyn ResumeExtractor> {
        match kind {
            FallbackKind::WordDocument => self.word_document.as_deref(),
            FallbackKind::Email => self.email.as_deref(),
        }
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.extractors().map(|extractor| extractor.name()).collect()
    }
}

impl fmt::Debug for ExtractorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractorRegistry")
            .field("extractors", &self.names())
            .field(
                "word_document",
                &self.fallback(FallbackKind::WordDocument).map(|e| e.name()),
            )
            .field("email", &self.fallback(FallbackKind::Email).map(|e| e.name()))
            .finish()
    }
}
