//! Two-phase resolution of a file to a [`Resume`].
//!
//! Phase one asks the registered extractors, in order, whether they own the
//! file and runs only the first that says yes. If that produced nothing and
//! the extension has a fallback slot, phase two runs the slot's extractor
//! without asking. Every attempt ends as a value; nothing here panics or
//! aborts on a bad document.

mod registry;

pub use registry::{ExtractorRegistry, FallbackKind};

use shared_types::{ExtractionError, Resume, ResumeExtractor};
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Capability,
    Fallback(FallbackKind),
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Capability => write!(f, "capability"),
            Phase::Fallback(kind) => write!(f, "fallback({kind})"),
        }
    }
}

/// A failed `extract` call.
#[derive(Debug)]
pub struct AttemptFailure {
    pub extractor: &'static str,
    pub phase: Phase,
    pub error: ExtractionError,
}

impl fmt::Display for AttemptFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.extractor, self.phase, self.error)
    }
}

#[derive(Debug)]
pub enum Resolution {
    /// The extractor that claimed the file parsed it
    Matched {
        extractor: &'static str,
        resume: Resume,
    },
    /// The fallback for `kind` parsed the file after phase one came up empty
    Recovered {
        extractor: &'static str,
        kind: FallbackKind,
        resume: Resume,
        failures: Vec<AttemptFailure>,
    },
    Unresolved { failures: Vec<AttemptFailure> },
}

impl Resolution {
    pub fn resume(&self) -> Option<&Resume> {
        match self {
            Resolution::Matched { resume, .. } | Resolution::Recovered { resume, .. } => {
                Some(resume)
            }
            Resolution::Unresolved { .. } => None,
        }
    }

    pub fn into_resume(self) -> Option<Resume> {
        match self {
            Resolution::Matched { resume, .. } | Resolution::Recovered { resume, .. } => {
                Some(resume)
            }
            Resolution::Unresolved { .. } => None,
        }
    }

    /// Name of the extractor that produced the resume
    pub fn extractor(&self) -> Option<&'static str> {
        match self {
            Resolution::Matched { extractor, .. } | Resolution::Recovered { extractor, .. } => {
                Some(*extractor)
            }
            Resolution::Unresolved { .. } => None,
        }
    }

    pub fn failures(&self) -> &[AttemptFailure] {
        match self {
            Resolution::Matched { .. } => &[],
            Resolution::Recovered { failures, .. } | Resolution::Unresolved { failures } => {
                failures.as_slice()
            }
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.resume().is_some()
    }
}

/// Resolves files against an [`ExtractorRegistry`].
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: ExtractorRegistry,
}

impl Dispatcher {
    pub fn new(registry: ExtractorRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ExtractorRegistry {
        &self.registry
    }

    pub fn resolve(&self, path: &Path) -> Resolution {
        if path.is_dir() {
            tracing::debug!(file = %path.display(), "skipping directory");
            return Resolution::Unresolved {
                failures: Vec::new(),
            };
        }

        let mut failures = Vec::new();

        // Phase 1: first claimant only, even if it fails
        if let Some(extractor) = self.registry.extractors().find(|e| e.can_handle(path)) {
            match attempt(extractor, path, Phase::Capability) {
                Ok(resume) => {
                    return Resolution::Matched {
                        extractor: extractor.name(),
                        resume,
                    }
                }
                Err(failure) => failures.push(failure),
            }
        }

        // Phase 2
        let Some(kind) = FallbackKind::for_path(path) else {
            return Resolution::Unresolved { failures };
        };
        let Some(extractor) = self.registry.fallback(kind) else {
            return Resolution::Unresolved { failures };
        };

        tracing::debug!(
            file = %path.display(),
            extractor = extractor.name(),
            %kind,
            "forcing fallback extractor"
        );

        match attempt(extractor, path, Phase::Fallback(kind)) {
            Ok(resume) => Resolution::Recovered {
                extractor: extractor.name(),
                kind,
                resume,
                failures,
            },
            Err(failure) => {
                failures.push(failure);
                Resolution::Unresolved { failures }
            }
        }
    }
}

fn attempt(
    extractor: &dyn ResumeExtractor,
    path: &Path,
    phase: Phase,
) -> Result<Resume, AttemptFailure> {
    extractor.extract(path).map_err(|error| {
        tracing::warn!(
            file = %path.display(),
            extractor = extractor.name(),
            %phase,
            %error,
            "extraction failed"
        );
        AttemptFailure {
            extractor: extractor.name(),
            phase,
            error,
        }
    })
}
