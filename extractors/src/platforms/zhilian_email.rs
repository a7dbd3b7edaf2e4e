use super::{textual_probe, zhilian};
use crate::document::Document;
use crate::field_patterns::{FieldLayout, FieldPattern};
use shared_types::{ExtractionError, Resume, ResumeExtractor, ResumeField};
use std::path::Path;

const SUBJECT: &str = r"应聘[ \t]*(.+?)-([^-]+)-([^-]+?)[ \t]*$";

/// Zhilian application notifications saved as `.eml`.
///
/// The subject reads `应聘 <job>-<city>-<name>` and takes precedence over
/// the resume body, which uses the regular Zhilian layout.
pub struct ZhilianEmailExtractor {
    subject: FieldLayout,
    body: FieldLayout,
}

impl ZhilianEmailExtractor {
    pub fn new() -> Self {
        Self {
            subject: FieldLayout::new(vec![
                FieldPattern::new(ResumeField::Job, SUBJECT, 1),
                FieldPattern::new(ResumeField::City, SUBJECT, 2),
                FieldPattern::new(ResumeField::Name, SUBJECT, 3),
            ]),
            body: zhilian::body_layout(),
        }
    }
}

impl Default for ZhilianEmailExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeExtractor for ZhilianEmailExtractor {
    fn name(&self) -> &'static str {
        "zhilian-email"
    }

    fn can_handle(&self, path: &Path) -> bool {
        textual_probe(path).map_or(false, |probe| {
            probe.extension() == Some("eml")
                && (probe.head_contains("zhaopin") || probe.name_contains("智联"))
        })
    }

    fn extract(&self, path: &Path) -> Result<Resume, ExtractionError> {
        let document = Document::load(path)?;
        let mut resume = Resume::from_source(zhilian::SOURCE);

        let mut filled = 0;
        if let Some(subject) = &document.subject {
            filled += self.subject.apply(subject, &mut resume);
        }
        filled += self.body.apply(&document.text, &mut resume);

        if resume.name.is_none() {
            return Err(ExtractionError::LayoutMismatch(
                "no candidate name in subject or body".to_string(),
            ));
        }

        tracing::debug!(file = %path.display(), filled, "zhilian mail parsed");
        Ok(resume)
    }
}
