use super::{parse_document, textual_probe};
use crate::field_patterns::{FieldLayout, FieldPattern};
use shared_types::{ExtractionError, Resume, ResumeExtractor, ResumeField};
use std::path::Path;

pub const SOURCE: &str = "前程无忧";

/// 51job (前程无忧) exports carry the name above an `ID:` line and the
/// birthday in brackets after the age, e.g. `男 | 28岁（1996年3月12日）`.
pub struct Job51Extractor {
    layout: FieldLayout,
}

impl Job51Extractor {
    pub fn new() -> Self {
        Self {
            layout: FieldLayout::with_common(vec![
                FieldPattern::new(
                    ResumeField::Name,
                    r"(?m)^[ \t]*([\p{Han}·]{2,6})[ \t]*\n[ \t]*(?:ID|流水号)[ \t]*[:：]",
                    1,
                ),
                FieldPattern::new(ResumeField::Sex, r"(?m)^[ \t]*(男|女)[ \t]*[|｜]", 1),
                FieldPattern::new(
                    ResumeField::Birthday,
                    r"[（(][ \t]*(\d{4}[ \t]*年[ \t]*\d{1,2}[ \t]*月(?:[ \t]*\d{1,2}[ \t]*日)?)[ \t]*[)）]",
                    1,
                ),
                FieldPattern::new(
                    ResumeField::City,
                    r"现居住(?:地)?[ \t]*[:：]?[ \t]*([\p{Han}]{2,8})",
                    1,
                ),
                FieldPattern::labelled(ResumeField::Address, r"户口/国籍|户[ \t]*口"),
                FieldPattern::labelled(ResumeField::Company, r"最近工作单位|最近工作"),
            ]),
        }
    }
}

impl Default for Job51Extractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeExtractor for Job51Extractor {
    fn name(&self) -> &'static str {
        "51job"
    }

    fn can_handle(&self, path: &Path) -> bool {
        textual_probe(path).map_or(false, |probe| {
            probe.head_contains("51job")
                || probe.name_contains("51job")
                || probe.name_contains("前程无忧")
        })
    }

    fn extract(&self, path: &Path) -> Result<Resume, ExtractionError> {
        parse_document(path, SOURCE, &self.layout)
    }
}
