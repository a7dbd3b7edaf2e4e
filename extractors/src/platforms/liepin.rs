use super::{parse_document, textual_probe};
use crate::field_patterns::{FieldLayout, FieldPattern};
use shared_types::{ExtractionError, Resume, ResumeExtractor, ResumeField};
use std::path::Path;

pub const SOURCE: &str = "猎聘网";

/// Liepin exports are fully labelled; only the candidate heading and the
/// `目前职位`/`目前公司` pair need platform patterns.
pub struct LiepinExtractor {
    layout: FieldLayout,
}

impl LiepinExtractor {
    pub fn new() -> Self {
        Self {
            layout: FieldLayout::with_common(vec![
                FieldPattern::labelled(ResumeField::Name, r"候选人|求职者"),
                FieldPattern::labelled(ResumeField::Job, r"目前职位|当前职位"),
                FieldPattern::labelled(ResumeField::Company, r"目前公司|当前公司"),
                FieldPattern::new(
                    ResumeField::WorkDuration,
                    r"工作年限[ \t]*[:：][ \t]*(\d{1,2}[ \t]*年(?:以上)?)",
                    1,
                ),
            ]),
        }
    }
}

impl Default for LiepinExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeExtractor for LiepinExtractor {
    fn name(&self) -> &'static str {
        "liepin"
    }

    fn can_handle(&self, path: &Path) -> bool {
        textual_probe(path).map_or(false, |probe| {
            probe.head_contains("liepin") || probe.name_contains("猎聘")
        })
    }

    fn extract(&self, path: &Path) -> Result<Resume, ExtractionError> {
        parse_document(path, SOURCE, &self.layout)
    }
}
