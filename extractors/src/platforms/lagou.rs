use super::{parse_document, textual_probe};
use crate::field_patterns::{FieldLayout, FieldPattern};
use shared_types::{ExtractionError, Resume, ResumeExtractor, ResumeField};
use std::path::Path;

pub const SOURCE: &str = "拉勾网";

/// Lagou exports: a name line followed by a `|` separated profile line,
/// e.g. `男 | 28岁 | 本科 | 5年工作经验 | 北京`.
pub struct LagouExtractor {
    layout: FieldLayout,
}

impl LagouExtractor {
    pub fn new() -> Self {
        Self {
            layout: FieldLayout::with_common(vec![
                FieldPattern::new(
                    ResumeField::Name,
                    r"(?m)^[ \t]*([\p{Han}·]{2,6})[ \t]*\n[ \t]*(?:男|女)[ \t]*[|｜/]",
                    1,
                ),
                FieldPattern::new(ResumeField::Sex, r"(?m)^[ \t]*(男|女)[ \t]*[|｜/]", 1),
                FieldPattern::new(ResumeField::Age, r"[|｜/][ \t]*(\d{1,2})[ \t]*岁", 1),
                FieldPattern::new(
                    ResumeField::Education,
                    r"(?m)[|｜/][ \t]*(博士|硕士|本科|大专|高中)[ \t]*(?:[|｜/]|$)",
                    1,
                ),
                FieldPattern::new(
                    ResumeField::WorkDuration,
                    r"[|｜/][ \t]*(\d{1,2}年(?:以上)?|应届毕业生)(?:工作经验)?",
                    1,
                ),
                FieldPattern::new(
                    ResumeField::City,
                    r"工作经验[ \t]*[|｜/][ \t]*([\p{Han}]{2,8})",
                    1,
                ),
                FieldPattern::labelled(ResumeField::Company, r"最近公司|就职公司"),
            ]),
        }
    }
}

impl Default for LagouExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeExtractor for LagouExtractor {
    fn name(&self) -> &'static str {
        "lagou"
    }

    fn can_handle(&self, path: &Path) -> bool {
        textual_probe(path).map_or(false, |probe| {
            probe.head_contains("lagou") || probe.name_contains("拉勾")
        })
    }

    fn extract(&self, path: &Path) -> Result<Resume, ExtractionError> {
        parse_document(path, SOURCE, &self.layout)
    }
}
