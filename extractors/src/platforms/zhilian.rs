use super::{parse_document, textual_probe};
use crate::field_patterns::{FieldLayout, FieldPattern};
use shared_types::{ExtractionError, Resume, ResumeExtractor, ResumeField};
use std::path::Path;

pub const SOURCE: &str = "智联招聘";

/// Zhilian resume body, shared by the document export and the
/// notification mail: a name line above `女 25岁(1999年8月) 3年工作经验 本科`.
pub(super) fn body_layout() -> FieldLayout {
    FieldLayout::with_common(vec![
        FieldPattern::new(
            ResumeField::Name,
            r"(?m)^[ \t]*([\p{Han}·]{2,6})[ \t]*\n[ \t]*(?:男|女)[ \t]+\d{1,2}[ \t]*岁",
            1,
        ),
        FieldPattern::new(ResumeField::Sex, r"(?m)^[ \t]*(男|女)[ \t]+\d{1,2}[ \t]*岁", 1),
        FieldPattern::new(ResumeField::Birthday, r"岁[ \t]*[（(]([^)）\n]+)[)）]", 1),
        FieldPattern::labelled(ResumeField::Address, r"户[ \t]*口"),
        FieldPattern::labelled(ResumeField::Company, r"最近工作"),
    ])
}

pub struct ZhilianExtractor {
    layout: FieldLayout,
}

impl ZhilianExtractor {
    pub fn new() -> Self {
        Self {
            layout: body_layout(),
        }
    }
}

impl Default for ZhilianExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeExtractor for ZhilianExtractor {
    fn name(&self) -> &'static str {
        "zhilian"
    }

    /// Mail exports belong to [`ZhilianEmailExtractor`](super::ZhilianEmailExtractor).
    fn can_handle(&self, path: &Path) -> bool {
        textual_probe(path).map_or(false, |probe| {
            probe.extension() != Some("eml")
                && (probe.head_contains("zhaopin.com") || probe.name_contains("智联"))
        })
    }

    fn extract(&self, path: &Path) -> Result<Resume, ExtractionError> {
        parse_document(path, SOURCE, &self.layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const SAMPLE_BODY: &str = "<html><body>\
<div>王芳</div>\
<div>女 25岁(1999年8月) 3年工作经验 本科</div>\
<div>现居住地：广州 | 户口：湖南</div>\
<div>手机：13612345678</div>\
<div>E-mail：wangfang@example.com</div>\
<div>应聘职位：UI设计师</div>\
<div>最近工作：某某传媒</div>\
<div>来自 www.zhaopin.com</div>\
</body></html>";

    #[test]
    fn test_extract_document_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.doc");
        fs::write(&path, SAMPLE_BODY).unwrap();
        let extractor = ZhilianExtractor::new();

        assert!(extractor.can_handle(&path));
        let resume = extractor.extract(&path).unwrap();

        assert_eq!(resume.source.as_deref(), Some("智联招聘"));
        assert_eq!(resume.name.as_deref(), Some("王芳"));
        assert_eq!(resume.sex.as_deref(), Some("女"));
        assert_eq!(resume.age, Some(25));
        assert_eq!(resume.birthday.as_deref(), Some("1999年8月"));
        assert_eq!(resume.work_duration.as_deref(), Some("3年"));
        assert_eq!(resume.education.as_deref(), Some("本科"));
        assert_eq!(resume.city.as_deref(), Some("广州"));
        assert_eq!(resume.address.as_deref(), Some("湖南"));
        assert_eq!(resume.phone.as_deref(), Some("13612345678"));
        assert_eq!(resume.mail.as_deref(), Some("wangfang@example.com"));
        assert_eq!(resume.job.as_deref(), Some("UI设计师"));
        assert_eq!(resume.company.as_deref(), Some("某某传媒"));
    }

    #[test]
    fn test_mail_export_is_left_to_email_extractor() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.eml");
        fs::write(&path, SAMPLE_BODY).unwrap();

        assert!(!ZhilianExtractor::new().can_handle(&path));
    }
}
