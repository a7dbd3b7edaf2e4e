//! Per-platform resume extractors.
//!
//! Each platform exports resumes with its own layout. An extractor claims a
//! file through a cheap [`Probe`](crate::document::Probe) and then applies a
//! [`FieldLayout`] to the document text.

mod job51;
mod lagou;
mod liepin;
mod zhilian;
mod zhilian_email;

pub use job51::Job51Extractor;
pub use lagou::LagouExtractor;
pub use liepin::LiepinExtractor;
pub use zhilian::ZhilianExtractor;
pub use zhilian_email::ZhilianEmailExtractor;

use crate::dispatch::{ExtractorRegistry, FallbackKind};
use crate::document::{Document, Probe};
use crate::field_patterns::FieldLayout;
use shared_types::{ExtractionError, Resume, ResumeExtractor};
use std::path::Path;
use std::sync::Arc;

/// All platform extractors in dispatch priority order.
///
/// The Zhilian email extractor comes first because its probe is the
/// narrowest. Lagou doubles as the `.doc` fallback and Zhilian email as the
/// `.eml` fallback.
pub fn default_registry() -> ExtractorRegistry {
    let lagou: Arc<dyn ResumeExtractor> = Arc::new(LagouExtractor::new());
    let zhilian_email: Arc<dyn ResumeExtractor> = Arc::new(ZhilianEmailExtractor::new());

    ExtractorRegistry::new()
        .register(zhilian_email.clone())
        .register(Arc::new(ZhilianExtractor::new()))
        .register(Arc::new(Job51Extractor::new()))
        .register(Arc::new(LiepinExtractor::new()))
        .register(lagou.clone())
        .with_fallback(FallbackKind::WordDocument, lagou)
        .with_fallback(FallbackKind::Email, zhilian_email)
}

/// Probe `path`, treating anything we can't turn into text as unclaimed.
pub(crate) fn textual_probe(path: &Path) -> Option<Probe> {
    Probe::read(path).filter(|probe| probe.kind().is_textual())
}

pub(crate) fn parse_document(
    path: &Path,
    source: &str,
    layout: &FieldLayout,
) -> Result<Resume, ExtractionError> {
    let document = Document::load(path)?;
    resume_from_text(&document.text, source, layout)
}

/// Apply `layout` to `text`. A document without a candidate name is not a
/// resume in this layout.
pub(crate) fn resume_from_text(
    text: &str,
    source: &str,
    layout: &FieldLayout,
) -> Result<Resume, ExtractionError> {
    let mut resume = Resume::from_source(source);
    let filled = layout.apply(text, &mut resume);

    if resume.name.is_none() {
        return Err(ExtractionError::LayoutMismatch(format!(
            "no candidate name found in {source} layout"
        )));
    }

    tracing::debug!(source, filled, "layout applied");
    Ok(resume)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::{Dispatcher, Resolution};
    use std::fs;

    const LAGOU_HTML: &str = r#"<html><head><meta name="generator" content="www.lagou.com"></head><body>
<div>赵敏</div>
<div>女 | 27岁 | 本科 | 4年工作经验 | 杭州</div>
<div>手机：13712345678</div>
<div>邮箱：zhaomin@example.com</div>
<div>期望职位：产品经理</div>
</body></html>"#;

    #[test]
    fn test_default_registry_order() {
        let registry = default_registry();

        assert_eq!(
            registry.names(),
            vec!["zhilian-email", "zhilian", "51job", "liepin", "lagou"]
        );
        assert_eq!(
            registry.fallback(FallbackKind::WordDocument).map(|e| e.name()),
            Some("lagou")
        );
        assert_eq!(
            registry.fallback(FallbackKind::Email).map(|e| e.name()),
            Some("zhilian-email")
        );
    }

    #[test]
    fn test_dispatch_real_lagou_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.doc");
        fs::write(&path, LAGOU_HTML).unwrap();
        let dispatcher = Dispatcher::new(default_registry());

        let resolution = dispatcher.resolve(&path);

        assert!(matches!(
            resolution,
            Resolution::Matched { extractor: "lagou", .. }
        ));
        let resume = resolution.into_resume().unwrap();
        assert_eq!(resume.source.as_deref(), Some("拉勾网"));
        assert_eq!(resume.name.as_deref(), Some("赵敏"));
        assert_eq!(resume.city.as_deref(), Some("杭州"));
        assert_eq!(resume.job.as_deref(), Some("产品经理"));
    }

    #[test]
    fn test_unmarked_doc_falls_back_to_lagou_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("unknown.doc");
        fs::write(&path, LAGOU_HTML.replace("www.lagou.com", "exported")).unwrap();
        let dispatcher = Dispatcher::new(default_registry());

        let resolution = dispatcher.resolve(&path);

        assert!(matches!(
            resolution,
            Resolution::Recovered {
                extractor: "lagou",
                kind: FallbackKind::WordDocument,
                ..
            }
        ));
        assert_eq!(
            resolution.resume().and_then(|r| r.name.as_deref()),
            Some("赵敏")
        );
    }

    #[test]
    fn test_unrelated_files_stay_unresolved() {
        let dir = tempfile::tempdir().unwrap();
        let doc = dir.path().join("minutes.doc");
        let txt = dir.path().join("notes.txt");
        fs::write(&doc, "<html><body><p>会议纪要</p></body></html>").unwrap();
        fs::write(&txt, "购物清单").unwrap();
        let dispatcher = Dispatcher::new(default_registry());

        let doc_resolution = dispatcher.resolve(&doc);
        let txt_resolution = dispatcher.resolve(&txt);

        assert!(doc_resolution.resume().is_none());
        assert_eq!(doc_resolution.failures().len(), 1);
        assert!(txt_resolution.resume().is_none());
        assert!(txt_resolution.failures().is_empty());
    }
}
