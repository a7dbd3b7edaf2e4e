mod common;

pub use common::common_patterns;

use regex::Regex;
use shared_types::{Resume, ResumeField};

/// Characters that end a labelled value
const VALUE: &str = r"([^\s|｜,，;；]+)";

/// One way of finding a field in document text.
pub struct FieldPattern {
    pub field: ResumeField,
    pub regex: Regex,
    pub group: usize,
}

impl FieldPattern {
    /// Panics if `pattern` does not compile; patterns are static literals.
    pub fn new(field: ResumeField, pattern: &str, group: usize) -> Self {
        Self {
            field,
            regex: Regex::new(pattern).unwrap(),
            group,
        }
    }

    /// `labels` is a regex alternation such as `手机|电话`.
    /// The value runs up to the next whitespace or separator.
    pub fn labelled(field: ResumeField, labels: &str) -> Self {
        let pattern = format!(r"(?i)(?:{labels})[ \t]*[:：][ \t]*{VALUE}");
        Self::new(field, &pattern, 1)
    }

    pub fn capture<'t>(&self, text: &'t str) -> Option<&'t str> {
        let captures = self.regex.captures(text)?;
        captures
            .get(self.group)
            .map(|m| m.as_str().trim())
            .filter(|value| !value.is_empty())
    }
}

/// An ordered table of patterns describing one document layout.
///
/// For each field the first pattern that captures a value wins; later
/// patterns never overwrite it.
pub struct FieldLayout {
    patterns: Vec<FieldPattern>,
}

impl FieldLayout {
    pub fn new(patterns: Vec<FieldPattern>) -> Self {
        Self { patterns }
    }

    /// Platform-specific `patterns` followed by [`common_patterns`].
    pub fn with_common(mut patterns: Vec<FieldPattern>) -> Self {
        patterns.extend(common_patterns());
        Self::new(patterns)
    }

    /// Fill empty fields of `resume` from `text`, returning how many were set.
    pub fn apply(&self, text: &str, resume: &mut Resume) -> usize {
        let mut filled = 0;

        for pattern in &self.patterns {
            if resume.has(pattern.field) {
                continue;
            }
            if let Some(value) = pattern.capture(text) {
                if resume.fill(pattern.field, value) {
                    filled += 1;
                }
            }
        }

        filled
    }
}
