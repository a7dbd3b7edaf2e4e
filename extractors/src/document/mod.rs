//! Turning resume files into plain text.
//!
//! Recruiting platforms export resumes as `.doc` files that are really HTML
//! or MIME (MHT) documents, and as `.eml` notification mails. The format is
//! detected from the leading bytes, never from the extension, since the
//! extension is frequently wrong.

mod html;

pub use html::{html_to_text, normalize_lines};

use mail_parser::MessageParser;
use shared_types::ExtractionError;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

/// Upper bound on bytes read by a capability probe
pub const PROBE_LIMIT: u64 = 64 * 1024;

const OLE_SIGNATURE: [u8; 8] = [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];
const ZIP_SIGNATURE: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];
const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// RFC 822 message: `.eml` exports and MHT web archives
    Mime,
    Html,
    /// OLE compound file written by Word 97-2003
    LegacyWord,
    /// Zip container, e.g. `.docx`
    OpenXml,
    PlainText,
}

impl DocumentKind {
    pub fn sniff(head: &[u8]) -> Self {
        if head.starts_with(&OLE_SIGNATURE) {
            return Self::LegacyWord;
        }
        if head.starts_with(&ZIP_SIGNATURE) {
            return Self::OpenXml;
        }

        let head = head.strip_prefix(&UTF8_BOM[..]).unwrap_or(head);
        let head = &head[..head.len().min(PROBE_LIMIT as usize)];
        let text = String::from_utf8_lossy(head);
        let trimmed = text.trim_start();

        if looks_like_mime(trimmed) {
            Self::Mime
        } else if trimmed.starts_with('<') {
            Self::Html
        } else {
            Self::PlainText
        }
    }

    /// Kinds we can turn into text
    pub fn is_textual(&self) -> bool {
        matches!(self, Self::Mime | Self::Html | Self::PlainText)
    }
}

/// The text opens with a header line and the header block, which ends at
/// the first blank line, declares `MIME-Version`.
fn looks_like_mime(text: &str) -> bool {
    let mut header_block = text.lines().take_while(|line| !line.is_empty()).peekable();

    let starts_with_header = header_block
        .peek()
        .and_then(|line| line.split_once(':'))
        .map_or(false, |(name, _)| {
            !name.is_empty()
                && name
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-')
        });

    starts_with_header && header_block.any(is_mime_version)
}

fn is_mime_version(line: &str) -> bool {
    line.get(..13)
        .map_or(false, |name| name.eq_ignore_ascii_case("mime-version:"))
}

/// Lower-cased extension of `path`, if any
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .filter(|ext| !ext.is_empty())
}

/// The cheap view of a file that capability probes work on.
#[derive(Debug, Clone)]
pub struct Probe {
    file_name: String,
    extension: Option<String>,
    head: Vec<u8>,
}

impl Probe {
    /// Read at most [`PROBE_LIMIT`] bytes of a regular file.
    ///
    /// Directories and unreadable files yield `None`.
    pub fn read(path: &Path) -> Option<Self> {
        let metadata = fs::metadata(path).ok()?;
        if !metadata.is_file() {
            return None;
        }

        let mut head = Vec::new();
        File::open(path)
            .ok()?
            .take(PROBE_LIMIT)
            .read_to_end(&mut head)
            .ok()?;

        Some(Self {
            file_name: path.file_name()?.to_string_lossy().to_lowercase(),
            extension: extension_of(path),
            head,
        })
    }

    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    pub fn kind(&self) -> DocumentKind {
        DocumentKind::sniff(&self.head)
    }

    /// `needle` must be lower case
    pub fn name_contains(&self, needle: &str) -> bool {
        self.file_name.contains(needle)
    }

    /// ASCII case-insensitive search over the leading bytes
    pub fn head_contains(&self, needle: &str) -> bool {
        let needle = needle.as_bytes();
        if needle.is_empty() || needle.len() > self.head.len() {
            return false;
        }
        self.head
            .windows(needle.len())
            .any(|window| window.eq_ignore_ascii_case(needle))
    }
}

/// A resume file reduced to text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub kind: DocumentKind,
    /// Message subject for MIME documents
    pub subject: Option<String>,
    pub text: String,
}

impl Document {
    pub fn load(path: &Path) -> Result<Self, ExtractionError> {
        let bytes = fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ExtractionError> {
        let kind = DocumentKind::sniff(bytes);

        match kind {
            DocumentKind::LegacyWord => Err(ExtractionError::UnsupportedFormat(
                "binary Word 97-2003 document".to_string(),
            )),
            DocumentKind::OpenXml => Err(ExtractionError::UnsupportedFormat(
                "Office Open XML package".to_string(),
            )),
            DocumentKind::Mime => Self::from_mime(bytes),
            DocumentKind::Html => Ok(Self {
                kind,
                subject: None,
                text: html_to_text(&String::from_utf8_lossy(bytes)),
            }),
            DocumentKind::PlainText => Ok(Self {
                kind,
                subject: None,
                text: normalize_lines(&String::from_utf8_lossy(bytes)),
            }),
        }
    }

    fn from_mime(bytes: &[u8]) -> Result<Self, ExtractionError> {
        let message = MessageParser::default()
            .parse(bytes)
            .ok_or_else(|| ExtractionError::Malformed("unreadable MIME message".to_string()))?;

        let subject = message
            .subject()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let text = if let Some(html) = message.body_html(0) {
            html_to_text(&html)
        } else if let Some(text) = message.body_text(0) {
            normalize_lines(&text)
        } else {
            return Err(ExtractionError::Malformed(
                "message has no body".to_string(),
            ));
        };

        Ok(Self {
            kind: DocumentKind::Mime,
            subject,
            text,
        })
    }
}
