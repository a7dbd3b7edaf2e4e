//! Types shared between the extractor implementations and the batch runner.

pub mod extraction;
pub mod resume;

pub use extraction::{ExtractionError, ResumeExtractor};
pub use resume::{Resume, ResumeField};
