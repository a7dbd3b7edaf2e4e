//! Extractors Crate
//!
//! This crate turns resume files exported by recruiting platforms into
//! [`Resume`](shared_types::Resume) records.
//!
//! # Architecture
//!
//! - **Types**: `Resume` and the `ResumeExtractor` trait live in the `shared-types` crate
//! - **Document loading**: `document` sniffs the real format and reduces it to text
//! - **Field layouts**: `field_patterns` holds the regex tables each platform applies
//! - **Platforms**: one extractor per recruiting platform
//! - **Dispatch**: the registry and the two-phase resolver that picks an extractor
//!
//! # Available Extractors
//!
//! - `ZhilianEmailExtractor`: Zhilian application notifications (`.eml`)
//! - `ZhilianExtractor`: Zhilian document exports
//! - `Job51Extractor`: 51job (前程无忧) exports
//! - `LiepinExtractor`: Liepin (猎聘) exports
//! - `LagouExtractor`: Lagou (拉勾) exports
//!
//! # Example
//!
//! ```rust,ignore
//! use extractors::{default_registry, Dispatcher};
//!
//! let dispatcher = Dispatcher::new(default_registry());
//! if let Some(resume) = dispatcher.resolve(path).into_resume() {
//!     println!("{resume}");
//! }
//! ```

pub mod dispatch;
pub mod document;
pub mod field_patterns;
pub mod platforms;

// Re-export commonly used types
pub use dispatch::{AttemptFailure, Dispatcher, ExtractorRegistry, FallbackKind, Phase, Resolution};
pub use platforms::{
    default_registry, Job51Extractor, LagouExtractor, LiepinExtractor, ZhilianEmailExtractor,
    ZhilianExtractor,
};

// Re-export the extractor trait from shared-types for convenience
pub use shared_types::ResumeExtractor;
