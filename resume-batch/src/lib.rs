//! Batch processing of exported resumes: parse a directory, write a report,
//! then move the parsed files under a canonical name.

pub mod batch;
pub mod config;
pub mod report;
pub mod transfer;

pub use batch::{scan_directory, BatchError, BatchOutcome, BatchRunner, BatchSummary, ResumeMap};
pub use config::{BatchConfig, Cli, ConfigError, DirectoryRole};
pub use report::{report_file_name, CsvReportWriter, ReportError, ReportWriter};
pub use transfer::{canonical_name, FileTransfer, TransferError, TransferSummary};
