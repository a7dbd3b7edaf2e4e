//! One pass over the resume directory.
//!
//! Every regular file is dispatched on its own; a file that no extractor can
//! parse is reported and left alone. Once the scan is done the accumulated
//! resumes go to the report and, when enabled, to the transfer step.

use crate::config::BatchConfig;
use crate::report::{report_file_name, ReportWriter};
use crate::transfer::{FileTransfer, TransferSummary};
use chrono::{DateTime, Local};
use extractors::{Dispatcher, Resolution};
use shared_types::Resume;
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Parsed resumes keyed by their source file, in path order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResumeMap(BTreeMap<PathBuf, Resume>);

impl ResumeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: PathBuf, resume: Resume) -> Option<Resume> {
        self.0.insert(path, resume)
    }

    pub fn get(&self, path: &Path) -> Option<&Resume> {
        self.0.get(path)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, PathBuf, Resume> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a ResumeMap {
    type Item = (&'a PathBuf, &'a Resume);
    type IntoIter = btree_map::Iter<'a, PathBuf, Resume>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Regular files directly inside `dir`, sorted. Sub-directories are skipped.
pub fn scan_directory(dir: &Path) -> Result<Vec<PathBuf>, BatchError> {
    let read_dir_error = |source| BatchError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_error)? {
        let path = entry.map_err(read_dir_error)?.path();
        if path.is_dir() {
            tracing::debug!(path = %path.display(), "skipping sub-directory");
            continue;
        }
        files.push(path);
    }

    files.sort();
    Ok(files)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub scanned: usize,
    pub parsed: usize,
    pub unresolved: usize,
    /// `None` when writing the report failed
    pub report: Option<PathBuf>,
    /// `None` when transfer is disabled
    pub transfer: Option<TransferSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    /// No file produced a resume; no report is written and nothing moves
    NothingParsed { scanned: usize },
    Completed(BatchSummary),
}

pub struct BatchRunner<'a> {
    config: &'a BatchConfig,
    dispatcher: &'a Dispatcher,
    report: &'a dyn ReportWriter,
}

impl<'a> BatchRunner<'a> {
    pub fn new(
        config: &'a BatchConfig,
        dispatcher: &'a Dispatcher,
        report: &'a dyn ReportWriter,
    ) -> Self {
        Self {
            config,
            dispatcher,
            report,
        }
    }

    /// Dispatch every file of the resume directory.
    pub fn collect(&self) -> Result<(ResumeMap, usize), BatchError> {
        let files = scan_directory(&self.config.resume_dir)?;
        let mut resumes = ResumeMap::new();

        for path in &files {
            let resolution = self.dispatcher.resolve(path);
            match resolution {
                Resolution::Matched { extractor, resume }
                | Resolution::Recovered {
                    extractor, resume, ..
                } => {
                    tracing::info!(file = %path.display(), extractor, "parsed resume");
                    if self.config.detail {
                        println!("{resume}");
                    }
                    resumes.insert(path.clone(), resume);
                }
                Resolution::Unresolved { failures } => {
                    tracing::warn!(
                        file = %path.display(),
                        attempts = failures.len(),
                        "could not parse resume"
                    );
                }
            }
        }

        Ok((resumes, files.len()))
    }

    /// Parse, report and transfer. `started` names the report.
    pub fn run(&self, started: DateTime<Local>) -> Result<BatchOutcome, BatchError> {
        let (resumes, scanned) = self.collect()?;

        if resumes.is_empty() {
            return Ok(BatchOutcome::NothingParsed { scanned });
        }

        let report_path = self
            .config
            .report_dir
            .join(report_file_name(started, resumes.len()));
        let report = match self.report.write(&resumes, &report_path) {
            Ok(()) => Some(report_path),
            Err(error) => {
                tracing::error!(path = %report_path.display(), %error, "failed to write report");
                None
            }
        };

        let transfer = self
            .config
            .transfer
            .then(|| FileTransfer::new(&self.config.output_dir).transfer_all(&resumes));

        Ok(BatchOutcome::Completed(BatchSummary {
            scanned,
            parsed: resumes.len(),
            unresolved: scanned - resumes.len(),
            report,
            transfer,
        }))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("Failed to read resume directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },
}
