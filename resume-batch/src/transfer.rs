use crate::batch::ResumeMap;
use shared_types::Resume;
use std::fs;
use std::path::{Path, PathBuf};

const INVALID_FILE_NAME_CHARS: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Destination name of a parsed resume: `{source}-{name}-{phone}-{job}.{ext}`.
///
/// Missing fields leave an empty segment. Two resumes with the same
/// attributes map to the same name, and the later move overwrites the
/// earlier one.
pub fn canonical_name(file: &Path, resume: &Resume) -> String {
    let stem = [
        resume.source.as_deref(),
        resume.name.as_deref(),
        resume.phone.as_deref(),
        resume.job.as_deref(),
    ]
    .into_iter()
    .map(|segment| sanitize(segment.unwrap_or_default()))
    .collect::<Vec<_>>()
    .join("-");

    match file.extension().map(|ext| ext.to_string_lossy()) {
        Some(ext) if !ext.is_empty() => format!("{stem}.{ext}"),
        _ => stem,
    }
}

fn sanitize(segment: &str) -> String {
    segment
        .chars()
        .map(|c| {
            if INVALID_FILE_NAME_CHARS.contains(&c) || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect()
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TransferSummary {
    pub moved: usize,
    pub failed: usize,
}

/// Moves parsed resumes into the output directory under their canonical name.
#[derive(Debug, Clone)]
pub struct FileTransfer {
    output_dir: PathBuf,
}

impl FileTransfer {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Copy `file` to the output directory, then delete `file`.
    /// A failed copy leaves `file` untouched, and a file already at its
    /// destination is left where it is.
    pub fn move_file(&self, file: &Path, resume: &Resume) -> Result<PathBuf, TransferError> {
        let destination = self.output_dir.join(canonical_name(file, resume));

        if same_file(file, &destination) {
            tracing::debug!(file = %file.display(), "resume already in place");
            return Ok(destination);
        }

        fs::copy(file, &destination).map_err(|source| TransferError::Copy {
            file: file.to_path_buf(),
            destination: destination.clone(),
            source,
        })?;

        fs::remove_file(file).map_err(|source| TransferError::Remove {
            file: file.to_path_buf(),
            source,
        })?;

        Ok(destination)
    }

    /// Move every entry, continuing past failures.
    pub fn transfer_all(&self, resumes: &ResumeMap) -> TransferSummary {
        let mut summary = TransferSummary::default();

        for (file, resume) in resumes.iter() {
            match self.move_file(file, resume) {
                Ok(destination) => {
                    tracing::info!(
                        file = %file.display(),
                        destination = %destination.display(),
                        "resume moved"
                    );
                    summary.moved += 1;
                }
                Err(error) => {
                    tracing::warn!(file = %file.display(), %error, "failed to move resume");
                    summary.failed += 1;
                }
            }
        }

        summary
    }
}

/// Both paths resolve to the same existing file.
fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    #[error("Failed to copy {} to {}: {source}", .file.display(), .destination.display())]
    Copy {
        file: PathBuf,
        destination: PathBuf,
        source: std::io::Error,
    },

    #[error("Copied {} but failed to remove it: {source}", .file.display())]
    Remove {
        file: PathBuf,
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::ResumeField;

    fn resume(name: &str, phone: &str, job: &str) -> Resume {
        let mut resume = Resume::from_source("拉勾网");
        resume.fill(ResumeField::Name, name);
        resume.fill(ResumeField::Phone, phone);
        resume.fill(ResumeField::Job, job);
        resume
    }

    #[test]
    fn test_canonical_name() {
        assert_eq!(
            canonical_name(Path::new("in/a.doc"), &resume("张三", "13800138000", "Java")),
            "拉勾网-张三-13800138000-Java.doc"
        );
        assert_eq!(
            canonical_name(Path::new("in/A.EML"), &Resume::from_source("智联招聘")),
            "智联招聘---.EML"
        );
        assert_eq!(
            canonical_name(Path::new("in/noext"), &resume("张三", "138", "C/C++: 开发")),
            "拉勾网-张三-138-C_C++_ 开发"
        );
    }

    #[test]
    fn test_same_canonical_name_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let inbox = dir.path().join("inbox");
        let output = dir.path().join("output");
        fs::create_dir(&inbox).unwrap();
        fs::create_dir(&output).unwrap();
        let first = inbox.join("a.doc");
        let second = inbox.join("b.doc");
        fs::write(&first, "first").unwrap();
        fs::write(&second, "second").unwrap();

        let mut resumes = ResumeMap::new();
        resumes.insert(first.clone(), resume("张三", "13800138000", "Java"));
        resumes.insert(second.clone(), resume("张三", "13800138000", "Java"));

        let summary = FileTransfer::new(&output).transfer_all(&resumes);

        assert_eq!(summary, TransferSummary { moved: 2, failed: 0 });
        assert!(!first.exists());
        assert!(!second.exists());
        let moved: Vec<_> = fs::read_dir(&output).unwrap().collect();
        assert_eq!(moved.len(), 1);
        assert_eq!(
            fs::read_to_string(output.join("拉勾网-张三-13800138000-Java.doc")).unwrap(),
            "second"
        );
    }

    #[test]
    fn test_failed_copy_keeps_source_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.doc");
        fs::write(&file, "resume").unwrap();
        let transfer = FileTransfer::new(dir.path().join("missing"));

        let err = transfer
            .move_file(&file, &resume("张三", "13800138000", "Java"))
            .unwrap_err();

        assert!(matches!(err, TransferError::Copy { .. }));
        assert!(file.exists());
    }

    #[test]
    fn test_file_already_in_place_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("拉勾网-张三-13800138000-Java.doc");
        fs::write(&file, "resume").unwrap();

        let destination = FileTransfer::new(dir.path())
            .move_file(&file, &resume("张三", "13800138000", "Java"))
            .unwrap();

        assert_eq!(destination, file);
        assert_eq!(fs::read_to_string(&file).unwrap(), "resume");
    }

    #[test]
    fn test_transfer_into_resume_dir() {
        let dir = tempfile::tempdir().unwrap();
        let renamed = dir.path().join("拉勾网-张三-13800138000-Java.doc");
        let other = dir.path().join("b.doc");
        fs::write(&renamed, "first run").unwrap();
        fs::write(&other, "second").unwrap();

        let mut resumes = ResumeMap::new();
        resumes.insert(renamed.clone(), resume("张三", "13800138000", "Java"));
        resumes.insert(other.clone(), resume("李四", "13900139000", "Go"));

        let summary = FileTransfer::new(dir.path()).transfer_all(&resumes);

        assert_eq!(summary, TransferSummary { moved: 2, failed: 0 });
        assert_eq!(fs::read_to_string(&renamed).unwrap(), "first run");
        assert!(!other.exists());
        assert_eq!(
            fs::read_to_string(dir.path().join("拉勾网-李四-13900139000-Go.doc")).unwrap(),
            "second"
        );
    }
}
