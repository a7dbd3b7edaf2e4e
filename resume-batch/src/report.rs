use crate::batch::ResumeMap;
use chrono::{DateTime, Local};
use serde::Serialize;
use shared_types::Resume;
use std::fs::File;
use std::io::Write;
use std::path::Path;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Renders the accumulated resumes into a single report file.
pub trait ReportWriter {
    fn write(&self, resumes: &ResumeMap, path: &Path) -> Result<(), ReportError>;
}

/// `{run start} {count}份简历.csv`
pub fn report_file_name(started: DateTime<Local>, count: usize) -> String {
    format!(
        "{} {}份简历.csv",
        started.format("%Y年%m月%d日%H点%M分%S秒"),
        count
    )
}

#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    #[serde(rename = "文件")]
    file: String,
    #[serde(rename = "来源")]
    source: Option<&'a str>,
    #[serde(rename = "姓名")]
    name: Option<&'a str>,
    #[serde(rename = "性别")]
    sex: Option<&'a str>,
    #[serde(rename = "年龄")]
    age: Option<u32>,
    #[serde(rename = "生日")]
    birthday: Option<&'a str>,
    #[serde(rename = "电话")]
    phone: Option<&'a str>,
    #[serde(rename = "邮箱")]
    mail: Option<&'a str>,
    #[serde(rename = "城市")]
    city: Option<&'a str>,
    #[serde(rename = "地址")]
    address: Option<&'a str>,
    #[serde(rename = "学历")]
    education: Option<&'a str>,
    #[serde(rename = "学校")]
    school: Option<&'a str>,
    #[serde(rename = "工作经验")]
    work_duration: Option<&'a str>,
    #[serde(rename = "职位")]
    job: Option<&'a str>,
    #[serde(rename = "公司")]
    company: Option<&'a str>,
}

impl<'a> ReportRow<'a> {
    fn new(path: &Path, resume: &'a Resume) -> Self {
        Self {
            file: path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
            source: resume.source.as_deref(),
            name: resume.name.as_deref(),
            sex: resume.sex.as_deref(),
            age: resume.age,
            birthday: resume.birthday.as_deref(),
            phone: resume.phone.as_deref(),
            mail: resume.mail.as_deref(),
            city: resume.city.as_deref(),
            address: resume.address.as_deref(),
            education: resume.education.as_deref(),
            school: resume.school.as_deref(),
            work_duration: resume.work_duration.as_deref(),
            job: resume.job.as_deref(),
            company: resume.company.as_deref(),
        }
    }
}

/// CSV report with a byte-order mark so spreadsheet tools pick UTF-8.
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvReportWriter;

impl ReportWriter for CsvReportWriter {
    fn write(&self, resumes: &ResumeMap, path: &Path) -> Result<(), ReportError> {
        let mut file = File::create(path)?;
        file.write_all(UTF8_BOM)?;

        let mut writer = csv::Writer::from_writer(file);
        for (source_path, resume) in resumes.iter() {
            writer.serialize(ReportRow::new(source_path, resume))?;
        }
        writer.flush()?;

        tracing::info!(path = %path.display(), rows = resumes.len(), "report written");
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use shared_types::ResumeField;
    use std::fs;
    use std::path::PathBuf;

    fn resume(source: &str, name: &str, phone: &str) -> Resume {
        let mut resume = Resume::from_source(source);
        resume.fill(ResumeField::Name, name);
        resume.fill(ResumeField::Phone, phone);
        resume
    }

    #[test]
    fn test_report_file_name() {
        let started = Local.with_ymd_and_hms(2024, 3, 5, 9, 7, 1).unwrap();

        assert_eq!(
            report_file_name(started, 12),
            "2024年03月05日09点07分01秒 12份简历.csv"
        );
    }

    #[test]
    fn test_csv_rows_follow_path_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut resumes = ResumeMap::new();
        let mut full = resume("拉勾网", "张三", "13800138000");
        full.fill(ResumeField::Age, "28");
        full.fill(ResumeField::Job, "Java开发, 后端");
        resumes.insert(PathBuf::from("inbox/b.doc"), full);
        resumes.insert(PathBuf::from("inbox/a.eml"), resume("智联招聘", "李四", "13912345678"));
        let path = dir.path().join("report.csv");

        CsvReportWriter.write(&resumes, &path).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(UTF8_BOM));
        let text = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "文件,来源,姓名,性别,年龄,生日,电话,邮箱,城市,地址,学历,学校,工作经验,职位,公司",
                "a.eml,智联招聘,李四,,,,13912345678,,,,,,,,",
                "b.doc,拉勾网,张三,,28,,13800138000,,,,,,,\"Java开发, 后端\",",
            ]
        );
    }

    #[test]
    fn test_unwritable_location_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut resumes = ResumeMap::new();
        resumes.insert(PathBuf::from("a.doc"), resume("拉勾网", "张三", "13800138000"));

        let err = CsvReportWriter
            .write(&resumes, &dir.path().join("missing").join("report.csv"))
            .unwrap_err();

        assert!(matches!(err, ReportError::Io(_)));
    }
}
