use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized candidate record extracted from one source document.
///
/// Every field is optional: `None` means the value could not be found in the
/// document, not that extraction failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resume {
    /// Platform the document came from, e.g. `智联招聘`
    pub source: Option<String>,
    pub name: Option<String>,
    pub sex: Option<String>,
    pub age: Option<u32>,
    pub birthday: Option<String>,
    pub phone: Option<String>,
    pub mail: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub education: Option<String>,
    pub school: Option<String>,
    pub work_duration: Option<String>,
    pub job: Option<String>,
    pub company: Option<String>,
}

/// Addressable fields of a [`Resume`], used by table-driven layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResumeField {
    Name,
    Sex,
    Age,
    Birthday,
    Phone,
    Mail,
    City,
    Address,
    Education,
    School,
    WorkDuration,
    Job,
    Company,
}

impl Resume {
    pub fn from_source(source: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            ..Self::default()
        }
    }

    pub fn has(&self, field: ResumeField) -> bool {
        match field {
            ResumeField::Age => self.age.is_some(),
            other => self.text(other).is_some(),
        }
    }

    /// Text value of `field`; `None` for [`ResumeField::Age`], see [`Resume::age`].
    pub fn text(&self, field: ResumeField) -> Option<&str> {
        let value = match field {
            ResumeField::Name => &self.name,
            ResumeField::Sex => &self.sex,
            ResumeField::Age => return None,
            ResumeField::Birthday => &self.birthday,
            ResumeField::Phone => &self.phone,
            ResumeField::Mail => &self.mail,
            ResumeField::City => &self.city,
            ResumeField::Address => &self.address,
            ResumeField::Education => &self.education,
            ResumeField::School => &self.school,
            ResumeField::WorkDuration => &self.work_duration,
            ResumeField::Job => &self.job,
            ResumeField::Company => &self.company,
        };
        value.as_deref()
    }

    /// Fill `field` unless it already holds a value.
    ///
    /// Returns `true` when the value was stored. Blank values and ages that
    /// don't parse as an integer are ignored.
    pub fn fill(&mut self, field: ResumeField, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() || self.has(field) {
            return false;
        }

        if field == ResumeField::Age {
            return match value.parse::<u32>() {
                Ok(age) => {
                    self.age = Some(age);
                    true
                }
                Err(_) => false,
            };
        }

        match self.text_slot(field) {
            Some(slot) => {
                *slot = Some(value.to_string());
                true
            }
            None => false,
        }
    }

    fn text_slot(&mut self, field: ResumeField) -> Option<&mut Option<String>> {
        let slot = match field {
            ResumeField::Name => &mut self.name,
            ResumeField::Sex => &mut self.sex,
            ResumeField::Age => return None,
            ResumeField::Birthday => &mut self.birthday,
            ResumeField::Phone => &mut self.phone,
            ResumeField::Mail => &mut self.mail,
            ResumeField::City => &mut self.city,
            ResumeField::Address => &mut self.address,
            ResumeField::Education => &mut self.education,
            ResumeField::School => &mut self.school,
            ResumeField::WorkDuration => &mut self.work_duration,
            ResumeField::Job => &mut self.job,
            ResumeField::Company => &mut self.company,
        };
        Some(slot)
    }
}

fn or_blank(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

/// Operator-facing detail view, one labelled line per field.
impl fmt::Display for Resume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let age = self.age.map(|a| a.to_string()).unwrap_or_default();
        writeln!(f, "\t姓名：{}", or_blank(&self.name))?;
        writeln!(f, "\t性别：{}", or_blank(&self.sex))?;
        writeln!(f, "\t年龄：{}", age)?;
        writeln!(f, "\t生日：{}", or_blank(&self.birthday))?;
        writeln!(f, "\t电话：{}", or_blank(&self.phone))?;
        writeln!(f, "\t邮箱：{}", or_blank(&self.mail))?;
        writeln!(f, "\t城市：{}", or_blank(&self.city))?;
        writeln!(f, "\t地址：{}", or_blank(&self.address))?;
        writeln!(f, "\t学历：{}", or_blank(&self.education))?;
        writeln!(f, "\t学校：{}", or_blank(&self.school))?;
        writeln!(f, "\t经验：{}", or_blank(&self.work_duration))?;
        writeln!(f, "\t工作：{}", or_blank(&self.job))?;
        write!(f, "\t公司：{}", or_blank(&self.company))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_keeps_first_value() {
        let mut resume = Resume::from_source("拉勾网");

        assert!(resume.fill(ResumeField::Name, " 张三 "));
        assert!(!resume.fill(ResumeField::Name, "李四"));

        assert_eq!(resume.name.as_deref(), Some("张三"));
        assert_eq!(resume.source.as_deref(), Some("拉勾网"));
    }

    #[test]
    fn test_fill_ignores_blank_and_bad_age() {
        let mut resume = Resume::default();

        assert!(!resume.fill(ResumeField::Phone, "   "));
        assert!(!resume.fill(ResumeField::Age, "二十八"));
        assert!(resume.fill(ResumeField::Age, "28"));

        assert_eq!(resume.phone, None);
        assert_eq!(resume.age, Some(28));
        assert!(resume.has(ResumeField::Age));
    }

    #[test]
    fn test_display_lists_every_field() {
        let mut resume = Resume::from_source("猎聘网");
        resume.fill(ResumeField::Name, "王五");
        resume.fill(ResumeField::Company, "某某科技");

        let rendered = resume.to_string();
        assert_eq!(rendered.lines().count(), 13);
        assert!(rendered.contains("姓名：王五"));
        assert!(rendered.contains("公司：某某科技"));
        assert!(rendered.contains("电话：\n"));
    }
}
