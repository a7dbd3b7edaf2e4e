use super::FieldPattern;
use shared_types::ResumeField;

/// Labelled fields shared by every platform export, most specific first.
pub fn common_patterns() -> Vec<FieldPattern> {
    vec![
        FieldPattern::labelled(ResumeField::Name, r"姓[ \t]*名|Name"),
        FieldPattern::new(ResumeField::Sex, r"性[ \t]*别[ \t]*[:：][ \t]*(男|女)", 1),
        FieldPattern::new(ResumeField::Age, r"年[ \t]*龄[ \t]*[:：][ \t]*(\d{1,2})", 1),
        FieldPattern::new(ResumeField::Age, r"(\d{1,2})[ \t]*岁", 1),
        FieldPattern::new(
            ResumeField::Birthday,
            r"(?:出生日期|出生年月|生[ \t]*日)[ \t]*[:：][ \t]*(\d{4}[ \t]*[年./-][ \t]*\d{1,2}(?:[ \t]*[月./-][ \t]*\d{1,2}[ \t]*日?)?)",
            1,
        ),
        FieldPattern::new(
            ResumeField::Phone,
            r"(?i)(?:手机号码|手[ \t]*机|联系电话|电[ \t]*话|Mobile|Tel)[ \t]*[:：][ \t]*(\+?\d[\d -]{5,18}\d)",
            1,
        ),
        FieldPattern::new(ResumeField::Phone, r"(?:^|\D)(1[3-9]\d{9})(?:\D|$)", 1),
        FieldPattern::new(
            ResumeField::Mail,
            r"(?i)(?:电子邮件|电子邮箱|邮[ \t]*箱|E-?mail)[ \t]*[:：][ \t]*([A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,})",
            1,
        ),
        FieldPattern::labelled(
            ResumeField::City,
            r"目前所在地|现居住地|居住地|所在地|所在城市|城[ \t]*市",
        ),
        FieldPattern::labelled(
            ResumeField::Address,
            r"通讯地址|联系地址|家庭地址|地[ \t]*址",
        ),
        FieldPattern::labelled(ResumeField::Education, r"最高学历|教育程度|学[ \t]*历"),
        FieldPattern::labelled(ResumeField::School, r"毕业院校|毕业学校|学[ \t]*校"),
        FieldPattern::labelled(ResumeField::WorkDuration, r"工作年限|工作经验"),
        FieldPattern::new(
            ResumeField::WorkDuration,
            r"(\d{1,2}[ \t]*年(?:以上)?)[ \t]*工作经验",
            1,
        ),
        FieldPattern::new(ResumeField::WorkDuration, r"(应届毕业生|应届生)", 1),
        FieldPattern::labelled(
            ResumeField::Job,
            r"应聘职位|投递职位|期望职位|目标职位|求职意向|目前职位|职[ \t]*位",
        ),
        FieldPattern::labelled(
            ResumeField::Company,
            r"目前公司|当前公司|最近公司|所在公司|公司名称|公[ \t]*司",
        ),
        FieldPattern::new(
            ResumeField::Education,
            r"(博士后|博士|硕士|EMBA|MBA|本科|大专|中专|中技|高中)",
            1,
        ),
        FieldPattern::new(ResumeField::Sex, r"(?m)(?:^|[ \t|｜/，,])(男|女)(?:$|[ \t|｜/，,])", 1),
    ]
}

#[cfg(test)]
mod tests {
    use crate::field_patterns::FieldLayout;
    use shared_types::Resume;

    const LABELLED: &str = "姓名：张三\n\
性别：男\n\
年龄：28\n\
出生日期：1996年3月12日\n\
手机号码：138 0013 8000\n\
电子邮件：zhangsan@example.com\n\
现居住地：北京\n\
通讯地址：北京市海淀区中关村大街1号\n\
最高学历：本科\n\
毕业院校：北京大学\n\
工作年限：5年\n\
应聘职位：Java开发工程师\n\
目前公司：某某科技有限公司";

    #[test]
    fn test_common_labelled_fields() {
        let layout = FieldLayout::with_common(Vec::new());
        let mut resume = Resume::default();

        let filled = layout.apply(LABELLED, &mut resume);

        assert_eq!(filled, 13);
        assert_eq!(resume.name.as_deref(), Some("张三"));
        assert_eq!(resume.sex.as_deref(), Some("男"));
        assert_eq!(resume.age, Some(28));
        assert_eq!(resume.birthday.as_deref(), Some("1996年3月12日"));
        assert_eq!(resume.phone.as_deref(), Some("138 0013 8000"));
        assert_eq!(resume.mail.as_deref(), Some("zhangsan@example.com"));
        assert_eq!(resume.city.as_deref(), Some("北京"));
        assert_eq!(resume.address.as_deref(), Some("北京市海淀区中关村大街1号"));
        assert_eq!(resume.education.as_deref(), Some("本科"));
        assert_eq!(resume.school.as_deref(), Some("北京大学"));
        assert_eq!(resume.work_duration.as_deref(), Some("5年"));
        assert_eq!(resume.job.as_deref(), Some("Java开发工程师"));
        assert_eq!(resume.company.as_deref(), Some("某某科技有限公司"));
    }

    #[test]
    fn test_unlabelled_fallbacks() {
        let layout = FieldLayout::with_common(Vec::new());
        let mut resume = Resume::default();

        layout.apply("李四\n女 | 26岁 | 硕士 | 3年工作经验\n联系我 13912345678", &mut resume);

        assert_eq!(resume.name, None);
        assert_eq!(resume.sex.as_deref(), Some("女"));
        assert_eq!(resume.age, Some(26));
        assert_eq!(resume.education.as_deref(), Some("硕士"));
        assert_eq!(resume.work_duration.as_deref(), Some("3年"));
        assert_eq!(resume.phone.as_deref(), Some("13912345678"));
    }
}
