use regex::{Captures, Regex};
use std::sync::LazyLock;

static COMMENTS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());

static SCRIPTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b.*?</script\s*>|<style\b.*?</style\s*>").unwrap()
});

static BLOCK_TAGS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</?(?:br|p|div|tr|li|ul|ol|h[1-6]|title|table|tbody|thead|section)\b[^>]*>")
        .unwrap()
});

static CELL_TAGS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</?(?:td|th)\b[^>]*>").unwrap());

static ANY_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").unwrap());

static ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z]{2,8});").unwrap());

/// Reduce an HTML document to plain text lines.
///
/// Block-level tags become line breaks, table cells become spaces and every
/// other tag is dropped. Entities are decoded after tags are gone so an
/// encoded `&lt;` never turns back into markup.
pub fn html_to_text(html: &str) -> String {
    let text = COMMENTS.replace_all(html, "");
    let text = SCRIPTS.replace_all(&text, "");
    let text = BLOCK_TAGS.replace_all(&text, "\n");
    let text = CELL_TAGS.replace_all(&text, " ");
    let text = ANY_TAG.replace_all(&text, "");
    let text = decode_entities(&text);

    normalize_lines(&text)
}

/// Collapse runs of whitespace inside each line and drop blank lines.
pub fn normalize_lines(text: &str) -> String {
    text.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn decode_entities(text: &str) -> String {
    ENTITY
        .replace_all(text, |caps: &Captures| {
            let entity = &caps[1];
            decode_entity(entity).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

fn decode_entity(entity: &str) -> Option<String> {
    if let Some(hex) = entity
        .strip_prefix("#x")
        .or_else(|| entity.strip_prefix("#X"))
    {
        return u32::from_str_radix(hex, 16)
            .ok()
            .and_then(char::from_u32)
            .map(String::from);
    }

    if let Some(dec) = entity.strip_prefix('#') {
        return dec.parse::<u32>().ok().and_then(char::from_u32).map(String::from);
    }

    let decoded = match entity {
        "nbsp" => " ",
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "quot" => "\"",
        "apos" => "'",
        "middot" => "·",
        "ldquo" => "“",
        "rdquo" => "”",
        _ => return None,
    };
    Some(decoded.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_to_text_keeps_structure() {
        let html = r#"<html><head><title>张三的简历</title>
<style>td { color: red; }</style></head>
<body><!-- exported --><div>姓名：张三</div>
<table><tr><td>手机：</td><td>13800138000</td></tr>
<tr><td>邮箱：</td><td>zs@example.com</td></tr></table>
<script>var x = "<b>";</script>
<p>A &amp; B&nbsp;&nbsp;&#20013;&#x6587; &unknown;</p></body></html>"#;

        let text = html_to_text(html);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines,
            vec![
                "张三的简历",
                "姓名：张三",
                "手机： 13800138000",
                "邮箱： zs@example.com",
                "A & B 中文 &unknown;",
            ]
        );
    }

    #[test]
    fn test_decoded_markup_stays_text() {
        assert_eq!(html_to_text("<p>&lt;b&gt;bold&lt;/b&gt;</p>"), "<b>bold</b>");
    }

    #[test]
    fn test_normalize_lines() {
        assert_eq!(normalize_lines("  a   b \n\n\u{3000}\n c\t d "), "a b\nc d");
    }
}
