//! Minimal HTML text extraction.

use regex::Regex;
use std::sync::OnceLock;

fn regex(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("valid html regex"))
}

fn script_or_style() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    regex(&RE, r"(?is)<script\b.*?</script\s*>|<style\b.*?</style\s*>|<!--.*?-->")
}

fn paragraph() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    regex(&RE, r"(?is)<p\b[^>]*>(.*?)</p\s*>")
}

fn any_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    regex(&RE, r"(?s)<[^>]+>")
}

fn numeric_entity() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    regex(&RE, r"&#(x[0-9a-fA-F]+|[0-9]+);")
}

/// Decodes the named entities pages commonly use plus numeric (`&#39;`, `&#x27;`) ones.
pub fn decode_entities(text: &str) -> String {
    let numeric = numeric_entity().replace_all(text, |caps: &regex::Captures| {
        let raw = &caps[1];
        let code = match raw.strip_prefix('x') {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => raw.parse::<u32>().ok(),
        };
        code.and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_else(|| caps[0].to_string())
    });

    numeric
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

/// Text of every `<p>` element, with inner tags removed, entities decoded and whitespace
/// collapsed. Empty paragraphs are dropped.
pub fn extract_paragraphs(html: &str) -> Vec<String> {
    let cleaned = script_or_style().replace_all(html, " ");
    paragraph()
        .captures_iter(&cleaned)
        .filter_map(|caps| {
            let inner = any_tag().replace_all(&caps[1], " ");
            let text = decode_entities(&inner)
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ");
            (!text.is_empty()).then_some(text)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_entities() {
        assert_eq!(
            decode_entities("Tom &amp; Jerry&#39;s &lt;b&gt; &#x4F60;"),
            "Tom & Jerry's <b> 你"
        );
    }

    #[test]
    fn test_amp_decoded_last() {
        assert_eq!(decode_entities("&amp;lt;"), "&lt;");
    }

    #[test]
    fn test_extract_paragraphs_skips_scripts_and_tags() {
        let html = r#"
            <html><head><style>p { color: red }</style></head>
            <body>
              <script>document.write("<p>injected</p>")</script>
              <p class="lead">Hello <b>world</b></p>
              <div>not a paragraph</div>
              <P>Second&nbsp;one</P>
              <p>   </p>
            </body></html>"#;
        assert_eq!(extract_paragraphs(html), vec!["Hello world", "Second one"]);
    }
}
