//! Link detection in message text.

use regex::Regex;
use std::sync::OnceLock;

/// Finds a URL in free-form message text.
pub trait UrlClassifier: Send + Sync {
    /// First URL in `text`, if any.
    fn extract_url(&self, text: &str) -> Option<String>;
}

/// Matches the first `http://` or `https://` URL.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexUrlClassifier;

fn url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"https?://[^\s<>"']+"#).expect("valid url regex"))
}

impl UrlClassifier for RegexUrlClassifier {
    fn extract_url(&self, text: &str) -> Option<String> {
        url_regex().find(text).map(|m| {
            m.as_str()
                .trim_end_matches(|c: char| matches!(c, '.' | ',' | ')' | ']' | '!' | '?' | '>'))
                .to_string()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_first_url() {
        let c = RegexUrlClassifier;
        assert_eq!(
            c.extract_url("see https://a.example/x and http://b.example").as_deref(),
            Some("https://a.example/x")
        );
    }

    #[test]
    fn test_strips_trailing_punctuation() {
        let c = RegexUrlClassifier;
        assert_eq!(
            c.extract_url("read this (https://example.com/post).").as_deref(),
            Some("https://example.com/post")
        );
    }

    #[test]
    fn test_no_url() {
        assert_eq!(RegexUrlClassifier.extract_url("hello world"), None);
        assert_eq!(RegexUrlClassifier.extract_url("ftp://example.com"), None);
    }
}
