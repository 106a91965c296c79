//! Hashtag and mention recognizers.
//!
//! Both share one grammar: a sigil (`#` or `@`) followed by a letter and
//! then any run of letters, digits, `.`, `_` or `-`, starting at a word
//! boundary. The boundary is enforced with a preceding-character check
//! rather than `\b` so that multi-byte characters before the sigil cannot
//! shift the reported span (and because `#`/`@` are not word characters).

use super::{BaseUrls, MatchKind, MatchRecord, boundary_before, join_url};
use regex::Regex;

const DEFAULT_TAGS_BASE: &str = "/tags";
const DEFAULT_USERS_BASE: &str = "/users";

pub(super) fn scan_hashtags(text: &str, base_urls: &BaseUrls, out: &mut Vec<MatchRecord>) {
    let re = regex!(r"#[A-Za-z][A-Za-z0-9._-]*");
    let base = base_urls.hashtags.as_deref().unwrap_or(DEFAULT_TAGS_BASE);
    scan_sigiled(text, re, MatchKind::Hashtag, base, out);
}

pub(super) fn scan_mentions(text: &str, base_urls: &BaseUrls, out: &mut Vec<MatchRecord>) {
    let re = regex!(r"@[A-Za-z][A-Za-z0-9._-]*");
    let base = base_urls.mentions.as_deref().unwrap_or(DEFAULT_USERS_BASE);
    scan_sigiled(text, re, MatchKind::Mention, base, out);
}

fn scan_sigiled(text: &str, re: &Regex, kind: MatchKind, base: &str, out: &mut Vec<MatchRecord>) {
    for m in re.find_iter(text) {
        if !boundary_before(text, m.start()) {
            continue;
        }
        let raw = m.as_str();
        // Everything after the single-byte sigil.
        let value = raw[1..].to_string();
        out.push(MatchRecord {
            kind,
            raw_text: raw.to_string(),
            url: Some(join_url(base, &value)),
            value,
            start: m.start(),
            end: m.end(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hashtags(text: &str) -> Vec<MatchRecord> {
        let mut out = Vec::new();
        scan_hashtags(text, &BaseUrls::default(), &mut out);
        out
    }

    fn mentions(text: &str) -> Vec<MatchRecord> {
        let mut out = Vec::new();
        scan_mentions(text, &BaseUrls::default(), &mut out);
        out
    }

    #[test]
    fn hashtag_value_drops_sigil() {
        let out = hashtags("ping #support please");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].raw_text, "#support");
        assert_eq!(out[0].value, "support");
        assert_eq!(out[0].url.as_deref(), Some("/tags/support"));
        assert_eq!(format!("#{}", out[0].value), out[0].raw_text);
    }

    #[test]
    fn mention_uses_users_base() {
        let out = mentions("thanks @sarah");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].value, "sarah");
        assert_eq!(out[0].url.as_deref(), Some("/users/sarah"));
    }

    #[test]
    fn custom_base_trailing_slash_is_stripped() {
        let base = BaseUrls { hashtags: Some("https://example.com/tags/".into()), ..BaseUrls::default() };
        let mut out = Vec::new();
        scan_hashtags("#rust", &base, &mut out);
        assert_eq!(out[0].url.as_deref(), Some("https://example.com/tags/rust"));
    }

    #[test]
    fn mid_word_sigil_is_not_a_tag() {
        assert!(hashtags("c#notatag").is_empty());
        assert!(mentions("sarah@example.com").is_empty());
    }

    #[test]
    fn tag_must_start_with_a_letter() {
        assert!(hashtags("#123").is_empty());
    }

    #[test]
    fn multibyte_prefix_keeps_span_correct() {
        let text = "😊#crash";
        let out = hashtags(text);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].start, 4);
        assert_eq!(&text[out[0].start..out[0].end], "#crash");
    }

    #[test]
    fn tag_body_allows_dots_underscores_dashes() {
        let out = hashtags("#a.b_c-d ok");
        assert_eq!(out[0].value, "a.b_c-d");
    }
}
