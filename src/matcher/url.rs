//! URL recognizer.
//!
//! Two accepted shapes, folded into one alternation:
//!
//! - `http://`, `https://` or `www.` followed by a host with at least one
//!   dot and a 2+ letter top-level segment, optionally a port and path;
//! - a bare `label.tld[/path]` token (letters/digits/hyphen label, 2+ letter
//!   tld).
//!
//! This is deliberately not an RFC 3986 grammar. The `regex` crate has no
//! look-behind, so leading word boundaries and the "bare domain is really an
//! email local part" case are handled by post-checks on the surrounding
//! characters.

use super::{MatchKind, MatchRecord};

pub(super) fn scan(text: &str, out: &mut Vec<MatchRecord>) {
    let re = regex!(
        r"(?i)(?:(?:https?://|www\.)[-a-z0-9@:%._+~#=]+\.[a-z]{2,}|[a-z0-9][a-z0-9-]*(?:\.[a-z0-9-]+)*\.[a-z]{2,})(?::[0-9]+)?(?:/[^\s]*)?"
    );

    for m in re.find_iter(text) {
        if !leading_edge_ok(text, m.start()) {
            continue;
        }
        // A bare domain directly followed by `@` is the local part of an
        // email address, not a URL.
        let scheme_form = {
            let lower = m.as_str().get(..4).map(str::to_ascii_lowercase);
            matches!(lower.as_deref(), Some("http") | Some("www."))
        };
        if !scheme_form && text[m.end()..].starts_with('@') {
            continue;
        }

        let raw = m.as_str().to_string();
        let url = if raw.to_ascii_lowercase().starts_with("http") {
            raw.clone()
        } else {
            format!("https://{raw}")
        };
        out.push(MatchRecord {
            kind: MatchKind::Url,
            value: raw.clone(),
            raw_text: raw,
            start: m.start(),
            end: m.end(),
            url: Some(url),
        });
    }
}

/// Reject matches that begin in the middle of a word or glued to URL-ish
/// punctuation (`foo.bar.com` must match as a whole, never from `bar`).
fn leading_edge_ok(text: &str, start: usize) -> bool {
    match text[..start].chars().next_back() {
        None => true,
        Some(prev) => !(prev.is_alphanumeric() || matches!(prev, '_' | '@' | '.' | '-' | '/')),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan_all(text: &str) -> Vec<MatchRecord> {
        let mut out = Vec::new();
        scan(text, &mut out);
        out
    }

    #[test]
    fn scheme_url_stops_before_punctuation() {
        let text = "visit https://example.com!";
        let out = scan_all(text);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].raw_text, "https://example.com");
        assert_eq!(out[0].start, 6);
        assert_eq!(out[0].end, 25);
        assert_eq!(out[0].url.as_deref(), Some("https://example.com"));
        assert_eq!(&text[out[0].start..out[0].end], out[0].raw_text);
    }

    #[test]
    fn www_url_gets_https_prefix() {
        let out = scan_all("see www.rust-lang.org/learn today");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].raw_text, "www.rust-lang.org/learn");
        assert_eq!(out[0].url.as_deref(), Some("https://www.rust-lang.org/learn"));
    }

    #[test]
    fn bare_domain_matches_with_prefix() {
        let out = scan_all("see docs.rs for crate docs");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].raw_text, "docs.rs");
        assert_eq!(out[0].url.as_deref(), Some("https://docs.rs"));
    }

    #[test]
    fn url_with_port_and_path() {
        let out = scan_all("http://localhost.dev:8080/a?b=c");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].raw_text, "http://localhost.dev:8080/a?b=c");
    }

    #[test]
    fn email_domains_are_not_urls() {
        assert!(scan_all("mail me at sarah@example.com today").is_empty());
    }

    #[test]
    fn mid_word_scheme_is_rejected() {
        assert!(scan_all("xhttps://foo.com").is_empty());
    }

    #[test]
    fn plain_sentences_do_not_match() {
        assert!(scan_all("no links here. none at all").is_empty());
    }
}
