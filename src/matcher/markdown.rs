//! Markdown recognizers.
//!
//! Two very different outputs share this module:
//!
//! - `[label](target)` links are positional entities and land in the
//!   ordered [`MatchRecord`] stream like every other recognizer.
//! - headings, list items and bold/italic emphasis are extraction-only:
//!   they populate a [`MarkdownSummary`] with no span/url annotation.
//!
//! The grammars are line-oriented ASCII approximations; full CommonMark
//! (nesting, escapes, Unicode word breaking) is out of scope.

use super::{BaseUrls, MatchKind, MatchRecord, join_url};

/// Structured markdown extraction result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkdownSummary {
    pub headings: Vec<Heading>,
    pub list_items: Vec<String>,
    pub emphasis: Vec<Emphasis>,
}

/// One `# ...` heading line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Count of leading `#` characters.
    pub level: usize,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmphasisStyle {
    Bold,
    Italic,
}

/// One bold or italic span, inner text only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emphasis {
    pub style: EmphasisStyle,
    pub text: String,
}

pub(super) fn scan_links(text: &str, base_urls: &BaseUrls, out: &mut Vec<MatchRecord>) {
    let re = regex!(r"\[([^\]\n]+)\]\(([^)\n]+)\)");

    for caps in re.captures_iter(text) {
        let m = caps.get(0).unwrap();
        let label = &caps[1];
        let target = &caps[2];

        let url = if target.starts_with("http") {
            target.to_string()
        } else {
            match base_urls.assets.as_deref() {
                // No asset host configured: keep relative targets verbatim.
                None => target.to_string(),
                Some(assets) => join_url(assets, target),
            }
        };

        out.push(MatchRecord {
            kind: MatchKind::MarkdownLink,
            raw_text: m.as_str().to_string(),
            value: label.to_string(),
            start: m.start(),
            end: m.end(),
            url: Some(url),
        });
    }
}

pub(super) fn headings(text: &str) -> Vec<Heading> {
    let re = regex!(r"(?m)^(#+)[ \t]+(.+)$");
    re.captures_iter(text)
        .map(|caps| Heading { level: caps[1].len(), text: caps[2].trim().to_string() })
        .collect()
}

pub(super) fn list_items(text: &str) -> Vec<String> {
    let re = regex!(r"(?m)^[ \t]*(?:[-*+]|[0-9]+\.)[ \t]+(.+)$");
    re.captures_iter(text).map(|caps| caps[1].trim().to_string()).collect()
}

pub(super) fn emphasis(text: &str) -> Vec<Emphasis> {
    // Bold spans are collected first and blanked out (byte-for-byte, offsets
    // preserved) so the single-sigil italic pass can neither re-match their
    // inner text ("**bold**" also contains "*bold*") nor pair a closing `**`
    // with a later lone `*`.
    let bold_re = regex!(r"\*\*([^*\n]+)\*\*|__([^_\n]+)__");
    let italic_re = regex!(r"\*([^*\n]+)\*|_([^_\n]+)_");

    let mut found: Vec<(usize, Emphasis)> = Vec::new();
    let mut blanked = String::with_capacity(text.len());
    let mut copied = 0;

    for caps in bold_re.captures_iter(text) {
        let m = caps.get(0).unwrap();
        let inner = caps.get(1).or_else(|| caps.get(2)).map(|g| g.as_str()).unwrap_or_default();
        found.push((m.start(), Emphasis { style: EmphasisStyle::Bold, text: inner.to_string() }));
        blanked.push_str(&text[copied..m.start()]);
        blanked.extend(std::iter::repeat_n(' ', m.len()));
        copied = m.end();
    }
    blanked.push_str(&text[copied..]);

    for caps in italic_re.captures_iter(&blanked) {
        let m = caps.get(0).unwrap();
        // Intra-word underscores (snake_case) do not emphasize.
        if m.as_str().starts_with('_') && !super::boundary_before(&blanked, m.start()) {
            continue;
        }
        let inner = caps.get(1).or_else(|| caps.get(2)).map(|g| g.as_str()).unwrap_or_default();
        found.push((m.start(), Emphasis { style: EmphasisStyle::Italic, text: inner.to_string() }));
    }

    found.sort_by_key(|&(start, _)| start);
    found.into_iter().map(|(_, e)| e).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links(text: &str, base_urls: &BaseUrls) -> Vec<MatchRecord> {
        let mut out = Vec::new();
        scan_links(text, base_urls, &mut out);
        out
    }

    #[test]
    fn absolute_link_target_is_verbatim() {
        let out = links("read the [Guide](https://example.com/guide)", &BaseUrls::default());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].value, "Guide");
        assert_eq!(out[0].url.as_deref(), Some("https://example.com/guide"));
        assert_eq!(out[0].raw_text, "[Guide](https://example.com/guide)");
    }

    #[test]
    fn relative_target_joins_assets_base() {
        let base = BaseUrls { assets: Some("https://cdn.example.com/".into()), ..BaseUrls::default() };
        let out = links("[Logo](/img/logo.png)", &base);
        assert_eq!(out[0].url.as_deref(), Some("https://cdn.example.com/img/logo.png"));
    }

    #[test]
    fn relative_target_without_assets_base_is_kept() {
        let out = links("[Logo](/img/logo.png)", &BaseUrls::default());
        assert_eq!(out[0].url.as_deref(), Some("/img/logo.png"));
    }

    #[test]
    fn heading_levels_are_hash_counts() {
        let out = headings("# Title\nbody\n### Sub  \n####Nope");
        assert_eq!(out, vec![
            Heading { level: 1, text: "Title".into() },
            Heading { level: 3, text: "Sub".into() },
        ]);
    }

    #[test]
    fn bullet_and_numbered_items() {
        let out = list_items("- first\n  * second\n2. third\nplain");
        assert_eq!(out, vec!["first".to_string(), "second".into(), "third".into()]);
    }

    #[test]
    fn bold_and_italic_inner_text() {
        let out = emphasis("**bold** then *ital* and _under_");
        assert_eq!(out, vec![
            Emphasis { style: EmphasisStyle::Bold, text: "bold".into() },
            Emphasis { style: EmphasisStyle::Italic, text: "ital".into() },
            Emphasis { style: EmphasisStyle::Italic, text: "under".into() },
        ]);
    }

    #[test]
    fn snake_case_is_not_italic() {
        assert!(emphasis("a snake_case_name here").is_empty());
    }
}
