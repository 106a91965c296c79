use std::time::{Duration, Instant};

use once_cell::sync::Lazy;

use crate::mask::{self, MaskEngine, MaskError};
use crate::matcher::{BaseUrls, MarkdownSummary, MatchKind, MatchRecord, Matcher, MatcherConfig};

static DEFAULT_MASK: Lazy<MaskEngine> = Lazy::new(MaskEngine::default);

/// Result from [`parse`] and [`parse_with`].
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// The parsed input text.
    pub text: String,
    /// Position-ordered entity matches.
    pub matches: Vec<MatchRecord>,
    /// Markdown structure (headings, list items, emphasis).
    pub markdown: MarkdownSummary,
    /// Total elapsed scan time.
    pub elapsed: Duration,
}

impl ParseResult {
    /// Project the `value` field of every match of `kind`, in order.
    pub fn values_of(&self, kind: MatchKind) -> Vec<&str> {
        self.matches.iter().filter(|m| m.kind == kind).map(|m| m.value.as_str()).collect()
    }

    pub fn urls(&self) -> Vec<&str> {
        self.values_of(MatchKind::Url)
    }

    pub fn hashtags(&self) -> Vec<&str> {
        self.values_of(MatchKind::Hashtag)
    }

    pub fn mentions(&self) -> Vec<&str> {
        self.values_of(MatchKind::Mention)
    }

    pub fn emails(&self) -> Vec<&str> {
        self.values_of(MatchKind::Email)
    }

    pub fn phone_numbers(&self) -> Vec<&str> {
        self.values_of(MatchKind::Phone)
    }
}

/// Parse `text` with every recognizer enabled and default base URLs.
///
/// # Example
/// ```
/// let out = linkmask::parse("ping @sarah about #rust");
/// assert_eq!(out.mentions(), vec!["sarah"]);
/// assert_eq!(out.hashtags(), vec!["rust"]);
/// ```
pub fn parse(text: &str) -> ParseResult {
    parse_with(text, &MatcherConfig::default(), &BaseUrls::default())
}

/// Parse `text` with the provided recognizer configuration and base URLs.
pub fn parse_with(text: &str, config: &MatcherConfig, base_urls: &BaseUrls) -> ParseResult {
    let start = Instant::now();
    let matcher = Matcher::new(config);
    let matches = matcher.find_elements(text, base_urls);
    let markdown = matcher.parse_markdown(text);

    ParseResult { text: text.to_string(), matches, markdown, elapsed: start.elapsed() }
}

/// Scan `text` for entity matches only (no markdown extraction).
pub fn find_links(text: &str) -> Vec<MatchRecord> {
    find_links_with(text, &MatcherConfig::default(), &BaseUrls::default())
}

pub fn find_links_with(text: &str, config: &MatcherConfig, base_urls: &BaseUrls) -> Vec<MatchRecord> {
    Matcher::new(config).find_elements(text, base_urls)
}

/// Reformat a raw phone number through the `phone` preset.
pub fn format_phone_number(value: &str) -> Result<String, MaskError> {
    DEFAULT_MASK.apply(value, "phone")
}

/// Reformat a raw `MMDDYYYY` digit string through the `date` preset.
pub fn format_date(value: &str) -> Result<String, MaskError> {
    DEFAULT_MASK.apply(value, "date")
}

/// Format a free-form amount as `$1,234.50`-style currency.
///
/// This is the numeric grouping routine, not the `currency` mask preset:
/// the template walk cannot insert grouping commas, so amounts that are not
/// already fully padded go through here.
pub fn format_currency(value: &str) -> String {
    mask::currency::format(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_scenario_yields_four_ordered_annotated_matches() {
        let text = "Call 1234567890 or visit https://example.com! #support @sarah";
        let out = parse(text);

        assert_eq!(out.text, text);
        assert_eq!(out.matches.len(), 4);

        let phone = &out.matches[0];
        assert_eq!(phone.kind, MatchKind::Phone);
        assert_eq!(phone.raw_text, "1234567890");
        assert_eq!(phone.value, "(123) 456-7890");
        assert_eq!(phone.url.as_deref(), Some("tel:1234567890"));

        let url = &out.matches[1];
        assert_eq!(url.kind, MatchKind::Url);
        assert_eq!(url.url.as_deref(), Some("https://example.com"));

        let hashtag = &out.matches[2];
        assert_eq!(hashtag.kind, MatchKind::Hashtag);
        assert_eq!(hashtag.url.as_deref(), Some("/tags/support"));

        let mention = &out.matches[3];
        assert_eq!(mention.kind, MatchKind::Mention);
        assert_eq!(mention.url.as_deref(), Some("/users/sarah"));

        assert!(out.matches.windows(2).all(|w| w[0].start <= w[1].start));
    }

    #[test]
    fn projection_helpers_pick_one_field() {
        let out = parse("see docs.rs, mail sarah@example.com, tag #rust");
        assert_eq!(out.urls(), vec!["docs.rs"]);
        assert_eq!(out.emails(), vec!["sarah@example.com"]);
        assert_eq!(out.hashtags(), vec!["rust"]);
        assert!(out.mentions().is_empty());
        assert!(out.phone_numbers().is_empty());
    }

    #[test]
    fn markdown_summary_rides_along() {
        let out = parse("# Notes\n- call [support](https://example.com)\n*soon*");
        assert_eq!(out.markdown.headings.len(), 1);
        assert_eq!(out.markdown.list_items.len(), 1);
        assert_eq!(out.markdown.emphasis.len(), 1);
        assert_eq!(out.values_of(MatchKind::MarkdownLink), vec!["support"]);
    }

    #[test]
    fn convenience_formatters_use_the_presets() {
        assert_eq!(format_phone_number("1234567890").unwrap(), "(123) 456-7890");
        assert_eq!(format_date("12252023").unwrap(), "12/25/2023");
        assert_eq!(format_currency("1234.5"), "$1,234.50");
    }
}
