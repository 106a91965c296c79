//! Entity matching engine.
//!
//! This module is the public entry point for link/entity extraction. The
//! recognizers live in focused submodules under `src/matcher/` while the
//! public paths stay stable (for example `crate::matcher::Matcher`).
//!
//! ## How the parts work together
//!
//! Extracting entities from an input string is a fixed pipeline:
//!
//! ```text
//! MatcherConfig ── resolve ──> RecognizerSet        (config.rs)
//!                                   │
//! input ───────────────────────────┼─ per-recognizer scans, fixed order:
//!                                   │    url      (url.rs)
//!                                   │    hashtag  (social.rs)
//!                                   │    mention  (social.rs)
//!                                   │    email    (email.rs)
//!                                   │    phone    (phone.rs)
//!                                   │    md link  (markdown.rs)
//!                                   v
//!                     stable sort by start offset
//!                                   │
//!                                   v
//!                          Vec<MatchRecord>
//! ```
//!
//! Each recognizer scans the full input independently and appends zero or
//! more [`MatchRecord`]s. Recognizers never error and never see each other's
//! output; overlapping matches from different recognizers are all kept (a
//! bare domain inside a markdown link matches both the URL and the
//! markdown-link recognizer, deliberately). The final sort is stable, so
//! records sharing a start offset keep the fixed checking order above.
//!
//! Markdown headings, list items and emphasis carry no span/url annotation;
//! they are extracted separately by [`Matcher::parse_markdown`] into a
//! [`MarkdownSummary`].
//!
//! ## Grammars
//!
//! All recognizers except phone are driven by lazily compiled regexes (see
//! the `regex!` macro) plus hand-written boundary checks where the `regex`
//! crate's lack of look-behind would otherwise bite. The phone grammar is a
//! bounded hand-written scanner (`phone.rs`): it needs its digit groups for
//! value formatting anyway, and the scanner guarantees each rejected
//! candidate costs O(1).
//!
//! ## Debugging
//!
//! Set `LINKMASK_DEBUG=1` to print per-recognizer match counts.

#[path = "matcher/config.rs"]
mod config;
#[path = "matcher/email.rs"]
mod email;
#[path = "matcher/markdown.rs"]
mod markdown;
#[path = "matcher/phone.rs"]
mod phone;
#[path = "matcher/social.rs"]
mod social;
#[path = "matcher/url.rs"]
mod url;


pub use config::{BaseUrls, MatcherConfig, RecognizerSet};
pub use markdown::{Emphasis, EmphasisStyle, Heading, MarkdownSummary};

/// Kind of entity a [`MatchRecord`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchKind {
    Url,
    Hashtag,
    Mention,
    Email,
    MarkdownLink,
    Phone,
}

/// One located, typed, annotated occurrence of a recognized entity.
///
/// `start`/`end` are byte offsets into the original input such that
/// `raw_text == &text[start..end]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub kind: MatchKind,
    /// Slice of the original input that matched.
    pub raw_text: String,
    /// Semantically extracted payload: tag without `#`, username without `@`,
    /// formatted phone number, link label, raw URL/email.
    pub value: String,
    /// Start byte index of the match.
    pub start: usize,
    /// End byte index of the match (exclusive).
    pub end: usize,
    /// Navigation target derived from the match, when one exists.
    pub url: Option<String>,
}

/// Entity matcher over a fixed recognizer set.
///
/// Construction resolves the boolean [`MatcherConfig`] into a
/// [`RecognizerSet`] once; instances are immutable and cheap to reuse across
/// calls and threads.
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    set: RecognizerSet,
}

impl Matcher {
    pub fn new(config: &MatcherConfig) -> Self {
        Matcher { set: config.resolve() }
    }

    /// Scan `text` with every enabled recognizer and return all matches
    /// sorted by ascending start offset.
    ///
    /// Ties are stable: records starting at the same offset keep the fixed
    /// checking order (url, hashtag, mention, email, phone, markdown link).
    /// Recognizers never fail; text with no recognizable entities simply
    /// yields an empty vector.
    pub fn find_elements(&self, text: &str, base_urls: &BaseUrls) -> Vec<MatchRecord> {
        let debug = std::env::var_os("LINKMASK_DEBUG").is_some();
        let mut matches = Vec::new();

        let checkpoint = |name: &str, matches: &Vec<MatchRecord>, before: usize| {
            if debug {
                eprintln!("[recognizer] {name}: {} match(es)", matches.len() - before);
            }
        };

        if self.set.contains(RecognizerSet::URL) {
            let before = matches.len();
            url::scan(text, &mut matches);
            checkpoint("url", &matches, before);
        }
        if self.set.contains(RecognizerSet::HASHTAG) {
            let before = matches.len();
            social::scan_hashtags(text, base_urls, &mut matches);
            checkpoint("hashtag", &matches, before);
        }
        if self.set.contains(RecognizerSet::MENTION) {
            let before = matches.len();
            social::scan_mentions(text, base_urls, &mut matches);
            checkpoint("mention", &matches, before);
        }
        if self.set.contains(RecognizerSet::EMAIL) {
            let before = matches.len();
            email::scan(text, &mut matches);
            checkpoint("email", &matches, before);
        }
        if self.set.contains(RecognizerSet::PHONE) {
            let before = matches.len();
            phone::scan(text, &mut matches);
            checkpoint("phone", &matches, before);
        }
        if self.set.contains(RecognizerSet::MARKDOWN_LINK) {
            let before = matches.len();
            markdown::scan_links(text, base_urls, &mut matches);
            checkpoint("markdown_link", &matches, before);
        }

        // Stable sort keeps the recognizer emission order on equal offsets.
        matches.sort_by_key(|m| m.start);
        matches
    }

    /// Extract markdown structure (headings, list items, emphasis) from
    /// `text`. Sections whose recognizer flag is disabled come back empty.
    pub fn parse_markdown(&self, text: &str) -> MarkdownSummary {
        MarkdownSummary {
            headings: if self.set.contains(RecognizerSet::MARKDOWN_HEADING) {
                markdown::headings(text)
            } else {
                Vec::new()
            },
            list_items: if self.set.contains(RecognizerSet::MARKDOWN_LIST) {
                markdown::list_items(text)
            } else {
                Vec::new()
            },
            emphasis: if self.set.contains(RecognizerSet::MARKDOWN_EMPHASIS) {
                markdown::emphasis(text)
            } else {
                Vec::new()
            },
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Matcher::new(&MatcherConfig::default())
    }
}

/// True when the character before byte offset `start` permits a match to
/// begin there: offset zero, or a preceding character that is not part of a
/// word. Shared by the recognizers that emulate a leading word boundary.
pub(crate) fn boundary_before(text: &str, start: usize) -> bool {
    match text[..start].chars().next_back() {
        None => true,
        Some(prev) => !(prev.is_alphanumeric() || prev == '_'),
    }
}

/// Join a base URL and a path segment with exactly one `/` between them.
pub(crate) fn join_url(base: &str, tail: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), tail.trim_start_matches('/'))
}
