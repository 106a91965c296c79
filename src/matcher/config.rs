//! Recognizer configuration.
//!
//! The public surface is a plain struct of booleans ([`MatcherConfig`]); it
//! is resolved once, at [`Matcher`](super::Matcher) construction, into a
//! [`RecognizerSet`] bitflags value so the per-call checks stay cheap.

bitflags::bitflags! {
    /// Resolved set of enabled recognizers.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RecognizerSet: u16 {
        const URL               = 1 << 0;
        const HASHTAG           = 1 << 1;
        const MENTION           = 1 << 2;
        const EMAIL             = 1 << 3;
        const PHONE             = 1 << 4;
        const MARKDOWN_LINK     = 1 << 5;
        const MARKDOWN_HEADING  = 1 << 6;
        const MARKDOWN_LIST     = 1 << 7;
        const MARKDOWN_EMPHASIS = 1 << 8;
    }
}

/// Per-recognizer enable flags.
///
/// `all = true` forces every recognizer on regardless of the individual
/// flags. The default configuration enables everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatcherConfig {
    pub all: bool,
    pub urls: bool,
    pub hashtags: bool,
    pub mentions: bool,
    pub emails: bool,
    pub phone_numbers: bool,
    pub markdown_links: bool,
    pub markdown_headings: bool,
    pub markdown_lists: bool,
    pub markdown_emphasis: bool,
}

impl MatcherConfig {
    /// A configuration with every individual flag off (combine with struct
    /// update syntax to enable a subset).
    pub fn none() -> Self {
        MatcherConfig {
            all: false,
            urls: false,
            hashtags: false,
            mentions: false,
            emails: false,
            phone_numbers: false,
            markdown_links: false,
            markdown_headings: false,
            markdown_lists: false,
            markdown_emphasis: false,
        }
    }

    pub(crate) fn resolve(&self) -> RecognizerSet {
        if self.all {
            return RecognizerSet::all();
        }
        let mut set = RecognizerSet::empty();
        if self.urls {
            set |= RecognizerSet::URL;
        }
        if self.hashtags {
            set |= RecognizerSet::HASHTAG;
        }
        if self.mentions {
            set |= RecognizerSet::MENTION;
        }
        if self.emails {
            set |= RecognizerSet::EMAIL;
        }
        if self.phone_numbers {
            set |= RecognizerSet::PHONE;
        }
        if self.markdown_links {
            set |= RecognizerSet::MARKDOWN_LINK;
        }
        if self.markdown_headings {
            set |= RecognizerSet::MARKDOWN_HEADING;
        }
        if self.markdown_lists {
            set |= RecognizerSet::MARKDOWN_LIST;
        }
        if self.markdown_emphasis {
            set |= RecognizerSet::MARKDOWN_EMPHASIS;
        }
        set
    }
}

impl Default for MatcherConfig {
    fn default() -> Self {
        MatcherConfig { all: true, ..MatcherConfig::none() }
    }
}

/// Base URLs used to build navigation targets for matched entities.
///
/// Absent entries fall back to relative defaults: `/tags` for hashtags and
/// `/users` for mentions. When `assets` is absent, relative markdown link
/// targets are kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseUrls {
    pub hashtags: Option<String>,
    pub mentions: Option<String>,
    pub assets: Option<String>,
}
