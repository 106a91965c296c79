//! Linkify-style entity matching and declarative input masking.
//!
//! The crate is built from two independent, side-effect-free engines:
//!
//! - [`Matcher`]: scans a text buffer with a fixed set of recognizers (URL,
//!   hashtag, mention, email, phone, markdown link) and produces
//!   position-tagged, URL-annotated [`MatchRecord`]s, merged into a single
//!   ascending-position sequence. Markdown headings, list items and emphasis
//!   are extracted separately into a [`MarkdownSummary`].
//! - [`MaskEngine`]: consumes an input string left-to-right against a
//!   positional template of literals and typed placeholder tokens and returns
//!   the reformatted value, with multi-template fallback and optional
//!   trailing segments.
//!
//! Neither engine depends on the other; the facade functions ([`parse`],
//! [`format_phone_number`], ...) are thin glue over the two.
//!
//! ```
//! let out = linkmask::parse("reach me at #support or 555-123-4567");
//! assert_eq!(out.matches.len(), 2);
//! ```

extern crate self as linkmask;

#[macro_use]
mod macros;
mod api;
mod mask;
mod matcher;

pub use api::{
    ParseResult, find_links, find_links_with, format_currency, format_date, format_phone_number, parse, parse_with,
};
pub use mask::{MaskEngine, MaskError, MaskOptions, MaskSelector, MaskToken, OPTIONAL_MARKER};
pub use matcher::{
    BaseUrls, Emphasis, EmphasisStyle, Heading, MarkdownSummary, MatchKind, MatchRecord, Matcher, MatcherConfig,
    RecognizerSet,
};
