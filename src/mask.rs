//! Input-mask engine.
//!
//! A mask template is a plain string walked character by character:
//!
//! ```text
//! template: ( 9 9 9 )   9 9 9 - 9 9 9 9 ?   x 9 9 9 9 9
//!           │ └──┬──┘                     │ │
//!           │    placeholders (token `9`) │ └ literal (preset-overridden
//!           │                             │   token in `phone_ext`)
//!           └ literal                     └ optional marker: everything
//!                                           after it may be absent
//! ```
//!
//! Placeholders consume input characters that satisfy their token's accept
//! predicate (normalized through the token's transform); literals are
//! emitted verbatim and swallow an identical input character so re-applying
//! a mask to its own output is a no-op. Templates are tried in order and
//! the first non-failing one wins.
//!
//! The engine is pure and immutable after construction: the default token
//! table and the preset table are process-wide `Lazy` statics, and a single
//! [`MaskEngine`] can be shared freely across call sites.
//!
//! The one hard failure is naming a preset that does not exist
//! ([`MaskError::UnknownPreset`]); a value that cannot be masked is a normal
//! empty-string result, never an error.
//!
//! Set `LINKMASK_DEBUG=1` to print per-template attempt traces.

#[path = "mask/currency.rs"]
pub(crate) mod currency;
#[path = "mask/presets.rs"]
mod presets;
#[path = "mask/tokens.rs"]
mod tokens;


use std::collections::HashMap;

use tokens::DEFAULT_TOKENS;

/// Template character that switches every subsequent placeholder to
/// "optional" mode: once input is exhausted past this marker the result so
/// far is returned instead of failing.
pub const OPTIONAL_MARKER: char = '?';

/// A named placeholder rule: which input characters may fill one template
/// slot, and how to normalize an accepted character.
#[derive(Debug, Clone, Copy)]
pub struct MaskToken {
    pub accept: fn(char) -> bool,
    pub transform: Option<fn(char) -> char>,
}

impl MaskToken {
    fn apply(&self, c: char) -> char {
        match self.transform {
            Some(f) => f(c),
            None => c,
        }
    }
}

/// Options driving one masking run.
#[derive(Debug, Clone)]
pub struct MaskOptions {
    /// Candidate templates, tried in order; the first non-failing one wins.
    pub templates: Vec<String>,
    /// Additional/overriding token table entries (caller wins on collision).
    pub tokens: HashMap<char, MaskToken>,
    /// Display character for incomplete slots. Informational only: the
    /// engine never pads results with it.
    pub placeholder: char,
    /// Report a failed template as an empty (cleared) result instead of
    /// falling through to the next candidate.
    pub auto_clear: bool,
    /// Accept an empty input as an empty result when every template fails.
    pub allow_empty: bool,
    /// Make [`MaskEngine::strip_mask`] remove non-alphanumeric characters.
    pub strip_mask: bool,
}

impl Default for MaskOptions {
    fn default() -> Self {
        MaskOptions {
            templates: Vec::new(),
            tokens: HashMap::new(),
            placeholder: '_',
            auto_clear: false,
            allow_empty: false,
            strip_mask: false,
        }
    }
}

impl MaskOptions {
    /// Convenience constructor for the common single-template case.
    pub fn with_template(template: impl Into<String>) -> Self {
        MaskOptions { templates: vec![template.into()], ..MaskOptions::default() }
    }
}

/// How [`MaskEngine::apply`] selects its options: a preset name looked up in
/// the fixed preset table, or explicit options supplied by the caller.
#[derive(Debug, Clone)]
pub enum MaskSelector {
    Preset(String),
    Explicit(MaskOptions),
}

impl From<&str> for MaskSelector {
    fn from(name: &str) -> Self {
        MaskSelector::Preset(name.to_string())
    }
}

impl From<String> for MaskSelector {
    fn from(name: String) -> Self {
        MaskSelector::Preset(name)
    }
}

impl From<MaskOptions> for MaskSelector {
    fn from(options: MaskOptions) -> Self {
        MaskSelector::Explicit(options)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MaskError {
    #[error("unknown mask preset `{0}`")]
    UnknownPreset(String),
}

/// The mask engine: stored options plus a resolved token table.
///
/// `apply` with a preset or explicit options ignores the stored options
/// entirely (they are used wholesale); `is_complete` and `strip_mask`
/// consult the stored options.
#[derive(Debug, Clone)]
pub struct MaskEngine {
    options: MaskOptions,
    /// Default token table merged with the stored options' overrides.
    tokens: HashMap<char, MaskToken>,
}

impl MaskEngine {
    pub fn new(options: MaskOptions) -> Self {
        let tokens = merged_tokens(&options.tokens);
        MaskEngine { options, tokens }
    }

    /// Reformat `value` against the selected options.
    ///
    /// Masking failure is not an error: when every candidate template fails
    /// the result falls back per the multi-template rules and may be the
    /// empty string. The only error is an unknown preset name.
    ///
    /// ```
    /// use linkmask::MaskEngine;
    ///
    /// let engine = MaskEngine::default();
    /// assert_eq!(engine.apply("1234567890", "phone").unwrap(), "(123) 456-7890");
    /// assert_eq!(engine.apply("12252023", "date").unwrap(), "12/25/2023");
    /// ```
    pub fn apply(&self, value: &str, selector: impl Into<MaskSelector>) -> Result<String, MaskError> {
        match selector.into() {
            MaskSelector::Preset(name) => {
                let options = presets::get(&name).ok_or_else(|| MaskError::UnknownPreset(name.clone()))?;
                Ok(apply_options(value, options))
            }
            MaskSelector::Explicit(options) => Ok(apply_options(value, &options)),
        }
    }

    /// True iff at least one stored template accepts `value` without failing.
    pub fn is_complete(&self, value: &str) -> bool {
        self.options.templates.iter().any(|t| process_value(value, t, &self.tokens, &self.options).is_some())
    }

    /// Return `value` with every non-alphanumeric character removed when the
    /// stored `strip_mask` option is enabled; `value` unchanged otherwise.
    pub fn strip_mask(&self, value: &str) -> String {
        if self.options.strip_mask {
            value.chars().filter(|c| c.is_ascii_alphanumeric()).collect()
        } else {
            value.to_string()
        }
    }
}

impl Default for MaskEngine {
    fn default() -> Self {
        MaskEngine::new(MaskOptions::default())
    }
}

fn merged_tokens(overrides: &HashMap<char, MaskToken>) -> HashMap<char, MaskToken> {
    let mut tokens = DEFAULT_TOKENS.clone();
    for (&key, &token) in overrides {
        tokens.insert(key, token);
    }
    tokens
}

/// Multi-template resolution over one option set.
fn apply_options(value: &str, options: &MaskOptions) -> String {
    let debug = std::env::var_os("LINKMASK_DEBUG").is_some();
    let tokens = merged_tokens(&options.tokens);

    for template in &options.templates {
        if let Some(result) = process_value(value, template, &tokens, options) {
            if debug {
                eprintln!("[mask] template \"{template}\" accepted -> \"{result}\"");
            }
            return result;
        }
        if debug {
            eprintln!("[mask] template \"{template}\" failed");
        }
    }

    if options.allow_empty && value.is_empty() {
        return String::new();
    }
    match options.templates.first() {
        Some(first) => process_value(value, first, &tokens, options).unwrap_or_default(),
        None => String::new(),
    }
}

/// Single-template algorithm. `None` is failure; `Some(s)` is a defined
/// result (possibly the cleared empty string when `auto_clear` is set).
///
/// State machine: one `Scanning` state with an `optional` flag, driven by
/// the classification of each template character (marker / token key /
/// literal) and by input exhaustion.
fn process_value(
    value: &str,
    template: &str,
    tokens: &HashMap<char, MaskToken>,
    options: &MaskOptions,
) -> Option<String> {
    let input: Vec<char> = value.chars().collect();
    let mut cursor = 0;
    let mut optional = false;
    let mut out = String::with_capacity(template.len());

    for ch in template.chars() {
        // The marker consumes no input, so it is classified before the
        // exhaustion check; a template may end `...9999? x999` and still
        // complete on exactly-consumed input.
        if ch == OPTIONAL_MARKER {
            optional = true;
            continue;
        }

        if cursor >= input.len() {
            if optional {
                return Some(out);
            }
            return if options.auto_clear { Some(String::new()) } else { None };
        }

        if let Some(token) = tokens.get(&ch) {
            // Placeholder: consume until an acceptable character or, in
            // optional mode, until input runs out.
            while cursor < input.len() {
                let c = input[cursor];
                cursor += 1;
                if (token.accept)(c) {
                    out.push(token.apply(c));
                    break;
                }
                if !optional {
                    return if options.auto_clear { Some(String::new()) } else { None };
                }
            }
        } else {
            // Literal: always emitted, and an identical input character is
            // treated as already present rather than duplicated.
            out.push(ch);
            if input[cursor] == ch {
                cursor += 1;
            }
        }
    }

    Some(out)
}
