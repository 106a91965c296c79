//! Default placeholder token table.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::MaskToken;

/// Fixed default token table. Callers may shadow entries via
/// `MaskOptions::tokens`, never mutate this one.
pub(super) static DEFAULT_TOKENS: Lazy<HashMap<char, MaskToken>> = Lazy::new(|| {
    HashMap::from([
        ('9', MaskToken { accept: |c: char| c.is_ascii_digit(), transform: None }),
        ('a', MaskToken {
            accept: |c: char| c.is_ascii_lowercase(),
            transform: Some(|c: char| c.to_ascii_lowercase()),
        }),
        ('A', MaskToken {
            accept: |c: char| c.is_ascii_uppercase(),
            transform: Some(|c: char| c.to_ascii_uppercase()),
        }),
        ('*', MaskToken { accept: |c: char| c.is_ascii_alphanumeric(), transform: None }),
        ('#', MaskToken { accept: |c: char| c.is_ascii_alphanumeric(), transform: None }),
        ('x', MaskToken { accept: |c: char| c.is_ascii_hexdigit(), transform: None }),
        ('X', MaskToken {
            accept: |c: char| c.is_ascii_hexdigit(),
            transform: Some(|c: char| c.to_ascii_uppercase()),
        }),
    ])
});
