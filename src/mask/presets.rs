//! Fixed preset table.
//!
//! Presets are immutable process-wide data: built once, looked up by name,
//! always available regardless of how a [`MaskEngine`](super::MaskEngine)
//! was constructed. A preset's options are used wholesale; the engine's
//! stored options never leak into a preset run.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::{MaskOptions, MaskToken};

static PRESETS: Lazy<HashMap<&'static str, MaskOptions>> = Lazy::new(|| {
    HashMap::from([
        ("phone", MaskOptions::with_template("(999) 999-9999")),
        // `x` normally accepts hex digits; here it must be the literal
        // extension marker, so the preset shadows it with an exact-match
        // token. The `?` makes the whole extension tail optional.
        ("phone_ext", MaskOptions {
            tokens: HashMap::from([('x', MaskToken { accept: |c: char| c == 'x', transform: None })]),
            ..MaskOptions::with_template("(999) 999-9999? x99999")
        }),
        // Longest country code first: an input too short for three digits
        // fails that template and falls through to the narrower ones.
        ("phone_int", MaskOptions {
            templates: vec![
                "+999 (999) 999-9999".into(),
                "+99 (999) 999-9999".into(),
                "+9 (999) 999-9999".into(),
            ],
            ..MaskOptions::default()
        }),
        ("date", MaskOptions::with_template("99/99/9999")),
        ("time", MaskOptions::with_template("99:99")),
        ("datetime", MaskOptions::with_template("99/99/9999 99:99")),
        ("ssn", MaskOptions::with_template("999-99-9999")),
        ("credit_card", MaskOptions::with_template("9999 9999 9999 9999")),
        // The placeholder algorithm cannot generate grouping commas, so this
        // template only fits fully padded 11-digit amounts; free-form
        // amounts go through `currency::format` instead.
        ("currency", MaskOptions { allow_empty: true, ..MaskOptions::with_template("$999,999,999.99") }),
        ("ipv4", MaskOptions::with_template("999.999.999.999")),
        ("mac", MaskOptions::with_template("XX:XX:XX:XX:XX:XX")),
    ])
});

pub(super) fn get(name: &str) -> Option<&'static MaskOptions> {
    PRESETS.get(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_documented_preset_exists() {
        for name in
            ["phone", "phone_ext", "phone_int", "date", "time", "datetime", "ssn", "credit_card", "currency", "ipv4", "mac"]
        {
            assert!(get(name).is_some(), "missing preset {name}");
        }
    }

    #[test]
    fn unknown_names_do_not_resolve() {
        assert!(get("zipcode").is_none());
    }
}
