//! Phone number recognizer.
//!
//! This is a bounded hand-written scanner rather than a regex: the grammar
//! needs its digit groups back out for value formatting, and the scanner
//! keeps every rejected candidate O(1) (digit and separator runs are capped)
//! so long near-miss digit runs cannot degrade to quadratic scanning.
//!
//! Accepted shape:
//!
//! ```text
//! [+] [cc]  area  prefix  line   [ext]
//!      1-3   3      3      4      x<digits>
//! ```
//!
//! with any mix of space, `-`, `.` and parentheses between digit groups.
//! Digit-group boundaries must align with the canonical `cc|3|3|4`
//! segmentation, so `12 34 56 78 90` is not a phone number. All three main
//! groups are required; partial captures are not matched at all.

use super::{MatchKind, MatchRecord, boundary_before};

/// 10 national digits plus up to a 3 digit country code.
const MAX_DIGITS: usize = 13;
/// Longest tolerated run of separator characters between digit groups.
const MAX_SEPARATOR_RUN: usize = 3;

struct Candidate {
    /// End byte offset (exclusive) of the full match.
    end: usize,
    /// Main digits (country code + area + prefix + line), in source order.
    digits: String,
    /// Length of the country-code part of `digits` (0..=3).
    cc_len: usize,
    ext: Option<String>,
}

pub(super) fn scan(text: &str, out: &mut Vec<MatchRecord>) {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        let could_start = b == b'+' || b == b'(' || b.is_ascii_digit();
        if could_start && boundary_before(text, i) {
            if let Some(c) = candidate_at(bytes, i) {
                out.push(to_record(text, i, &c));
                i = c.end;
                continue;
            }
        }
        i += 1;
    }
}

fn is_separator(b: u8) -> bool {
    matches!(b, b' ' | b'-' | b'.' | b'(' | b')')
}

fn candidate_at(bytes: &[u8], start: usize) -> Option<Candidate> {
    let mut i = start;
    let mut has_plus = false;
    if bytes[i] == b'+' {
        has_plus = true;
        i += 1;
    }

    // Digit runs separated by bounded separator runs. `i` only advances when
    // a run is found, so trailing separators are never part of the match.
    let mut digits = String::new();
    let mut run_bounds: Vec<usize> = Vec::new();
    loop {
        let mut j = i;
        let mut seps = 0;
        while j < bytes.len() && is_separator(bytes[j]) && seps < MAX_SEPARATOR_RUN {
            j += 1;
            seps += 1;
        }
        let run_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            if digits.len() >= MAX_DIGITS {
                return None;
            }
            digits.push(bytes[j] as char);
            j += 1;
        }
        if j == run_start {
            break;
        }
        run_bounds.push(digits.len());
        i = j;
    }

    let total = digits.len();
    if total < 10 {
        return None;
    }
    let cc_len = total - 10;
    // A `+` with exactly 10 digits leaves no room for the country code.
    if has_plus && cc_len == 0 {
        return None;
    }

    // Every group boundary must land on the cc|3|3|4 segmentation.
    let mut allowed = Vec::with_capacity(4);
    if cc_len > 0 {
        allowed.push(cc_len);
    }
    allowed.extend([cc_len + 3, cc_len + 6, cc_len + 10]);
    if !run_bounds.iter().all(|b| allowed.contains(b)) {
        return None;
    }

    // Optional extension: a lone space, then `x` and at least one digit.
    let mut end = i;
    let mut ext = None;
    let mut j = end;
    if bytes.get(j) == Some(&b' ') {
        j += 1;
    }
    if bytes.get(j) == Some(&b'x') {
        let ext_start = j + 1;
        let mut k = ext_start;
        while k < bytes.len() && bytes[k].is_ascii_digit() {
            k += 1;
        }
        if k > ext_start {
            ext = Some(String::from_utf8_lossy(&bytes[ext_start..k]).into_owned());
            end = k;
        }
    }

    // Trailing word boundary: "1234567890abc" is not a phone number.
    if bytes.get(end).is_some_and(|b| b.is_ascii_alphanumeric()) {
        return None;
    }

    Some(Candidate { end, digits, cc_len, ext })
}

fn to_record(text: &str, start: usize, c: &Candidate) -> MatchRecord {
    let cc = &c.digits[..c.cc_len];
    let area = &c.digits[c.cc_len..c.cc_len + 3];
    let prefix = &c.digits[c.cc_len + 3..c.cc_len + 6];
    let line = &c.digits[c.cc_len + 6..c.cc_len + 10];

    let mut value = if c.cc_len > 0 {
        format!("+{cc} ({area}) {prefix}-{line}")
    } else {
        format!("({area}) {prefix}-{line}")
    };

    let mut tel = String::from("tel:");
    if c.cc_len > 0 {
        tel.push('+');
        tel.push_str(cc);
    }
    tel.push_str(area);
    tel.push_str(prefix);
    tel.push_str(line);

    if let Some(ext) = &c.ext {
        value.push_str(&format!(" x{ext}"));
        tel.push_str(&format!(";{ext}"));
    }

    MatchRecord {
        kind: MatchKind::Phone,
        raw_text: text[start..c.end].to_string(),
        value,
        start,
        end: c.end,
        url: Some(tel),
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
    fn bare_ten_digits() {
        let text = "Call 1234567890 now";
        let out = scan_all(text);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].raw_text, "1234567890");
        assert_eq!(out[0].value, "(123) 456-7890");
        assert_eq!(out[0].url.as_deref(), Some("tel:1234567890"));
        assert_eq!((out[0].start, out[0].end), (5, 15));
    }

    #[test]
    fn country_code_with_plus() {
        let out = scan_all("+1 (555) 123-4567");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].value, "+1 (555) 123-4567");
        assert_eq!(out[0].url.as_deref(), Some("tel:+15551234567"));
    }

    #[test]
    fn extension_is_carried_into_value_and_tel() {
        let out = scan_all("dial 555-123-4567 x89 today");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].raw_text, "555-123-4567 x89");
        assert_eq!(out[0].value, "(555) 123-4567 x89");
        assert_eq!(out[0].url.as_deref(), Some("tel:5551234567;89"));
    }

    #[test]
    fn dotted_separators() {
        let out = scan_all("555.123.4567");
        assert_eq!(out[0].value, "(555) 123-4567");
    }

    #[test]
    fn value_is_lossless_over_digits() {
        for text in ["1234567890", "+46 123 456 7890", "(555) 123-4567 x42"] {
            let out = scan_all(text);
            assert_eq!(out.len(), 1, "{text}");
            let raw_digits: String = out[0].raw_text.chars().filter(char::is_ascii_digit).collect();
            let value_digits: String = out[0].value.chars().filter(char::is_ascii_digit).collect();
            assert_eq!(raw_digits, value_digits, "{text}");
        }
    }

    #[test]
    fn misaligned_groups_are_rejected() {
        assert!(scan_all("12 34 56 78 90").is_empty());
    }

    #[test]
    fn too_few_digits_are_rejected() {
        assert!(scan_all("call 123-4567").is_empty());
    }

    #[test]
    fn too_many_digits_are_rejected() {
        assert!(scan_all("12345678901234").is_empty());
    }

    #[test]
    fn plus_with_ten_digits_is_ambiguous() {
        assert!(scan_all("+1234567890").is_empty());
    }

    #[test]
    fn glued_letters_reject_the_candidate() {
        assert!(scan_all("1234567890abc").is_empty());
    }

    #[test]
    fn dates_are_not_phone_numbers() {
        assert!(scan_all("released 12/25/2023").is_empty());
    }
}
