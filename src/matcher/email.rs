//! Email recognizer.
//!
//! Matches the common `local@domain.tld` shape (local part of letters,
//! digits and `._%+-`; domain of letters, digits, `.` and `-`; 2+ letter
//! tld). Full RFC 5321 address grammar is out of scope.

use super::{MatchKind, MatchRecord};

pub(super) fn scan(text: &str, out: &mut Vec<MatchRecord>) {
    let re = regex!(r"(?i)[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}");

    for m in re.find_iter(text) {
        let raw = m.as_str().to_string();
        out.push(MatchRecord {
            kind: MatchKind::Email,
            value: raw.clone(),
            url: Some(format!("mailto:{raw}")),
            raw_text: raw,
            start: m.start(),
            end: m.end(),
        });
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
    fn plain_address() {
        let text = "contact sarah@example.com.";
        let out = scan_all(text);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].raw_text, "sarah@example.com");
        assert_eq!(out[0].url.as_deref(), Some("mailto:sarah@example.com"));
        assert_eq!(&text[out[0].start..out[0].end], out[0].raw_text);
    }

    #[test]
    fn local_part_punctuation() {
        let out = scan_all("dev+ops.team%x@mail.example-host.org");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].raw_text, "dev+ops.team%x@mail.example-host.org");
    }

    #[test]
    fn missing_tld_is_not_matched() {
        assert!(scan_all("sarah@localhost").is_empty());
    }
}
