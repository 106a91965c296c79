use linkmask::{MatchKind, ParseResult};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_run(result: &ParseResult, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Scanning: \"{}\"", result.text), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Matches ━━━", ansi::GRAY));
    if result.matches.is_empty() {
        println!("{}", palette.dim("  (none)"));
    }
    for m in &result.matches {
        let kind = palette.paint(format!("{:<13}", kind_name(m.kind)), ansi::GREEN);
        let span = palette.dim(format!("{:>4}..{:<4}", m.start, m.end));
        let url = m.url.as_deref().unwrap_or("-");
        println!("  {span} {kind} {:<28} {}", m.value, palette.paint(url, ansi::BLUE));
    }

    let md = &result.markdown;
    if !(md.headings.is_empty() && md.list_items.is_empty() && md.emphasis.is_empty()) {
        println!("\n{}", palette.paint("━━━ Markdown ━━━", ansi::GRAY));
        for h in &md.headings {
            println!("  {} {}", palette.paint(format!("h{}", h.level), ansi::YELLOW), h.text);
        }
        for item in &md.list_items {
            println!("  {} {}", palette.paint("•", ansi::YELLOW), item);
        }
        for e in &md.emphasis {
            println!("  {} {}", palette.paint(format!("{:?}", e.style).to_lowercase(), ansi::YELLOW), e.text);
        }
    }

    println!("\n{}", palette.dim(format!("elapsed: {:?}", result.elapsed)));
}

fn kind_name(kind: MatchKind) -> &'static str {
    match kind {
        MatchKind::Url => "url",
        MatchKind::Hashtag => "hashtag",
        MatchKind::Mention => "mention",
        MatchKind::Email => "email",
        MatchKind::MarkdownLink => "markdown-link",
        MatchKind::Phone => "phone",
    }
}
