mod debug_report;

use linkmask::{BaseUrls, MatcherConfig, parse_with};
use std::io::{self, IsTerminal, Read};

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let result = parse_with(&config.input, &MatcherConfig::default(), &config.base_urls);
    debug_report::print_run(&result, config.color);
}

struct CliConfig {
    input: String,
    base_urls: BaseUrls,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut base_urls = BaseUrls::default();
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("linkmask {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--tags-base" => {
                let value = args.next().ok_or_else(|| "error: --tags-base expects a value".to_string())?;
                base_urls.hashtags = Some(value);
            }
            "--users-base" => {
                let value = args.next().ok_or_else(|| "error: --users-base expects a value".to_string())?;
                base_urls.mentions = Some(value);
            }
            "--assets" => {
                let value = args.next().ok_or_else(|| "error: --assets expects a value".to_string())?;
                base_urls.assets = Some(value);
            }
            other if other.starts_with('-') => {
                return Err(format!("error: unknown flag `{other}` (try --help)"));
            }
            other => match &mut input {
                Some(text) => {
                    text.push(' ');
                    text.push_str(other);
                }
                None => input = Some(other.to_string()),
            },
        }
    }

    let input = match input {
        Some(input) => input,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|err| format!("error: failed to read stdin: {err}"))?;
            buf.trim_end().to_string()
        }
    };

    if input.is_empty() {
        return Err("error: no input text (pass it as an argument or on stdin)".to_string());
    }

    Ok(CliConfig { input, base_urls, color })
}

fn print_help() {
    println!(
        "\
linkmask {version} - scan text for linkable entities and markdown structure

USAGE:
    linkmask [OPTIONS] [TEXT]...

With no TEXT, input is read from stdin.

OPTIONS:
    --tags-base <URL>     Base URL for hashtag links (default: /tags)
    --users-base <URL>    Base URL for mention links (default: /users)
    --assets <URL>        Base URL for relative markdown link targets
    --color / --no-color  Force colored output on or off
    -h, --help            Show this help
    -V, --version         Show the version",
        version = env!("CARGO_PKG_VERSION")
    );
}
