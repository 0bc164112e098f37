//! Sable CLI
//!
//! Assemble CSS selectors and inspect rectangles from the terminal.

use std::process::ExitCode;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use sable_css::{FragmentKind, SelectorBuilder};
use sable_shapes::{Rectangle, deserialize, serialize, serialize_pretty};

/// Sable: ordered CSS selector assembly and rectangle JSON
#[derive(Parser, Debug)]
#[command(name = "sable")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # a[href$=".png"]:focus
    sable selector element:a 'attr:href$=".png"' pseudo-class:focus

    # ul.menu > li + li
    sable selector element:ul class:menu '>' element:li + element:li

    # Rectangle as JSON, with its area
    sable rect --width 10 --height 20

    # Area of a rectangle given as JSON
    sable rect --json '{"width": 3, "height": 4}'
"#)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a selector from KIND:VALUE parts and combinators
    Selector {
        /// Fragments (element, id, class, attr, pseudo-class, pseudo-element)
        /// as KIND:VALUE, or a combinator: '>', '+', '~', 'descendant'
        #[arg(value_name = "PART", required = true)]
        parts: Vec<String>,
    },

    /// Print a rectangle as JSON together with its area
    Rect {
        /// Rectangle width
        #[arg(long, allow_negative_numbers = true, required_unless_present = "json")]
        width: Option<f64>,

        /// Rectangle height
        #[arg(long, allow_negative_numbers = true, required_unless_present = "json")]
        height: Option<f64>,

        /// Read the rectangle from JSON text instead
        #[arg(long, value_name = "TEXT", conflicts_with_all = ["width", "height"])]
        json: Option<String>,

        /// Indent the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli.command) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<String> {
    match command {
        Command::Selector { parts } => Ok(build_selector(&parts)?.to_string()),
        Command::Rect {
            width,
            height,
            json,
            pretty,
        } => {
            let rect = match json {
                Some(text) => deserialize::<Rectangle>(&text).context("invalid rectangle JSON")?,
                None => Rectangle::new(width.unwrap_or_default(), height.unwrap_or_default()),
            };
            let encoded = if pretty {
                serialize_pretty(&rect)?
            } else {
                serialize(&rect)?
            };
            Ok(format!("{encoded}\narea: {}", rect.area()))
        }
    }
}

/// Map a command-line combinator to its token.
fn combinator_token(part: &str) -> Option<&'static str> {
    match part {
        "descendant" => Some(" "),
        ">" => Some(">"),
        "+" => Some("+"),
        "~" => Some("~"),
        _ => None,
    }
}

/// Fold parts left to right. A combinator closes the selector being built
/// and joins it with the one that follows.
fn build_selector(parts: &[String]) -> Result<SelectorBuilder> {
    let mut current = SelectorBuilder::new();
    let mut pending: Option<(SelectorBuilder, &str)> = None;

    for part in parts {
        if let Some(token) = combinator_token(part) {
            let left = match pending.take() {
                Some((left, prev)) => SelectorBuilder::combine(&left, prev, &current),
                None => current,
            };
            pending = Some((left, token));
            current = SelectorBuilder::new();
            continue;
        }

        let (kind, value) = part
            .split_once(':')
            .ok_or_else(|| anyhow!("expected KIND:VALUE or a combinator, got `{part}`"))?;
        let kind: FragmentKind = kind
            .parse()
            .map_err(|_| anyhow!("unknown fragment kind `{kind}` in `{part}`"))?;
        let _ = current
            .append(kind, value)
            .with_context(|| format!("cannot append `{part}`"))?;
    }

    Ok(match pending {
        Some((left, token)) => SelectorBuilder::combine(&left, token, &current),
        None => current,
    })
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn parts(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_build_compound_selector() {
        let selector =
            build_selector(&parts(&["element:a", r#"attr:href$=".png""#, "pseudo-class:focus"]))
                .unwrap();
        assert_eq!(selector.render(), r#"a[href$=".png"]:focus"#);
    }

    #[test]
    fn test_build_combined_selector() {
        let selector = build_selector(&parts(&[
            "element:ul",
            "class:menu",
            ">",
            "element:li",
            "+",
            "element:li",
        ]))
        .unwrap();
        assert_eq!(selector.render(), "ul.menu > li + li");
    }

    #[test]
    fn test_descendant_word() {
        let selector = build_selector(&parts(&["id:nav", "descendant", "element:a"])).unwrap();
        assert_eq!(selector.render(), "#nav   a");
    }

    #[test]
    fn test_out_of_order_part_is_reported() {
        let err = build_selector(&parts(&["class:x", "element:div"])).unwrap_err();
        assert!(format!("{err:#}").contains("cannot append `element:div`"));
    }

    #[test]
    fn test_unknown_kind_is_reported() {
        let err = build_selector(&parts(&["tag:div"])).unwrap_err();
        assert!(err.to_string().contains("unknown fragment kind `tag`"));
    }

    #[test]
    fn test_rect_from_dimensions() {
        let output = run(Command::Rect {
            width: Some(10.0),
            height: Some(20.0),
            json: None,
            pretty: false,
        })
        .unwrap();
        assert_eq!(output, "{\"width\":10.0,\"height\":20.0}\narea: 200");
    }

    #[test]
    fn test_rect_from_malformed_json() {
        let err = run(Command::Rect {
            width: None,
            height: None,
            json: Some("{oops".to_string()),
            pretty: false,
        })
        .unwrap_err();
        assert!(err.to_string().contains("invalid rectangle JSON"));
    }
}
