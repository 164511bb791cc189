//! Line commands accepted by `dealboard watch`.

use anyhow::{bail, Context};
use dealboard_core::{Direction, Intent};

pub(crate) const HELP: &str = "\
commands:
  search <text>    filter by product name (empty clears)
  store <name>     filter by supermarket (empty clears)
  offers on|off    only discounted products, or everything
  refresh          fetch again
  next | prev      move the top-deals carousel
  width <px>       set the display width
  quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    Intent(Intent),
    Help,
    Quit,
}

/// Parses one input line. Blank lines yield `None`.
///
/// # Errors
///
/// Returns an error for unknown commands or malformed arguments.
pub(crate) fn parse_command(line: &str) -> anyhow::Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(w, r)| (w, r.trim()));

    let command = match word.to_lowercase().as_str() {
        "search" | "s" => Command::Intent(Intent::Search(rest.to_owned())),
        "store" => Command::Intent(Intent::SelectStore(
            (!rest.is_empty()).then(|| rest.to_owned()),
        )),
        "offers" => Command::Intent(Intent::SetOffersOnly(parse_switch(rest)?)),
        "refresh" | "r" => Command::Intent(Intent::Refresh),
        "next" | "n" => Command::Intent(Intent::Step(Direction::Next)),
        "prev" | "p" => Command::Intent(Intent::Step(Direction::Previous)),
        "width" | "w" => {
            let width = rest
                .parse::<u32>()
                .with_context(|| format!("invalid width \"{rest}\""))?;
            Command::Intent(Intent::Resize(width))
        }
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => bail!("unknown command \"{other}\"; type `help`"),
    };

    Ok(Some(command))
}

fn parse_switch(value: &str) -> anyhow::Result<bool> {
    match value.to_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        other => bail!("expected on/off, got \"{other}\""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intent(line: &str) -> Intent {
        match parse_command(line).unwrap() {
            Some(Command::Intent(intent)) => intent,
            other => panic!("expected intent for {line:?}, got: {other:?}"),
        }
    }

    #[test]
    fn blank_line_is_none() {
        assert!(parse_command("   ").unwrap().is_none());
    }

    #[test]
    fn search_keeps_inner_spaces() {
        assert_eq!(
            intent("search  milk 1l "),
            Intent::Search("milk 1l".to_owned())
        );
    }

    #[test]
    fn bare_search_clears() {
        assert_eq!(intent("search"), Intent::Search(String::new()));
    }

    #[test]
    fn store_with_and_without_name() {
        assert_eq!(
            intent("store Kaufland"),
            Intent::SelectStore(Some("Kaufland".to_owned()))
        );
        assert_eq!(intent("store"), Intent::SelectStore(None));
    }

    #[test]
    fn offers_switch() {
        assert_eq!(intent("offers on"), Intent::SetOffersOnly(true));
        assert_eq!(intent("offers OFF"), Intent::SetOffersOnly(false));
        assert!(parse_command("offers maybe").is_err());
    }

    #[test]
    fn navigation_and_refresh() {
        assert_eq!(intent("next"), Intent::Step(Direction::Next));
        assert_eq!(intent("p"), Intent::Step(Direction::Previous));
        assert_eq!(intent("refresh"), Intent::Refresh);
    }

    #[test]
    fn width_parses_pixels() {
        assert_eq!(intent("width 768"), Intent::Resize(768));
        assert!(parse_command("width wide").is_err());
    }

    #[test]
    fn quit_and_help() {
        assert_eq!(parse_command("quit").unwrap(), Some(Command::Quit));
        assert_eq!(parse_command("?").unwrap(), Some(Command::Help));
    }

    #[test]
    fn unknown_command_is_an_error() {
        assert!(parse_command("dance").is_err());
    }
}
