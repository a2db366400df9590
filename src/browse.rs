use crate::error::AppError;
use crate::loading::with_spinner;
use crate::navigator::Navigator;
use crate::routes::Route;
use api_client::DataProvider;
use core_types::RecordId;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

pub const HELP: &str = "\
Commands:
  <n>          open row n of the list
  v <id>       view the race with <id>
  g <path>     go to a path, e.g. /races or /races/3
  n / p        next / previous page
  b            back
  r            reload
  h            help
  q            quit
";

/// One line of input in browse mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    OpenRow(usize),
    View(RecordId),
    Go(String),
    NextPage,
    PreviousPage,
    Back,
    Refresh,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Command, String> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match (word, rest) {
            ("q" | "quit" | "exit", "") => Command::Quit,
            ("h" | "help" | "?", "") => Command::Help,
            ("b" | "back", "") => Command::Back,
            ("n" | "next", "") => Command::NextPage,
            ("p" | "prev", "") => Command::PreviousPage,
            ("r" | "reload", "") => Command::Refresh,
            ("v" | "view", id) if !id.is_empty() => Command::View(RecordId::new(id)),
            ("g" | "go", path) if !path.is_empty() => Command::Go(path.to_string()),
            (number, "") => match number.parse::<usize>() {
                Ok(row) if row >= 1 => Command::OpenRow(row - 1),
                _ => return Err(format!("Unknown command: {line:?}. Type h for help.")),
            },
            _ => return Err(format!("Unknown command: {line:?}. Type h for help.")),
        };
        Ok(command)
    }
}

/// Interactive loop: starts on the list and reads commands from stdin until
/// `q` or end of input.
pub async fn run<P: DataProvider>(navigator: &mut Navigator<P>) -> Result<(), AppError> {
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    with_spinner("Loading races...", navigator.navigate(Route::Listing)).await;
    stdout.write_all(navigator.render().as_bytes()).await?;
    stdout.write_all(HELP.as_bytes()).await?;

    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                stdout.write_all(format!("{message}\n").as_bytes()).await?;
                continue;
            }
        };

        let moved = match command {
            Command::Quit => break,
            Command::Help => {
                stdout.write_all(HELP.as_bytes()).await?;
                continue;
            }
            Command::OpenRow(index) => with_spinner("Loading race...", navigator.open_row(index)).await,
            Command::View(id) => {
                with_spinner("Loading race...", navigator.open(id)).await;
                true
            }
            Command::Go(path) => {
                with_spinner("Loading...", navigator.navigate(Route::parse(&path))).await;
                true
            }
            Command::NextPage => with_spinner("Loading races...", navigator.next_page()).await,
            Command::PreviousPage => with_spinner("Loading races...", navigator.previous_page()).await,
            Command::Back => with_spinner("Loading...", navigator.back()).await,
            Command::Refresh => {
                with_spinner("Loading...", navigator.refresh()).await;
                true
            }
        };

        if moved {
            stdout.write_all(navigator.render().as_bytes()).await?;
        } else {
            stdout.write_all(b"Nothing to do here.\n").await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_navigation_commands() {
        assert_eq!(Command::parse("3"), Ok(Command::OpenRow(2)));
        assert_eq!(Command::parse("v r1"), Ok(Command::View(RecordId::from("r1"))));
        assert_eq!(Command::parse("  g /races/2 "), Ok(Command::Go("/races/2".to_string())));
        assert_eq!(Command::parse("n"), Ok(Command::NextPage));
        assert_eq!(Command::parse("back"), Ok(Command::Back));
        assert_eq!(Command::parse("q"), Ok(Command::Quit));
    }

    #[test]
    fn rejects_row_zero_and_unknown_words() {
        assert!(Command::parse("0").is_err());
        assert!(Command::parse("v").is_err());
        assert!(Command::parse("delete 3").is_err());
        assert!(Command::parse("q now").is_err());
    }
}
