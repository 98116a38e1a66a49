//! Command parsing for the board prompt.

use std::str::FromStr;

use lostfound_core::domain::{PostFilter, PostType};

use crate::error::AppError;

pub const HELP: &str = "\
Commands:
  list                      show the feed under the active filter
  filter <all|lost|found>   change the filter (or just: all, lost, found)
  new [lost|found]          create a post; type 'back' at any prompt to go back
  export                    print the visible feed as JSON
  import <json>             create a post from a one-line JSON object
  help                      show this help
  quit                      end the session (posts are discarded)
";

/// A line typed at the board prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Empty,
    List,
    Filter(PostFilter),
    New(Option<PostType>),
    Export,
    Import(String),
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = AppError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        let command = match name.to_ascii_lowercase().as_str() {
            "" => Command::Empty,
            "list" | "ls" => Command::List,
            "all" | "lost" | "found" if rest.is_empty() => Command::Filter(name.parse()?),
            "filter" if rest.is_empty() => return Err(AppError::Usage("filter <all|lost|found>")),
            "filter" => Command::Filter(rest.parse()?),
            "new" | "post" if rest.is_empty() => Command::New(None),
            "new" | "post" => Command::New(Some(rest.parse()?)),
            "export" => Command::Export,
            "import" if rest.is_empty() => return Err(AppError::Usage("import <json>")),
            "import" => Command::Import(rest.to_string()),
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(AppError::UnknownCommand(name.to_string())),
        };

        Ok(command)
    }
}
