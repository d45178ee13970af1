use anyhow::Result;
use std::io::{self, BufRead, Write};
use tracing::info;

use crate::controller::App;

const HELP: &str = "\
Commands:
  search <query>     search recipes (shows page 1)
  page <n>           show results page n
  open <id>          load a recipe
  servings <n>       rescale the current recipe
  bookmark           toggle bookmark on the current recipe
  bookmarks          list bookmarks
  unbookmark <id>    remove a bookmark
  help               show this help
  exit               quit";

/// One parsed shell line
#[derive(Debug, PartialEq)]
pub enum ShellCommand {
    Search(String),
    Page(u32),
    Open(String),
    Servings(u32),
    ToggleBookmark,
    Bookmarks,
    Unbookmark(String),
    Help,
    Exit,
}

pub fn parse_line(line: &str) -> Result<ShellCommand, String> {
    let line = line.trim();
    let (command, arg) = match line.split_once(char::is_whitespace) {
        Some((command, arg)) => (command, arg.trim()),
        None => (line, ""),
    };

    let require = |what: &str| -> Result<String, String> {
        if arg.is_empty() {
            Err(format!("'{}' needs {}", command, what))
        } else {
            Ok(arg.to_string())
        }
    };
    let number = |what: &str| -> Result<u32, String> {
        require(what)?
            .parse::<u32>()
            .map_err(|_| format!("'{}' needs {} as a whole number", command, what))
    };

    match command {
        "search" => require("a query").map(ShellCommand::Search),
        "page" => number("a page").map(ShellCommand::Page),
        "open" => require("a recipe id").map(ShellCommand::Open),
        "servings" => number("a serving count").map(ShellCommand::Servings),
        "bookmark" => Ok(ShellCommand::ToggleBookmark),
        "bookmarks" => Ok(ShellCommand::Bookmarks),
        "unbookmark" => require("a recipe id").map(ShellCommand::Unbookmark),
        "help" | "?" => Ok(ShellCommand::Help),
        "exit" | "quit" => Ok(ShellCommand::Exit),
        other => Err(format!("Unknown command '{}', try 'help'", other)),
    }
}

/// Interactive session; state lives as long as the shell does
pub async fn execute(app: &mut App) -> Result<()> {
    info!("Starting forkify shell");

    println!("Forkify shell - type 'help' for commands, 'exit' to quit");
    println!("---");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }
        if input.trim().is_empty() {
            continue;
        }

        let command = match parse_line(&input) {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };

        let html = match command {
            ShellCommand::Search(query) => app.search(&query).await,
            ShellCommand::Page(page) => app.go_to_page(page).await,
            ShellCommand::Open(id) => app.show_recipe(&id).await,
            ShellCommand::Servings(servings) => app.update_servings(servings).await,
            ShellCommand::ToggleBookmark => app.toggle_bookmark().await,
            ShellCommand::Bookmarks => app.show_bookmarks().await,
            ShellCommand::Unbookmark(id) => app.remove_bookmark(&id).await,
            ShellCommand::Help => HELP.to_string(),
            ShellCommand::Exit => break,
        };
        println!("{}\n", html);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        assert_eq!(
            parse_line("search  mac and cheese "),
            Ok(ShellCommand::Search("mac and cheese".into()))
        );
        assert_eq!(parse_line("page 3"), Ok(ShellCommand::Page(3)));
        assert_eq!(parse_line("bookmark"), Ok(ShellCommand::ToggleBookmark));
        assert_eq!(parse_line("quit\n"), Ok(ShellCommand::Exit));
    }

    #[test]
    fn test_parse_line_errors() {
        assert!(parse_line("page two").is_err());
        assert!(parse_line("open").is_err());
        assert!(parse_line("dance").is_err());
    }
}
