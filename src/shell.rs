//! Interactive Shell
//!
//! Line-oriented front end over the shopping screen. Reads commands from
//! stdin, applies them to the draft, and reprints the list whenever the
//! store publishes a new snapshot.

use chrono::Local;
use tokio::io::{self, AsyncBufReadExt};
use tracing::info;

use crate::config::Config;
use crate::screen::ShoppingScreen;
use crate::store::ItemStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Submit the draft, optionally naming it in the same line.
    Add(Option<String>),
    Name(String),
    IncrementQuantity,
    DecrementQuantity,
    Date(DateCommand),
    /// Remove the row at this 1-based list position.
    Remove(usize),
    List,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateCommand {
    Today,
    Clear,
    Set(String),
}

/// Parse one input line. Blank lines mean nothing to do.
pub fn parse(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };

    let command = match keyword.to_lowercase().as_str() {
        "add" => {
            if rest.is_empty() {
                Command::Add(None)
            } else {
                Command::Add(Some(rest.to_string()))
            }
        }
        "name" => Command::Name(rest.to_string()),
        "+" => Command::IncrementQuantity,
        "-" => Command::DecrementQuantity,
        "date" => match rest.to_lowercase().as_str() {
            "today" => Command::Date(DateCommand::Today),
            "clear" => Command::Date(DateCommand::Clear),
            "" => return Err("date needs an argument: today, clear or a date text".to_string()),
            _ => Command::Date(DateCommand::Set(rest.to_string())),
        },
        "rm" => {
            let index: usize = rest
                .parse()
                .map_err(|_| format!("rm needs a list number, got '{rest}'"))?;
            if index == 0 {
                return Err("list numbers start at 1".to_string());
            }
            Command::Remove(index)
        }
        "list" => Command::List,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command '{other}', try 'help'")),
    };
    Ok(Some(command))
}

/// Run the shell until stdin closes or the user quits.
pub async fn run(config: &Config) -> anyhow::Result<()> {
    let store = ItemStore::open(&config.db_path)?;
    let mut feed = store.subscribe()?;
    let mut screen = ShoppingScreen::new(store);

    print_help();

    let stdin = io::BufReader::new(io::stdin());
    let mut lines = stdin.lines();

    loop {
        tokio::select! {
            snapshot = feed.recv() => {
                match snapshot {
                    Some(items) => {
                        screen.apply_snapshot(items);
                        render(&screen);
                    }
                    None => break,
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse(&line) {
                    Ok(Some(Command::Quit)) => break,
                    Ok(Some(command)) => apply(&mut screen, command),
                    Ok(None) => {}
                    Err(message) => println!("{message}"),
                }
            }
        }
    }

    info!("shutting down");
    Ok(())
}

fn apply(screen: &mut ShoppingScreen, command: Command) {
    match command {
        Command::Add(name) => {
            if let Some(name) = name {
                screen.set_name_input(name);
            }
            screen.submit();
        }
        Command::Name(name) => screen.set_name_input(name),
        Command::IncrementQuantity => screen.increment_quantity(),
        Command::DecrementQuantity => screen.decrement_quantity(),
        Command::Date(DateCommand::Today) => {
            screen.set_date(Local::now().format("%Y-%m-%d").to_string());
        }
        Command::Date(DateCommand::Clear) => screen.clear_date(),
        Command::Date(DateCommand::Set(date)) => screen.set_date(date),
        Command::Remove(index) => match screen.items().get(index - 1) {
            Some(item) => screen.remove(item.clone()),
            None => println!("no item {index} on the list"),
        },
        Command::List => {}
        Command::Help => {
            print_help();
            return;
        }
        Command::Quit => return,
    }
    render(screen);
}

fn render(screen: &ShoppingScreen) {
    println!();
    if screen.items().is_empty() {
        println!("(list is empty)");
    } else {
        for (position, item) in screen.items().iter().enumerate() {
            let date = item.date.as_deref().unwrap_or("Not set");
            println!(
                "{}. {} - Quantity: {}  Date: {}",
                position + 1,
                item.name,
                item.quantity,
                date
            );
        }
    }
    let date = screen.selected_date().unwrap_or("Not set");
    println!(
        "draft: name {:?}  quantity {}  date {}",
        screen.name_input(),
        screen.quantity(),
        date
    );
}

fn print_help() {
    println!("commands:");
    println!("  add [name]   add the draft (or name and add in one go)");
    println!("  name <text>  set the draft name");
    println!("  +            raise the draft quantity");
    println!("  -            lower the draft quantity (never below 1)");
    println!("  date today|clear|<text>  set or clear the draft date");
    println!("  rm <n>       remove list entry n");
    println!("  list         reprint the list");
    println!("  help         this text");
    println!("  quit|exit    leave");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add() {
        assert_eq!(parse("add"), Ok(Some(Command::Add(None))));
        assert_eq!(
            parse("add Milk"),
            Ok(Some(Command::Add(Some("Milk".to_string()))))
        );
    }

    #[test]
    fn test_parse_keeps_name_case() {
        assert_eq!(
            parse("NAME Oat Milk"),
            Ok(Some(Command::Name("Oat Milk".to_string())))
        );
    }

    #[test]
    fn test_parse_quantity_steps() {
        assert_eq!(parse("+"), Ok(Some(Command::IncrementQuantity)));
        assert_eq!(parse("-"), Ok(Some(Command::DecrementQuantity)));
    }

    #[test]
    fn test_parse_date_forms() {
        assert_eq!(parse("date today"), Ok(Some(Command::Date(DateCommand::Today))));
        assert_eq!(parse("date clear"), Ok(Some(Command::Date(DateCommand::Clear))));
        assert_eq!(
            parse("date 2026-09-01"),
            Ok(Some(Command::Date(DateCommand::Set("2026-09-01".to_string()))))
        );
        assert!(parse("date").is_err());
    }

    #[test]
    fn test_parse_remove_rejects_zero() {
        assert_eq!(parse("rm 2"), Ok(Some(Command::Remove(2))));
        assert!(parse("rm 0").is_err());
        assert!(parse("rm two").is_err());
    }

    #[test]
    fn test_parse_quit_aliases() {
        assert_eq!(parse("quit"), Ok(Some(Command::Quit)));
        assert_eq!(parse("exit"), Ok(Some(Command::Quit)));
    }

    #[test]
    fn test_parse_blank_line_is_nothing() {
        assert_eq!(parse(""), Ok(None));
        assert_eq!(parse("   "), Ok(None));
    }

    #[test]
    fn test_parse_unknown_command_errors() {
        assert!(parse("frobnicate").is_err());
    }
}
