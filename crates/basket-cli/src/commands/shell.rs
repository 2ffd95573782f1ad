//! Shell command handler
//!
//! A line-oriented session for scripted or non-TTY use. The store lives
//! for the duration of the shell process; when the shell exits the list
//! is gone.
//!
//! Commands:
//! - `add <name> <qty> <unit>` (name may contain spaces)
//! - `buy <id-prefix>` (toggle purchased)
//! - `rm <id-prefix>`
//! - `list`, `count`, `help`, `quit`

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing::info;
use uuid::Uuid;

use basket_core::ListStore;

use crate::output::Output;

/// A parsed shell command
#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    /// Add an item; missing parts are empty strings so the store's
    /// field validation reports them
    Add {
        name: String,
        quantity: String,
        unit: String,
    },
    /// Toggle purchased on an item by id prefix
    Buy(String),
    /// Remove an item by id prefix
    Remove(String),
    /// Print the list
    List,
    /// Print the unpurchased count
    Count,
    /// Print usage
    Help,
    /// End the session
    Quit,
    /// Blank line
    Empty,
    /// Anything else
    Unknown(String),
}

/// Parse one input line into a command
///
/// For `add`, the last two tokens are quantity and unit; everything in
/// between is the (possibly multi-word) name.
pub fn parse_command(line: &str) -> ShellCommand {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    let Some(&head) = tokens.first() else {
        return ShellCommand::Empty;
    };

    match head {
        "add" => {
            let args = &tokens[1..];
            let (name, quantity, unit) = match args.len() {
                0 => (String::new(), String::new(), String::new()),
                1 => (args[0].to_string(), String::new(), String::new()),
                2 => (args[0].to_string(), args[1].to_string(), String::new()),
                n => (
                    args[..n - 2].join(" "),
                    args[n - 2].to_string(),
                    args[n - 1].to_string(),
                ),
            };
            ShellCommand::Add {
                name,
                quantity,
                unit,
            }
        }
        "buy" | "toggle" => match tokens.get(1) {
            Some(prefix) => ShellCommand::Buy(prefix.to_string()),
            None => ShellCommand::Unknown("usage: buy <id-prefix>".to_string()),
        },
        "rm" | "remove" => match tokens.get(1) {
            Some(prefix) => ShellCommand::Remove(prefix.to_string()),
            None => ShellCommand::Unknown("usage: rm <id-prefix>".to_string()),
        },
        "list" | "ls" => ShellCommand::List,
        "count" => ShellCommand::Count,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => ShellCommand::Unknown(format!("unknown command: {}", other)),
    }
}

/// Run a shell session over stdin
pub fn run(output: &Output) -> Result<()> {
    let mut store = ListStore::new();
    info!("shell session started");

    if !output.is_quiet() && !output.is_json() {
        println!("basket shell - type 'help' for commands, 'quit' to end the session");
    }
    prompt(output)?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let command = parse_command(&line);
        if !execute(&mut store, command, output)? {
            break;
        }
        prompt(output)?;
    }

    info!("shell session ended");
    Ok(())
}

/// Execute one command against the store
///
/// Returns false when the session should end.
pub fn execute(store: &mut ListStore, command: ShellCommand, output: &Output) -> Result<bool> {
    match command {
        ShellCommand::Add {
            name,
            quantity,
            unit,
        } => match store.add_item(&name, &quantity, &unit) {
            Ok(item) => {
                output.success(&format!("Added {}", item));
                if output.is_quiet() {
                    println!("{}", item.id);
                }
            }
            Err(e) => output.error(&e.to_string()),
        },
        ShellCommand::Buy(prefix) => {
            if let Some(id) = resolve_id(store, &prefix, output) {
                store.toggle_purchased(id);
                if let Some(item) = store.get_item(id) {
                    let state = if item.purchased {
                        "purchased"
                    } else {
                        "not purchased"
                    };
                    output.success(&format!("Marked '{}' as {}", item.name, state));
                }
            }
        }
        ShellCommand::Remove(prefix) => {
            if let Some(id) = resolve_id(store, &prefix, output) {
                let name = store.get_item(id).map(|i| i.name.clone());
                store.remove_item(id);
                if let Some(name) = name {
                    output.success(&format!("Removed '{}'", name));
                }
            }
        }
        ShellCommand::List => {
            output.print_items(store.items(), store.unpurchased_count());
        }
        ShellCommand::Count => match output.format {
            crate::output::OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({"unpurchased": store.unpurchased_count()})
                );
            }
            _ => println!("{}", store.unpurchased_count()),
        },
        ShellCommand::Help => {
            output.message(
                "Commands:\n\
                 \x20 add <name> <qty> <unit>   Add an item\n\
                 \x20 buy <id-prefix>           Toggle purchased\n\
                 \x20 rm <id-prefix>            Remove an item\n\
                 \x20 list                      Show the list\n\
                 \x20 count                     Show unpurchased count\n\
                 \x20 quit                      End the session",
            );
        }
        ShellCommand::Quit => return Ok(false),
        ShellCommand::Empty => {}
        ShellCommand::Unknown(msg) => {
            output.error(&msg);
        }
    }

    Ok(true)
}

/// Resolve an id prefix to exactly one item
///
/// The store treats unknown ids as no-ops; the shell reports them so
/// typos don't pass silently.
fn resolve_id(store: &ListStore, prefix: &str, output: &Output) -> Option<Uuid> {
    let matches = store.find_by_prefix(prefix);

    match matches.len() {
        0 => {
            output.error(&format!("No item matching '{}'", prefix));
            None
        }
        1 => Some(matches[0].id),
        _ => {
            eprintln!("Multiple items match '{}':", prefix);
            for item in &matches {
                eprintln!("  {} - {}", item.id, item.name);
            }
            output.error("Ambiguous id. Please provide more characters.");
            None
        }
    }
}

/// Print the prompt in interactive human mode
fn prompt(output: &Output) -> Result<()> {
    if !output.is_quiet() && !output.is_json() {
        print!("> ");
        io::stdout().flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;

    fn quiet() -> Output {
        Output::new(OutputFormat::Quiet)
    }

    #[test]
    fn test_parse_add() {
        assert_eq!(
            parse_command("add Milk 2 l"),
            ShellCommand::Add {
                name: "Milk".to_string(),
                quantity: "2".to_string(),
                unit: "l".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_add_multiword_name() {
        assert_eq!(
            parse_command("add Olive oil 1 bottle"),
            ShellCommand::Add {
                name: "Olive oil".to_string(),
                quantity: "1".to_string(),
                unit: "bottle".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_add_missing_args() {
        // Missing parts become empty so the store reports MissingField
        assert_eq!(
            parse_command("add Milk"),
            ShellCommand::Add {
                name: "Milk".to_string(),
                quantity: String::new(),
                unit: String::new(),
            }
        );
        assert_eq!(
            parse_command("add"),
            ShellCommand::Add {
                name: String::new(),
                quantity: String::new(),
                unit: String::new(),
            }
        );
    }

    #[test]
    fn test_parse_buy_and_rm() {
        assert_eq!(parse_command("buy abc123"), ShellCommand::Buy("abc123".to_string()));
        assert_eq!(parse_command("toggle abc"), ShellCommand::Buy("abc".to_string()));
        assert_eq!(parse_command("rm abc123"), ShellCommand::Remove("abc123".to_string()));
        assert_eq!(parse_command("remove x"), ShellCommand::Remove("x".to_string()));
        assert!(matches!(parse_command("buy"), ShellCommand::Unknown(_)));
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse_command("list"), ShellCommand::List);
        assert_eq!(parse_command("ls"), ShellCommand::List);
        assert_eq!(parse_command("count"), ShellCommand::Count);
        assert_eq!(parse_command("help"), ShellCommand::Help);
        assert_eq!(parse_command("quit"), ShellCommand::Quit);
        assert_eq!(parse_command("exit"), ShellCommand::Quit);
        assert_eq!(parse_command(""), ShellCommand::Empty);
        assert_eq!(parse_command("   "), ShellCommand::Empty);
        assert!(matches!(parse_command("frobnicate"), ShellCommand::Unknown(_)));
    }

    #[test]
    fn test_execute_add_and_list() {
        let mut store = ListStore::new();
        let output = quiet();

        let keep_going = execute(&mut store, parse_command("add Milk 2 l"), &output).unwrap();
        assert!(keep_going);
        assert_eq!(store.item_count(), 1);
        assert_eq!(store.items()[0].name, "Milk");
    }

    #[test]
    fn test_execute_invalid_add_leaves_store_empty() {
        let mut store = ListStore::new();
        let output = quiet();

        execute(&mut store, parse_command("add Milk abc l"), &output).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_execute_buy_by_prefix() {
        let mut store = ListStore::new();
        let output = quiet();
        let item = store.add_item("Milk", "2", "l").unwrap();
        let prefix = item.id.to_string()[..8].to_string();

        execute(&mut store, ShellCommand::Buy(prefix.clone()), &output).unwrap();
        assert!(store.get_item(item.id).unwrap().purchased);

        execute(&mut store, ShellCommand::Buy(prefix), &output).unwrap();
        assert!(!store.get_item(item.id).unwrap().purchased);
    }

    #[test]
    fn test_execute_remove_by_prefix() {
        let mut store = ListStore::new();
        let output = quiet();
        let item = store.add_item("Milk", "2", "l").unwrap();
        let prefix = item.id.to_string()[..8].to_string();

        execute(&mut store, ShellCommand::Remove(prefix), &output).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_execute_unknown_prefix_is_reported_not_fatal() {
        let mut store = ListStore::new();
        let output = quiet();
        store.add_item("Milk", "2", "l").unwrap();

        let keep_going =
            execute(&mut store, ShellCommand::Buy("zzzz".to_string()), &output).unwrap();
        assert!(keep_going);
        assert_eq!(store.item_count(), 1);
        assert!(!store.items()[0].purchased);
    }

    #[test]
    fn test_execute_quit_ends_session() {
        let mut store = ListStore::new();
        let output = quiet();

        let keep_going = execute(&mut store, ShellCommand::Quit, &output).unwrap();
        assert!(!keep_going);
    }
}
