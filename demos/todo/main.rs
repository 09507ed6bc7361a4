//! Full-screen todo list.
//!
//! ```text
//! cargo run -- [--ja] [--filter all|completed|incomplete|removed]
//! ```
//!
//! Set `TODO_LOG` to a filter such as `debug` to write state transitions to
//! `todo.log` in the working directory.

use bubbletea_rs::{Cmd, KeyMsg, Model, Msg, Program};
use bubbletea_todo::prelude::*;
use clap::Parser;
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;
use std::fs::File;
use std::sync::{Mutex, OnceLock};

#[derive(Parser, Debug, Default)]
#[command(about = "Full-screen todo list")]
struct Args {
    /// Use the Japanese labels.
    #[arg(long)]
    ja: bool,
    /// Filter to start with: all, completed, incomplete or removed.
    #[arg(long, default_value = "all")]
    filter: Filter,
}

static ARGS: OnceLock<Args> = OnceLock::new();

struct App {
    todo: Todo,
}

impl Model for App {
    fn init() -> (Self, Option<Cmd>) {
        let args = ARGS.get_or_init(Args::default);
        let labels = if args.ja {
            Labels::japanese()
        } else {
            Labels::default()
        };

        let mut todo = Todo::new()
            .with_labels(labels)
            .with_items(["Walk the dog", "Water the plants", "Buy milk"])
            .with_width(72);
        todo.apply(Action::SetFilter(args.filter));
        let cmd = todo.focus();
        (Self { todo }, cmd)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        // escape leaves the app from the list, the component keeps it for editing
        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            if key.key == KeyCode::Esc
                && key.modifiers == KeyModifiers::NONE
                && self.todo.focus_area() == TodoFocus::List
            {
                return Some(bubbletea_rs::quit());
            }
        }
        self.todo.update(msg)
    }

    fn view(&self) -> String {
        Style::new()
            .padding(1, 2, 1, 2)
            .render(&self.todo.view())
    }
}

fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let Ok(filter) = std::env::var("TODO_LOG") else {
        return Ok(());
    };
    let file = File::create("todo.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging()?;
    tracing::info!(japanese = args.ja, filter = %args.filter, "starting");
    let _ = ARGS.set(args);

    let program = Program::<App>::builder().alt_screen(true).build()?;
    program.run().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_default_to_all_in_english() {
        let args = Args::try_parse_from(["todo"]).unwrap();
        assert!(!args.ja);
        assert_eq!(args.filter, Filter::All);
    }

    #[test]
    fn test_args_parse_filter_and_language() {
        let args = Args::try_parse_from(["todo", "--ja", "--filter", "checked"]).unwrap();
        assert!(args.ja);
        assert_eq!(args.filter, Filter::Completed);
    }

    #[test]
    fn test_args_reject_bad_input() {
        assert!(Args::try_parse_from(["todo", "--fitler", "completed"]).is_err());
        assert!(Args::try_parse_from(["todo", "--filter"]).is_err());
        assert!(Args::try_parse_from(["todo", "--filter", "archived"]).is_err());
    }
}
