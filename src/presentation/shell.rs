//! Line-oriented interactive session.
//!
//! Every input line is a fresh query; lines starting with `:` are commands.
//! The session re-renders the view after each transition and reports failed
//! link opens as notices without ending.

use crate::presentation::labels::CategoryLabels;
use crate::presentation::links::{LinkOpener, open_website};
use crate::presentation::render::render_view;
use crate::presentation::state::AppState;
use std::io::{self, BufRead, Write};

const HELP: &str = "type to filter, :tab NAME to switch category, :open N to open a website, :quit to exit";

#[derive(Debug, PartialEq, Eq)]
enum ShellCommand {
    Query(String),
    Tab(String),
    Open(usize),
    Help,
    Quit,
    Unknown(String),
}

impl ShellCommand {
    fn parse(line: &str) -> Self {
        let Some(command) = line.strip_prefix(':') else {
            return ShellCommand::Query(line.to_string());
        };
        let (name, arg) = match command.trim().split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (command.trim(), ""),
        };
        match name {
            "q" | "quit" => ShellCommand::Quit,
            "h" | "help" => ShellCommand::Help,
            "t" | "tab" if !arg.is_empty() => ShellCommand::Tab(arg.to_string()),
            "o" | "open" => match arg.parse::<usize>() {
                Ok(n) if n > 0 => ShellCommand::Open(n),
                _ => ShellCommand::Unknown(line.to_string()),
            },
            _ => ShellCommand::Unknown(line.to_string()),
        }
    }
}

/// Drive a session until `:quit` or end of input; returns the final state.
pub fn run_shell<R: BufRead, W: Write>(
    mut state: AppState,
    mut reader: R,
    writer: &mut W,
    labels: &CategoryLabels,
    opener: &dyn LinkOpener,
) -> io::Result<AppState> {
    writeln!(writer, "{HELP}")?;
    render(&state, labels, writer)?;

    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        // Only the line terminator is stripped; spaces are part of the query.
        let input = line.trim_end_matches(['\n', '\r']);
        match ShellCommand::parse(input) {
            ShellCommand::Query(query) => {
                state = state.query_changed(query);
                render(&state, labels, writer)?;
            }
            ShellCommand::Tab(name) => {
                state = state.category_selected(labels.resolve(&name));
                render(&state, labels, writer)?;
            }
            ShellCommand::Open(n) => {
                let visible = state.visible();
                match visible.get(n - 1) {
                    Some(record) => match open_website(opener, record) {
                        Ok(()) => writeln!(writer, "opened {}", record.website().unwrap_or(""))?,
                        Err(err) => writeln!(writer, "notice: {err}")?,
                    },
                    None => writeln!(writer, "notice: no result numbered {n}")?,
                }
            }
            ShellCommand::Help => writeln!(writer, "{HELP}")?,
            ShellCommand::Quit => break,
            ShellCommand::Unknown(raw) => writeln!(writer, "notice: unknown command {raw}")?,
        }
    }
    Ok(state)
}

fn render<W: Write>(state: &AppState, labels: &CategoryLabels, writer: &mut W) -> io::Result<()> {
    let mut output = String::new();
    render_view(state, labels, &mut output).map_err(io::Error::other)?;
    writer.write_all(output.as_bytes())
}
