//! pilcrow: run one editor macro against a file.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use pilcrow::commands;
use pilcrow::config::Config;
use pilcrow::host::{line_count, BufferEditor, Editor, Position};
use serde::Serialize;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "pilcrow")]
#[command(about = "Editor macros for comment banners and import surgery", long_about = None)]
struct Args {
    /// Command to run (e.g. import-dependency, doc-curline, sort-lines)
    command: String,

    /// File to transform
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Free-text argument for commands that take one
    argument: Option<String>,

    /// Cursor position as ROW:COL (zero-indexed)
    #[arg(long, value_name = "ROW:COL")]
    cursor: Option<String>,

    /// Selection as ROW:COL..ROW:COL
    #[arg(long, value_name = "RANGE")]
    select: Option<String>,

    /// Rewrite the file in place instead of printing the result
    #[arg(long)]
    write: bool,

    /// Emit a JSON edit summary instead of the new text
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
/// Machine-readable result of one command run, for editor integrations.
struct EditSummary {
    text: String,
    cursor_row: usize,
    cursor_column: usize,
    line_delta: i64,
}

fn parse_position(spec: &str) -> io::Result<Position> {
    let (row, column) = spec
        .split_once(':')
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "expected ROW:COL"))?;
    let parse = |s: &str| {
        s.parse::<usize>()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))
    };
    Ok(Position {
        row: parse(row)?,
        column: parse(column)?,
    })
}

fn parse_selection(spec: &str) -> io::Result<(Position, Position)> {
    let (start, end) = spec
        .split_once("..")
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "expected ROW:COL..ROW:COL"))?;
    Ok((parse_position(start)?, parse_position(end)?))
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = Config::load();

    match run(&args, &config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, config: &Config) -> io::Result<ExitCode> {
    let original = std::fs::read_to_string(&args.file)?;
    let old_lines = line_count(&original);

    let mut editor = BufferEditor::new(original).with_path(&args.file);
    if let Some(cursor) = &args.cursor {
        editor = editor.with_cursor(parse_position(cursor)?);
    }
    if let Some(selection) = &args.select {
        let (start, end) = parse_selection(selection)?;
        editor = editor.with_selection(start, end);
    }

    let argument = args.argument.clone().unwrap_or_default();
    if commands::run(&mut editor, config, &args.command, &argument).is_err() {
        for notification in editor.notifications() {
            eprintln!("{notification}");
        }
        return Ok(ExitCode::FAILURE);
    }

    let text = editor.text();
    let cursor = editor.cursor();

    if args.write {
        std::fs::write(&args.file, &text)?;
    } else if args.json {
        let line_delta = i64::try_from(line_count(&text)).unwrap_or(i64::MAX)
            - i64::try_from(old_lines).unwrap_or(i64::MAX);
        let summary = EditSummary {
            text,
            cursor_row: cursor.row,
            cursor_column: cursor.column,
            line_delta,
        };
        let json = serde_json::to_string_pretty(&summary).map_err(io::Error::other)?;
        println!("{json}");
    } else {
        print!("{text}");
    }

    Ok(ExitCode::SUCCESS)
}
