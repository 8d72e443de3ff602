use std::{fs, path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::Parser;
use infixcalc::{
    Variables, evaluate,
    session::{Outcome, Session},
};
use rustyline::{DefaultEditor, error::ReadlineError};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const BANNER: &str = "Calculator: commands set, eval, vars, history, export, help, quit";

/// infixcalc evaluates infix arithmetic expressions with variables, history
/// and export.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Runs the commands in a file instead of reading from the terminal.
    #[arg(short, long, value_name = "PATH", conflicts_with = "expression")]
    file: Option<PathBuf>,

    /// Evaluates a single expression and exits.
    expression: Option<String>,
}

fn main() -> ExitCode {
    // Respects RUST_LOG; errors only when unset.
    tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr))
                                  .with(EnvFilter::from_default_env())
                                  .init();

    let args = Args::parse();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::FAILURE
        },
    }
}

fn run(args: Args) -> Result<ExitCode> {
    if let Some(expression) = args.expression {
        return Ok(evaluate_once(&expression));
    }

    if let Some(path) = args.file {
        let script = fs::read_to_string(&path).with_context(|| {
                                                   format!("Failed to read the script file '{}'",
                                                           path.display())
                                               })?;
        print!("{}", Session::new().run_script(&script));
        return Ok(ExitCode::SUCCESS);
    }

    run_interactive()?;
    Ok(ExitCode::SUCCESS)
}

fn evaluate_once(expression: &str) -> ExitCode {
    match evaluate(expression, &Variables::with_constants()) {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

fn run_interactive() -> Result<()> {
    let mut editor = DefaultEditor::new().context("Failed to initialise the line editor")?;
    let mut session = Session::new();

    println!("{BANNER}");

    loop {
        let line = match editor.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e).context("Failed to read input"),
        };

        if !line.trim().is_empty() {
            editor.add_history_entry(line.as_str())?;
        }

        match session.process_line(&line) {
            Ok(Outcome::Continue(Some(output))) => println!("{output}"),
            Ok(Outcome::Continue(None)) => {},
            Ok(Outcome::Exit) => break,
            Err(e) => {
                tracing::debug!(error = ?e, "command failed");
                println!("{e}");
            },
        }
    }

    Ok(())
}
