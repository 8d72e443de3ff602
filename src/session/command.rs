use std::path::PathBuf;

use crate::error::SessionError;

/// Usage line reported for a malformed `set`.
pub const SET_USAGE: &str = "set name=expression[, name=expression...]";
/// Usage line reported for an `export` without a path.
pub const EXPORT_USAGE: &str = "export <path>";

/// One `name=expression` pair of a `set` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// Variable being assigned.
    pub name:       String,
    /// Expression whose value is assigned.
    pub expression: String,
}

/// A parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `quit` or `exit`.
    Quit,
    /// `help`.
    Help,
    /// `set a=1, b=a+1`.
    Set(Vec<Assignment>),
    /// `eval <expression>`, or a bare expression.
    Eval(String),
    /// `vars`.
    Vars,
    /// `history`.
    History,
    /// `export <path>`.
    Export(PathBuf),
}

impl Command {
    /// Parses one input line.
    ///
    /// Keywords are matched on the trimmed line; a line that starts with no
    /// keyword is an expression to evaluate. Blank lines parse to `None`.
    ///
    /// # Errors
    /// Returns `SessionError::Usage` for a `set` whose assignments lack a
    /// name or an `=`, and for `set` or `export` with nothing after them.
    ///
    /// # Example
    /// ```
    /// use infixcalc::session::command::{Assignment, Command};
    ///
    /// assert_eq!(Command::parse("  vars ").unwrap(), Some(Command::Vars));
    /// assert_eq!(Command::parse("1 + 2").unwrap(),
    ///            Some(Command::Eval("1 + 2".to_string())));
    /// assert_eq!(Command::parse("set x = 5").unwrap(),
    ///            Some(Command::Set(vec![Assignment { name:       "x".to_string(),
    ///                                                expression: "5".to_string(), }])));
    /// assert!(Command::parse("set =5").is_err());
    /// ```
    pub fn parse(line: &str) -> Result<Option<Self>, SessionError> {
        let line = line.trim();

        let command = match line {
            "" => return Ok(None),
            "quit" | "exit" => Self::Quit,
            "help" => Self::Help,
            "vars" => Self::Vars,
            "history" => Self::History,
            "set" => return Err(usage(SET_USAGE)),
            "export" => return Err(usage(EXPORT_USAGE)),
            _ => {
                if let Some(rest) = line.strip_prefix("set ") {
                    Self::Set(parse_assignments(rest)?)
                } else if let Some(rest) = line.strip_prefix("eval ") {
                    Self::Eval(rest.trim().to_string())
                } else if let Some(rest) = line.strip_prefix("export ") {
                    Self::Export(PathBuf::from(rest.trim()))
                } else {
                    Self::Eval(line.to_string())
                }
            },
        };

        Ok(Some(command))
    }
}

/// Splits the body of a `set` command into its comma-separated assignments.
fn parse_assignments(body: &str) -> Result<Vec<Assignment>, SessionError> {
    body.split(',')
        .map(|assignment| {
            let assignment = assignment.trim();
            match assignment.split_once('=') {
                Some((name, expression)) if !name.trim().is_empty() => {
                    Ok(Assignment { name:       name.trim().to_string(),
                                    expression: expression.trim().to_string(), })
                },
                _ => Err(usage(SET_USAGE)),
            }
        })
        .collect()
}

fn usage(message: &str) -> SessionError {
    SessionError::Usage { message: message.to_string() }
}
