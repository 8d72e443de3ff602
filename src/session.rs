/// Parsing of session command lines.
///
/// Recognises the `set`, `eval`, `vars`, `history`, `export`, `help` and
/// `quit` keywords; any other line is an expression.
pub mod command;
/// The log of evaluated expressions and its export to a file.
pub mod history;

use crate::{
    error::SessionError,
    evaluate,
    interpreter::{
        lexer::{Token, lex},
        variables::Variables,
    },
    session::{
        command::{Assignment, Command},
        history::History,
    },
};

/// Result type used by session commands.
pub type SessionResult<T> = Result<T, SessionError>;

/// Text shown by the `help` command.
pub const HELP_TEXT: &str = "\
Commands:
  <expression>               Evaluate an expression and record it in the history
  eval <expression>          Same as a bare expression
  set name=expr[, ...]       Assign variables, left to right
  vars                       List variables
  history                    List evaluated expressions
  export <path>              Write the history to a file
  help                       Show this help
  quit | exit                Leave the calculator

Operators: + - * / ^    Functions: sin cos tan (degrees) sqrt ln log";

/// What the caller should do after a line has been processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Keep reading input, printing the output if there is any.
    Continue(Option<String>),
    /// The user asked to leave.
    Exit,
}

/// A calculator session: the variable table and expression history shared by
/// all commands entered in one run.
///
/// A failed command never loses state: variables and history stay as they
/// were before the failing step.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    variables: Variables,
    history:   History,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a session whose variable table holds `pi` and `e`.
    #[must_use]
    pub fn new() -> Self {
        Self { variables: Variables::with_constants(),
               history:   History::new(), }
    }

    /// Returns the variable table.
    #[must_use]
    pub const fn variables(&self) -> &Variables {
        &self.variables
    }

    /// Returns the expression history.
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Parses and executes one input line.
    ///
    /// # Errors
    /// Returns a `SessionError` if the line is a malformed command, an
    /// expression fails to evaluate, or an export cannot be written.
    ///
    /// # Example
    /// ```
    /// use infixcalc::session::{Outcome, Session};
    ///
    /// let mut session = Session::new();
    ///
    /// assert_eq!(session.process_line("set r = 2").unwrap(),
    ///            Outcome::Continue(Some("r = 2".to_string())));
    /// assert_eq!(session.process_line("eval r ^ 3").unwrap(),
    ///            Outcome::Continue(Some("8".to_string())));
    /// assert_eq!(session.process_line("quit").unwrap(), Outcome::Exit);
    /// ```
    pub fn process_line(&mut self, line: &str) -> SessionResult<Outcome> {
        match Command::parse(line)? {
            Some(command) => self.execute(command),
            None => Ok(Outcome::Continue(None)),
        }
    }

    /// Executes a parsed command.
    ///
    /// # Errors
    /// See [`Session::process_line`].
    pub fn execute(&mut self, command: Command) -> SessionResult<Outcome> {
        let output = match command {
            Command::Quit => return Ok(Outcome::Exit),
            Command::Help => HELP_TEXT.to_string(),
            Command::Set(assignments) => self.assign(assignments)?,
            Command::Eval(expression) => self.eval(expression)?,
            Command::Vars => self.list_variables(),
            Command::History => {
                if self.history.is_empty() {
                    "(history is empty)".to_string()
                } else {
                    self.history.to_lines().trim_end().to_string()
                }
            },
            Command::Export(path) => {
                self.history.export(&path)?;
                tracing::info!(path = %path.display(), entries = self.history.len(), "exported history");
                format!("History saved to {}", path.display())
            },
        };

        Ok(Outcome::Continue(Some(output)))
    }

    /// Runs a script of command lines and returns the transcript.
    ///
    /// Each output is followed by a newline; a failing line contributes its
    /// error message and the script carries on. `quit` ends the script.
    ///
    /// # Example
    /// ```
    /// use infixcalc::session::Session;
    ///
    /// let transcript = Session::new().run_script("2+3*4\n1/0\nquit\n5");
    /// assert_eq!(transcript, "14\nError at column 2: Division by zero.\n");
    /// ```
    pub fn run_script(&mut self, source: &str) -> String {
        let mut transcript = String::new();

        for line in source.lines() {
            match self.process_line(line) {
                Ok(Outcome::Continue(Some(output))) => {
                    transcript.push_str(&output);
                    transcript.push('\n');
                },
                Ok(Outcome::Continue(None)) => {},
                Ok(Outcome::Exit) => break,
                Err(e) => {
                    tracing::warn!(line, error = %e, "command failed");
                    transcript.push_str(&e.to_string());
                    transcript.push('\n');
                },
            }
        }

        transcript
    }

    /// Evaluates `expression` and records it in the history.
    fn eval(&mut self, expression: String) -> SessionResult<String> {
        let result = evaluate(&expression, &self.variables)?;
        let output = result.to_string();
        self.history.record(expression, result);
        Ok(output)
    }

    /// Performs assignments left to right, so later ones see earlier ones.
    ///
    /// An assignment that fails stops the command; the ones before it stay.
    fn assign(&mut self, assignments: Vec<Assignment>) -> SessionResult<String> {
        let mut lines = Vec::with_capacity(assignments.len());

        for Assignment { name, expression } in assignments {
            if !is_assignable(&name) {
                return Err(SessionError::InvalidName { name });
            }

            let value = evaluate(&expression, &self.variables)?;
            tracing::debug!(%name, value, "assigned variable");
            lines.push(format!("{name} = {value}"));
            self.variables.set(name, value);
        }

        Ok(lines.join("\n"))
    }

    /// Lists the variables as `name = value` lines.
    fn list_variables(&self) -> String {
        if self.variables.is_empty() {
            return "(no variables set)".to_string();
        }

        self.variables
            .iter_sorted()
            .into_iter()
            .map(|(name, value)| format!("{name} = {value}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A name can be assigned when it lexes as exactly one variable reference,
/// which rules out numbers, function names and stray symbols.
fn is_assignable(name: &str) -> bool {
    matches!(lex(name).as_deref(), Ok([(Token::Identifier(_), _)]))
}
