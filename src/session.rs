//! Terminal session: command dispatch over a private variable table
//!
//! A [`Session`] owns everything one terminal needs (variables, command
//! history, settings). Two sessions never observe each other's state.

use crate::commands::{self, Command};
use crate::config::{SessionBuilder, SessionConfig};
use crate::error::ConsoleError;
use crate::eval::constants::{lookup_constant, PHYSICS_CONSTANTS};
use crate::eval::interpreter::{evaluate_pipeline, format_number, format_result, round_significant};
use crate::eval::symbols::{is_valid_identifier, VariableTable};
use crate::history::CommandHistory;

/// Lifecycle of a terminal session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Not opened yet, or closed
    #[default]
    Idle,
    AwaitingInput,
    /// Only observable from inside `execute`
    Evaluating,
}

/// Output of one executed line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Blank input; nothing to print
    None,
    Text(String),
    /// Wipe the display, then show these lines
    Clear(Vec<String>),
    /// Rendered error line, already prefixed with `Error: `
    Error(String),
}

impl Response {
    pub fn is_error(&self) -> bool {
        matches!(self, Response::Error(_))
    }

    /// Lines to print for this response
    pub fn lines(&self) -> Vec<&str> {
        match self {
            Response::None => Vec::new(),
            Response::Text(text) | Response::Error(text) => text.lines().collect(),
            Response::Clear(banner) => banner.iter().map(String::as_str).collect(),
        }
    }

    fn from_error(err: &ConsoleError) -> Self {
        Response::Error(format!("Error: {}", err))
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    state: SessionState,
    variables: VariableTable,
    history: CommandHistory,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    pub fn with_config(config: SessionConfig) -> Self {
        let history = CommandHistory::new(config.history_capacity);
        Self {
            config,
            state: SessionState::Idle,
            variables: VariableTable::new(),
            history,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != SessionState::Idle
    }

    pub fn variables(&self) -> &VariableTable {
        &self.variables
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    /// Mutable access for up/down recall
    pub fn history_mut(&mut self) -> &mut CommandHistory {
        &mut self.history
    }

    /// Open the session and return the welcome banner
    ///
    /// Opening an already open session is a no-op and returns no lines.
    pub fn open(&mut self) -> Vec<String> {
        if self.is_open() {
            return Vec::new();
        }
        log::debug!("[open] session opened");
        self.state = SessionState::AwaitingInput;
        commands::welcome_banner()
    }

    /// Close the session, discarding variables and history
    pub fn close(&mut self) {
        log::debug!(
            "[close] discarding {} variable(s) and {} history entries",
            self.variables.len(),
            self.history.len()
        );
        self.reset();
        self.state = SessionState::Idle;
    }

    /// Forget variables and history without closing
    pub fn reset(&mut self) {
        self.variables.clear();
        self.history.clear();
    }

    /// Execute one terminal line, rendering any failure as an error line
    ///
    /// # Example
    /// ```
    /// use sciconsole::{Response, Session};
    ///
    /// let mut session = Session::new();
    /// session.open();
    /// assert_eq!(session.execute("x = 4"), Response::Text("x = 4".into()));
    /// assert_eq!(session.execute("sqrt(x)"), Response::Text("2".into()));
    /// assert!(session.execute("1/0").is_error());
    /// ```
    pub fn execute(
        &mut self,
        line: &str,
    ) -> Response {
        match self.try_execute(line) {
            Ok(response) => response,
            Err(err) => {
                log::debug!("[execute] '{}' failed: {}", line.trim(), err);
                Response::from_error(&err)
            }
        }
    }

    /// Execute one terminal line, returning failures as errors
    pub fn try_execute(
        &mut self,
        line: &str,
    ) -> Result<Response, ConsoleError> {
        if !self.is_open() {
            return Err(ConsoleError::SessionClosed);
        }
        let Some(command) = Command::parse(line) else {
            return Ok(Response::None);
        };

        self.history.record(line);
        self.state = SessionState::Evaluating;
        let result = self.dispatch(command);
        self.state = SessionState::AwaitingInput;
        result
    }

    fn dispatch(
        &mut self,
        command: Command<'_>,
    ) -> Result<Response, ConsoleError> {
        log::trace!("[dispatch] {:?}", command);
        let text = match command {
            Command::Help => commands::help_text().to_string(),
            Command::Clear => return Ok(Response::Clear(commands::welcome_banner())),
            Command::Constants => commands::constants_text(PHYSICS_CONSTANTS),
            Command::Variables => commands::variables_text(&self.variables),
            Command::LookupConstant(name) => {
                let value = self.lookup_constant(name)?;
                format!("{} = {}", name, format_number(value))
            }
            Command::Assign { name, expr } => {
                let value = self.assign(name, expr)?;
                format!("{} = {}", name, format_number(value))
            }
            Command::Evaluate(expr) => self.evaluate(expr)?,
        };
        Ok(Response::Text(text))
    }

    /// Evaluate an expression against this session and format the result
    ///
    /// Overflow is not an error: `10^400` gives `"Infinity"`.
    pub fn evaluate(
        &self,
        expr: &str,
    ) -> Result<String, ConsoleError> {
        let value = self.evaluate_value(expr)?;
        Ok(format_result(value, self.config.precision))
    }

    /// Evaluate an expression to its raw, unrounded value
    pub fn evaluate_value(
        &self,
        expr: &str,
    ) -> Result<f64, ConsoleError> {
        evaluate_pipeline(expr, PHYSICS_CONSTANTS, &self.variables, self.config.angle_mode)
            .map_err(|source| ConsoleError::Eval {
                expr: expr.to_string(),
                source,
            })
    }

    /// Evaluate `expr` and store it under `name`, returning the stored value
    ///
    /// The name is checked before anything is evaluated. The stored value is
    /// the rounded one, so it matches what the echo shows. On any failure the
    /// variable table is left untouched.
    pub fn assign(
        &mut self,
        name: &str,
        expr: &str,
    ) -> Result<f64, ConsoleError> {
        if !is_valid_identifier(name) {
            return Err(ConsoleError::InvalidVariableName(name.to_string()));
        }

        let value = self.evaluate_value(expr)?;
        if !value.is_finite() {
            return Err(ConsoleError::NonFiniteAssignment {
                name: name.to_string(),
                value: format_result(value, self.config.precision),
            });
        }

        if lookup_constant(PHYSICS_CONSTANTS, name).is_some() && !self.variables.contains(name) {
            log::warn!("[assign] variable '{}' shadows the physics constant", name);
        }

        let stored = round_significant(value, self.config.precision);
        self.variables.set(name, stored);
        log::debug!("[assign] {} = {}", name, stored);
        Ok(stored)
    }

    /// Look up a built-in constant by exact name
    ///
    /// Variables are not consulted, so a shadowed constant still reports its
    /// built-in value here.
    pub fn lookup_constant(
        &self,
        name: &str,
    ) -> Result<f64, ConsoleError> {
        lookup_constant(PHYSICS_CONSTANTS, name)
            .ok_or_else(|| ConsoleError::UnknownConstant(name.to_string()))
    }
}
