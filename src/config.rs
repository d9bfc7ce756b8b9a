use crate::eval::interpreter::DEFAULT_PRECISION;
use crate::history::DEFAULT_HISTORY_CAPACITY;
use crate::session::Session;

/// Unit used for trigonometric function arguments and inverse results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleMode {
    #[default]
    Radians,
    Degrees,
}

impl AngleMode {
    /// Convert a user-facing angle into radians
    pub fn to_radians(
        self,
        angle: f64,
    ) -> f64 {
        match self {
            AngleMode::Radians => angle,
            AngleMode::Degrees => angle.to_radians(),
        }
    }

    /// Convert radians into the user-facing unit
    pub fn unit_from_radians(
        self,
        radians: f64,
    ) -> f64 {
        match self {
            AngleMode::Radians => radians,
            AngleMode::Degrees => radians.to_degrees(),
        }
    }
}

impl core::str::FromStr for AngleMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rad" | "radians" => Ok(AngleMode::Radians),
            "deg" | "degrees" => Ok(AngleMode::Degrees),
            other => Err(format!(
                "unknown angle mode '{}' (expected 'radians' or 'degrees')",
                other
            )),
        }
    }
}

/// Per-session settings
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Significant digits shown for results (1..=17)
    pub precision: usize,
    /// Number of commands kept for recall
    pub history_capacity: usize,
    pub angle_mode: AngleMode,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            angle_mode: AngleMode::Radians,
        }
    }
}

/// Builder for configuring a [`Session`]
///
/// # Example
/// ```
/// use sciconsole::{AngleMode, Session};
///
/// let mut session = Session::builder()
///     .with_angle_mode(AngleMode::Degrees)
///     .with_precision(6)
///     .build();
/// session.open();
/// assert_eq!(session.evaluate("sin(30)").unwrap(), "0.5");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SessionBuilder {
    config: SessionConfig,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Significant digits for displayed results, clamped to 1..=17
    pub fn with_precision(
        mut self,
        precision: usize,
    ) -> Self {
        self.config.precision = precision.clamp(1, 17);
        self
    }

    /// Maximum number of history entries, at least 1
    pub fn with_history_capacity(
        mut self,
        capacity: usize,
    ) -> Self {
        self.config.history_capacity = capacity.max(1);
        self
    }

    pub fn with_angle_mode(
        mut self,
        angle_mode: AngleMode,
    ) -> Self {
        self.config.angle_mode = angle_mode;
        self
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn build(self) -> Session {
        Session::with_config(self.config)
    }
}
