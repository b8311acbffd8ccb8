use std::str::FromStr;

use rand::Rng;

/// Faces on the die.
pub const DIE_SIDES: u8 = 6;

/// Roll the die with the provided randomness source.
pub fn roll_die<R: Rng>(rng: &mut R) -> u8 {
    rng.gen_range(1..=DIE_SIDES)
}

/// A fixed sequence of die values that repeats once exhausted.
///
/// Replaces the random die in scripted simulator runs, so that whole
/// games are reproducible without touching the engine.
#[derive(Clone, Debug)]
pub struct RollScript {
    values: Vec<u8>,
    next: usize,
}

impl RollScript {
    /// Panics if `values` is empty or contains a value outside 1..=6;
    /// use the [`FromStr`] instance for untrusted input.
    pub fn new(values: Vec<u8>) -> Self {
        assert!(!values.is_empty(), "empty roll script");
        for &value in &values {
            assert!((1..=DIE_SIDES).contains(&value), "die value out of range: {}", value);
        }
        Self { values, next: 0 }
    }

    /// The next scripted value, wrapping around at the end of the script.
    pub fn next_roll(&mut self) -> u8 {
        let value = self.values[self.next];
        self.next = (self.next + 1) % self.values.len();
        value
    }
}

/// The error type for the [`FromStr`] instance of [`RollScript`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseRollScriptError {
    Empty,
    NotANumber(String),
    OutOfRange(u8),
}

impl std::error::Error for ParseRollScriptError {}

impl std::fmt::Display for ParseRollScriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseRollScriptError::Empty => write!(f, "Roll script contains no values"),
            ParseRollScriptError::NotANumber(part) => {
                write!(f, "Roll script entry '{}' is not a number", part)
            }
            ParseRollScriptError::OutOfRange(value) => {
                write!(f, "Die value {} is outside 1..={}", value, DIE_SIDES)
            }
        }
    }
}

impl FromStr for RollScript {
    type Err = ParseRollScriptError;

    /// Parses a comma-separated list of die values, e.g. `6,3,1`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut values = Vec::new();
        for part in s.split(',') {
            let part = part.trim();
            if part.is_empty() {
                return Err(ParseRollScriptError::Empty);
            }
            let value: u8 = part
                .parse()
                .map_err(|_| ParseRollScriptError::NotANumber(String::from(part)))?;
            if !(1..=DIE_SIDES).contains(&value) {
                return Err(ParseRollScriptError::OutOfRange(value));
            }
            values.push(value);
        }
        Ok(RollScript::new(values))
    }
}
