//! Validation of user-supplied question text and numbers.

use serde::{Deserialize, Serialize};

use crate::error::{LiurenError, LiurenResult};
use crate::locator::whole_number;

/// The two numbers a querent supplies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Numbers {
    /// First number.
    pub first: i64,
    /// Second number.
    pub second: i64,
}

impl Numbers {
    /// Wrap two already-validated integers.
    pub fn new(first: i64, second: i64) -> Self {
        Self { first, second }
    }

    /// Parse both numbers from free-form text fields.
    pub fn parse(first: &str, second: &str) -> LiurenResult<Self> {
        Ok(Self {
            first: parse_number("first number", first)?,
            second: parse_number("second number", second)?,
        })
    }

    /// Convert floating-point inputs, rejecting NaN, infinities, and fractions.
    pub fn from_f64(first: f64, second: f64) -> LiurenResult<Self> {
        Ok(Self {
            first: whole_number(first)?,
            second: whole_number(second)?,
        })
    }
}

impl std::fmt::Display for Numbers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.first, self.second)
    }
}

/// Parse one numeric field.
///
/// Integers parse directly. Anything else that reads as a float must be a
/// finite whole number.
pub fn parse_number(field: &'static str, text: &str) -> LiurenResult<i64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(LiurenError::EmptyInput(field));
    }
    if let Ok(n) = trimmed.parse::<i64>() {
        return Ok(n);
    }
    match trimmed.parse::<f64>() {
        Ok(value) => whole_number(value).map_err(|e| match e {
            LiurenError::NumberOutOfRange(_) => {
                LiurenError::NumberOutOfRange(trimmed.to_string())
            }
            other => other,
        }),
        Err(_) => Err(LiurenError::InvalidNumber(trimmed.to_string())),
    }
}

/// A validated question to divine on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct Question(String);

impl Question {
    /// Validate the question text. Blank questions are rejected.
    pub fn new(text: &str) -> LiurenResult<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(LiurenError::EmptyQuestion);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The question text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Question {
    type Error = LiurenError;

    fn try_from(text: String) -> LiurenResult<Self> {
        Self::new(&text)
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
