
use crate::units::unit::Unit;

use thiserror::Error;

/// A type capable of matching a token against a set of recognized
/// units. A unit parser is only responsible for matching a single,
/// already-isolated token, not for locating that token inside a
/// larger input.
pub trait UnitParser {
  /// Parses the token as a unit, or produces an error if the token is
  /// not a recognized unit.
  fn parse_unit(&self, input: &str) -> Result<Unit, UnitParserError>;
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Failed to parse '{input}' as a unit")]
pub struct UnitParserError {
  pub input: String,
}

impl UnitParserError {
  pub fn new(input: impl Into<String>) -> Self {
    Self { input: input.into() }
  }
}

impl<P> UnitParser for &P
where P: UnitParser + ?Sized {
  fn parse_unit(&self, input: &str) -> Result<Unit, UnitParserError> {
    (**self).parse_unit(input)
  }
}
