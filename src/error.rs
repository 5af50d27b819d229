
use crate::parsing::number::ParseNumberError;
use crate::units::parsing::UnitParserError;

use thiserror::Error;

/// Failure modes of the measurement pipeline. The `Display`
/// renderings are the exact strings a rendering collaborator is
/// expected to show verbatim.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
  #[error("invalid number")]
  InvalidNumber(#[from] ParseNumberError),
  /// A missing unit and an unrecognized unit render the same way. The
  /// payload is `None` when the input had no trailing unit token at
  /// all, and `Some` when a token was present but not recognized.
  #[error("invalid unit")]
  InvalidUnit(#[source] Option<UnitParserError>),
}
