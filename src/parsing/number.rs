
use super::scanner::Scanner;

use itertools::Itertools;
use thiserror::Error;

use std::ops::Add;

/// Error produced when the numeric portion of a measurement string
/// cannot be evaluated.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseNumberError {
  #[error("no numeric portion in input")]
  Empty,
  #[error("malformed term '{0}'")]
  MalformedTerm(String),
  #[error("malformed fraction '{0}'")]
  MalformedFraction(String),
  #[error("division by zero in '{0}'")]
  DivisionByZero(String),
  #[error("forbidden character in input")]
  ForbiddenCharacter,
  #[error("input resembles an equation")]
  EquationLike,
  #[error("numeric portion is out of range")]
  NotFinite,
}

/// Evaluates the numeric portion of a measurement string.
///
/// The numeric portion consists of every digit, whitespace, `/`, and
/// `.` character of the input, in order. It is split on whitespace
/// into terms, each either a plain decimal literal or a two-part
/// `a/b` fraction, and the terms are summed, so a mixed number such
/// as `"3 1/2"` evaluates to 3.5.
///
/// After evaluation, the original input is rejected outright if it
/// contains a character other than digits, whitespace, `/`, `.`, `=`,
/// or ASCII letters, or if it contains `=` anywhere without matching
/// the strict shape of a measurement (digits, an optional fraction,
/// then a unit suffix). Either rejection overrides the numeric
/// result.
pub fn extract_number(input: &str) -> Result<f64, ParseNumberError> {
  if input.trim().is_empty() {
    return Err(ParseNumberError::Empty);
  }
  let numeric_part: String = input.chars().filter(|c| is_numeric_char(*c)).collect();
  let numeric_part = numeric_part.trim();
  if numeric_part.is_empty() {
    return Err(ParseNumberError::Empty);
  }
  let total: f64 = numeric_part
    .split_whitespace()
    .map(evaluate_term)
    .fold_ok(0.0, Add::add)?;
  if !total.is_finite() {
    return Err(ParseNumberError::NotFinite);
  }
  check_rejection_rules(input)?;
  Ok(total)
}

fn is_numeric_char(c: char) -> bool {
  c.is_ascii_digit() || c.is_whitespace() || c == '/' || c == '.'
}

fn is_tolerated_char(c: char) -> bool {
  is_numeric_char(c) || c.is_ascii_alphabetic() || c == '='
}

fn evaluate_term(term: &str) -> Result<f64, ParseNumberError> {
  if term.contains('/') {
    evaluate_fraction(term)
  } else {
    term.parse().map_err(|_| ParseNumberError::MalformedTerm(term.to_owned()))
  }
}

fn evaluate_fraction(term: &str) -> Result<f64, ParseNumberError> {
  let malformed = || ParseNumberError::MalformedFraction(term.to_owned());
  let mut parts = term.split('/');
  let (Some(numer), Some(denom), None) = (parts.next(), parts.next(), parts.next()) else {
    return Err(malformed());
  };
  let numer: f64 = numer.parse().map_err(|_| malformed())?;
  let denom: f64 = denom.parse().map_err(|_| malformed())?;
  if denom == 0.0 {
    return Err(ParseNumberError::DivisionByZero(term.to_owned()));
  }
  Ok(numer / denom)
}

/// Rejects inputs which strip down to a valid number but are not
/// measurement-shaped as a whole, such as `"a=5gal"`.
fn check_rejection_rules(input: &str) -> Result<(), ParseNumberError> {
  if input.chars().any(|c| !is_tolerated_char(c)) {
    return Err(ParseNumberError::ForbiddenCharacter);
  }
  if input.contains('=') && !is_measurement_shaped(input) {
    return Err(ParseNumberError::EquationLike);
  }
  Ok(())
}

/// Recognizes the strict shape `digits [spaces digits/digits] spaces
/// letters`, spanning the entire input.
fn is_measurement_shaped(input: &str) -> bool {
  let mut scanner = Scanner::new(input);
  if scanner.read_while(|c| c.is_ascii_digit()).is_empty() {
    return false;
  }
  scanner.skip_spaces();
  if scanner.peek().is_some_and(|c| c.is_ascii_digit()) {
    scanner.read_while(|c| c.is_ascii_digit());
    if !scanner.read_char('/') {
      return false;
    }
    if scanner.read_while(|c| c.is_ascii_digit()).is_empty() {
      return false;
    }
    scanner.skip_spaces();
  }
  if scanner.read_while(|c| c.is_ascii_alphabetic()).is_empty() {
    return false;
  }
  scanner.is_eof()
}
