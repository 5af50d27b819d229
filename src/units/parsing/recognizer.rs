
use super::base::{UnitParser, UnitParserError};
use crate::parsing::scanner::Scanner;
use crate::units::unit::Unit;

/// Isolates the run of ASCII alphabetic characters at the very end of
/// the input, or `None` if the input does not end with one. An
/// alphabetic run followed by anything else, even trailing
/// whitespace, does not count.
pub fn trailing_alphabetic_run(input: &str) -> Option<&str> {
  let mut scanner = Scanner::new(input);
  let mut tail = None;
  while !scanner.is_eof() {
    scanner.read_while(|c| !c.is_ascii_alphabetic());
    let run = scanner.read_while(|c| c.is_ascii_alphabetic());
    if !run.is_empty() && scanner.is_eof() {
      tail = Some(run);
    }
  }
  tail
}

/// Isolates the trailing unit token of a measurement string and
/// matches it against the parser's unit table. `None` means the input
/// had no unit token at all, which callers may report differently
/// from a token that was present but unrecognized.
pub fn extract_unit<P: UnitParser>(parser: P, input: &str) -> Option<Result<Unit, UnitParserError>> {
  let token = trailing_alphabetic_run(input)?;
  Some(parser.parse_unit(token))
}
