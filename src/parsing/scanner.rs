
/// Cursor over the characters of an input string, used to implement
/// the measurement scanners without regular expressions.
///
/// The scanner only ever moves forward. Each `read_*` method consumes
/// the matched prefix of the remaining input and returns it as a
/// slice of the original string.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
  input: &'a str,
}

impl<'a> Scanner<'a> {
  pub fn new(input: &'a str) -> Self {
    Self { input }
  }

  pub fn is_eof(&self) -> bool {
    self.input.is_empty()
  }

  pub fn peek(&self) -> Option<char> {
    self.input.chars().next()
  }

  /// Consumes the longest prefix whose characters all satisfy the
  /// predicate. The returned prefix may be empty.
  pub fn read_while<F>(&mut self, predicate: F) -> &'a str
  where F: Fn(char) -> bool {
    let end = self.input
      .char_indices()
      .find(|(_, c)| !predicate(*c))
      .map_or(self.input.len(), |(i, _)| i);
    let (prefix, suffix) = self.input.split_at(end);
    self.input = suffix;
    prefix
  }

  /// Consumes the given character if it appears next in the input.
  pub fn read_char(&mut self, expected: char) -> bool {
    match self.input.strip_prefix(expected) {
      Some(rest) => {
        self.input = rest;
        true
      }
      None => false,
    }
  }

  pub fn skip_spaces(&mut self) {
    self.read_while(char::is_whitespace);
  }
}
