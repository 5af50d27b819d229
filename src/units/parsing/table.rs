
use super::base::{UnitParser, UnitParserError};
use crate::units::unit::Unit;

use std::collections::HashMap;

/// A [`UnitParser`] which looks the lower-cased token up in a
/// pre-determined hash table, making recognition case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct TableBasedParser {
  table: HashMap<String, Unit>,
}

impl TableBasedParser {
  pub fn new(units: impl IntoIterator<Item = Unit>) -> Self {
    let table = units.into_iter()
      .map(|u| (u.name().to_lowercase(), u))
      .collect();
    Self { table }
  }

  pub fn len(&self) -> usize {
    self.table.len()
  }

  pub fn is_empty(&self) -> bool {
    self.table.is_empty()
  }
}

impl UnitParser for TableBasedParser {
  fn parse_unit(&self, input: &str) -> Result<Unit, UnitParserError> {
    self.table.get(&input.to_lowercase())
      .cloned()
      .ok_or_else(|| UnitParserError::new(input))
  }
}

impl FromIterator<Unit> for TableBasedParser {
  fn from_iter<I: IntoIterator<Item = Unit>>(iter: I) -> Self {
    Self::new(iter)
  }
}
