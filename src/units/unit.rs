
use phf::phf_map;

use std::fmt::{self, Display, Formatter};

/// A unit is a named measurement in either the imperial or the metric
/// system, stored together with its counterpart in the opposite
/// system and the factor which converts a quantity of this unit into
/// a quantity of the counterpart.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
  name: &'static str,
  counterpart: &'static str,
  conversion_factor: f64,
}

/// Spelled-out English names for the recognized unit abbreviations,
/// pluralized by default.
static SPELLED_OUT_NAMES: phf::Map<&'static str, &'static str> = phf_map! {
  "gal" => "gallons",
  "l" => "liters",
  "lbs" => "pounds",
  "kg" => "kilograms",
  "lb" => "pounds",
};

impl Unit {
  /// Constructs a new unit, given its abbreviation, the abbreviation
  /// of its counterpart unit, and the conversion factor between the
  /// two.
  pub fn new(name: &'static str, counterpart: &'static str, conversion_factor: f64) -> Self {
    Self { name, counterpart, conversion_factor }
  }

  /// The lower-case abbreviation of the unit, as it appears in a
  /// structured conversion result.
  pub fn name(&self) -> &'static str {
    self.name
  }

  /// The lower-case abbreviation of the paired unit that quantities
  /// of this unit convert to.
  pub fn counterpart(&self) -> &'static str {
    self.counterpart
  }

  /// The multiplier applied to a quantity of this unit to express it
  /// in the counterpart unit.
  pub fn conversion_factor(&self) -> f64 {
    self.conversion_factor
  }

  /// Converts a scalar quantity of this unit into the counterpart
  /// unit.
  pub fn convert(&self, amount: f64) -> f64 {
    amount * self.conversion_factor
  }
}

impl Display for Unit {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.name)
  }
}

/// The spelled-out, pluralized English name of a unit abbreviation.
/// Abbreviations with no spelled-out name spell out as themselves.
pub fn spell_out(abbreviation: &str) -> &str {
  let lowered = abbreviation.to_lowercase();
  SPELLED_OUT_NAMES.get(lowered.as_str()).copied().unwrap_or(abbreviation)
}

/// Singularizes a spelled-out unit name, stripping its trailing `s`,
/// exactly when the quantity it describes is equal to one.
#[allow(clippy::float_cmp)]
pub fn singular_or_plural(name: &str, amount: f64) -> &str {
  if amount == 1.0 {
    name.strip_suffix('s').unwrap_or(name)
  } else {
    name
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn spells_out_recognized_abbreviations() {
    assert_eq!(spell_out("gal"), "gallons");
    assert_eq!(spell_out("l"), "liters");
    assert_eq!(spell_out("lbs"), "pounds");
    assert_eq!(spell_out("lb"), "pounds");
    assert_eq!(spell_out("kg"), "kilograms");
  }

  #[test]
  fn spells_out_ignoring_case() {
    assert_eq!(spell_out("GAL"), "gallons");
    assert_eq!(spell_out("Kg"), "kilograms");
  }

  #[test]
  fn unknown_abbreviations_spell_as_themselves() {
    assert_eq!(spell_out("xyz"), "xyz");
  }

  #[test]
  fn singularizes_only_unit_quantities() {
    assert_eq!(singular_or_plural("gallons", 1.0), "gallon");
    assert_eq!(singular_or_plural("gallons", 2.0), "gallons");
    assert_eq!(singular_or_plural("liters", 0.5), "liters");
    assert_eq!(singular_or_plural("kilograms", 1.0), "kilogram");
  }

  #[test]
  fn singularizing_a_name_without_trailing_s_is_a_no_op() {
    assert_eq!(singular_or_plural("xyz", 1.0), "xyz");
  }

  #[test]
  fn converts_through_the_stored_factor() {
    let unit = Unit::new("gal", "l", 3.78541);
    assert_eq!(unit.convert(2.0), 7.57082);
    assert_eq!(unit.to_string(), "gal");
  }
}
