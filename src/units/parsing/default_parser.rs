
use super::table::TableBasedParser;
use crate::units::unit::Unit;

use once_cell::sync::Lazy;

/// Liters in one US gallon.
const LITERS_PER_GALLON: f64 = 3.78541;
/// Gallons in one liter, the exact inverse of [`LITERS_PER_GALLON`]
/// rather than an independently rounded constant.
const GALLONS_PER_LITER: f64 = 1.0 / LITERS_PER_GALLON;
/// Kilograms in one pound.
const KILOGRAMS_PER_POUND: f64 = 0.453592;
/// Pounds in one kilogram. Published five-place constant; not the
/// exact reciprocal of [`KILOGRAMS_PER_POUND`].
const POUNDS_PER_KILOGRAM: f64 = 2.20462;

/// The process-wide default unit table.
pub fn default_units() -> &'static TableBasedParser {
  static DEFAULT_UNITS: Lazy<TableBasedParser> = Lazy::new(default_units_table);
  &DEFAULT_UNITS
}

/// Builds the table of recognized units. Every recognized unit has
/// exactly one entry pairing it with its counterpart in the opposite
/// measurement system.
pub fn default_units_table() -> TableBasedParser {
  let units = vec![
    Unit::new("gal", "l", LITERS_PER_GALLON),
    Unit::new("l", "gal", GALLONS_PER_LITER),
    Unit::new("lbs", "kg", KILOGRAMS_PER_POUND),
    Unit::new("lb", "kg", KILOGRAMS_PER_POUND),
    Unit::new("kg", "lbs", POUNDS_PER_KILOGRAM),
  ];
  units.into_iter().collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::units::parsing::UnitParser;

  #[test]
  fn table_has_exactly_the_recognized_units() {
    let table = default_units_table();
    assert_eq!(table.len(), 5);
    for name in ["gal", "l", "lbs", "kg", "lb"] {
      assert!(table.parse_unit(name).is_ok(), "missing unit {}", name);
    }
    assert!(table.parse_unit("oz").is_err());
  }

  #[test]
  fn pairs_every_unit_with_its_counterpart() {
    let table = default_units_table();
    assert_eq!(table.parse_unit("gal").unwrap().counterpart(), "l");
    assert_eq!(table.parse_unit("l").unwrap().counterpart(), "gal");
    assert_eq!(table.parse_unit("lbs").unwrap().counterpart(), "kg");
    assert_eq!(table.parse_unit("lb").unwrap().counterpart(), "kg");
    assert_eq!(table.parse_unit("kg").unwrap().counterpart(), "lbs");
  }

  #[test]
  fn liter_factor_is_the_inverse_of_the_gallon_factor() {
    let table = default_units_table();
    let gal = table.parse_unit("gal").unwrap();
    let l = table.parse_unit("l").unwrap();
    assert_eq!(l.conversion_factor(), 1.0 / gal.conversion_factor());
  }

  #[test]
  fn default_units_reuses_one_table() {
    let first = default_units() as *const TableBasedParser;
    let second = default_units() as *const TableBasedParser;
    assert_eq!(first, second);
  }
}
