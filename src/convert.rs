
use crate::error::Error;
use crate::parsing::number::extract_number;
use crate::units::parsing::{default_units, extract_unit, UnitParser};
use crate::units::unit::{singular_or_plural, spell_out, Unit};
use crate::util::round_to_figures;

use approx::AbsDiffEq;
use serde::Serialize;

use std::fmt::{self, Display, Formatter};

/// Number of significant figures retained in a converted quantity.
const RESULT_FIGURES: u32 = 6;

/// The outcome of converting a measurement string between the
/// imperial and metric systems. Immutable once constructed.
///
/// Serializes with the camelCase field names a rendering collaborator
/// consumes: `initNum`, `initUnit`, `returnNum`, `returnUnit`, and
/// `sentence`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Conversion {
  /// The quantity parsed from the input string.
  pub init_num: f64,
  /// Abbreviation of the unit parsed from the input string.
  pub init_unit: String,
  /// The converted quantity, rounded to six significant figures.
  pub return_num: f64,
  /// Abbreviation of the paired unit, always lower-case.
  pub return_unit: String,
  /// Human-readable rendering, e.g. `"1 gallon = 3.78541 liters"`.
  pub sentence: String,
}

/// Converts a validated quantity of a recognized unit into its paired
/// unit. Callers are responsible for validation; this function never
/// fails.
pub fn convert(amount: f64, unit: &Unit) -> Conversion {
  let converted = round_to_figures(unit.convert(amount), RESULT_FIGURES);
  let init_name = singular_or_plural(spell_out(unit.name()), amount);
  let return_name = singular_or_plural(spell_out(unit.counterpart()), converted);
  let sentence = format!("{} {} = {} {}", amount, init_name, converted, return_name);
  Conversion {
    init_num: amount,
    init_unit: unit.name().to_owned(),
    return_num: converted,
    return_unit: unit.counterpart().to_owned(),
    sentence,
  }
}

/// Parses a raw measurement string and converts its quantity to the
/// paired unit, using the default unit table.
///
/// The numeric and unit portions are validated independently; a
/// failure in either short-circuits with the corresponding [`Error`].
/// Parsing is pure and deterministic, so identical inputs always
/// produce identical results.
pub fn parse_and_convert(input: &str) -> Result<Conversion, Error> {
  parse_and_convert_with(default_units(), input)
}

/// Like [`parse_and_convert`], with an explicit unit parser.
pub fn parse_and_convert_with<P: UnitParser>(parser: P, input: &str) -> Result<Conversion, Error> {
  let amount = extract_number(input)?;
  let unit = match extract_unit(parser, input) {
    None => return Err(Error::InvalidUnit(None)),
    Some(Err(err)) => return Err(Error::InvalidUnit(Some(err))),
    Some(Ok(unit)) => unit,
  };
  Ok(convert(amount, &unit))
}

impl Display for Conversion {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.sentence)
  }
}

impl AbsDiffEq for Conversion {
  type Epsilon = f64;

  fn default_epsilon() -> f64 {
    <f64 as AbsDiffEq>::default_epsilon()
  }

  fn abs_diff_eq(&self, other: &Conversion, epsilon: f64) -> bool {
    self.init_unit == other.init_unit
      && self.return_unit == other.return_unit
      && self.init_num.abs_diff_eq(&other.init_num, epsilon)
      && self.return_num.abs_diff_eq(&other.return_num, epsilon)
  }
}
