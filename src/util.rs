
//! Various utility functions.

/// Rounds a value to the given number of significant figures,
/// producing the shortest decimal value with that precision rather
/// than a value with a fixed number of decimal places.
///
/// Panics if `figures` is zero.
pub fn round_to_figures(value: f64, figures: u32) -> f64 {
  assert!(figures > 0, "figures must be positive");
  if value == 0.0 {
    return 0.0;
  }
  let formatted = format!("{:.*e}", figures as usize - 1, value);
  formatted.parse().expect("scientific notation should round-trip through f64")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn rounds_to_six_figures() {
    assert_eq!(round_to_figures(13.248935, 6), 13.2489);
    assert_eq!(round_to_figures(0.45359237, 6), 0.453592);
    assert_eq!(round_to_figures(2.2046226, 6), 2.20462);
  }

  #[test]
  fn leaves_short_values_unchanged() {
    assert_eq!(round_to_figures(3.78541, 6), 3.78541);
    assert_eq!(round_to_figures(1.0, 6), 1.0);
    assert_eq!(round_to_figures(0.0, 6), 0.0);
  }

  #[test]
  fn rounds_values_larger_than_the_precision() {
    assert_eq!(round_to_figures(1234567.0, 6), 1234570.0);
  }

  #[test]
  fn respects_the_figure_count() {
    assert_eq!(round_to_figures(13.248935, 3), 13.2);
    assert_eq!(round_to_figures(13.248935, 1), 10.0);
  }
}
