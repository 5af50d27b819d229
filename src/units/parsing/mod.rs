//! Facilities for recognizing the unit portion of a measurement
//! string.

mod base;
mod default_parser;
mod recognizer;
mod table;

pub use base::{UnitParser, UnitParserError};
pub use default_parser::{default_units, default_units_table};
pub use recognizer::{extract_unit, trailing_alphabetic_run};
pub use table::TableBasedParser;
