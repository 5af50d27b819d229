//! Facilities for scanning and evaluating the numeric portion of a
//! measurement string.

pub mod number;
pub mod scanner;
