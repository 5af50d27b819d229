
//! Parsing and conversion pipeline for imperial/metric measurement
//! strings.
//!
//! The crate takes a free-form measurement string such as
//! `"3 1/2 gal"`, validates its numeric and unit portions
//! independently, and converts the quantity to the paired unit in the
//! opposite measurement system (gallons to liters, pounds to
//! kilograms, and back). The entry point is
//! [`convert::parse_and_convert`].

pub mod convert;
pub mod error;
pub mod parsing;
pub mod units;
pub mod util;
