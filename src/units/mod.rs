//! Subsystem for recognizing measurement units and converting
//! quantities between the imperial and metric systems.

pub mod parsing;
pub mod unit;
