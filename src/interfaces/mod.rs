//! Adapters between the outside world and the engine: roster CSV parsing and
//! the JSON shapes the binary prints.

pub mod csv;
pub mod report;
