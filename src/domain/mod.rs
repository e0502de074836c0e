//! Domain types: staff records, tenure arithmetic, pay rules and the ports
//! through which the engine reads a roster.

pub mod compensation;
pub mod ports;
pub mod staff;
pub mod tenure;
