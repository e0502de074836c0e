//! Application layer containing the salary computation.
//!
//! This module defines the `SalaryEngine`, the entry point the request layer
//! calls with a staff id and a date. It reads the roster through the
//! `RosterLookup` port and never mutates it.

pub mod engine;
