//! Mass and balance CLI library.
//!
//! Terminal styling and output formatting shared by the `massbalance` binary.

pub mod output;
pub mod terminal;
