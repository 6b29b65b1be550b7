//! The tools module provides helper functions for the hfz codec.
//!
//! The tools are:
//! - cli: Command line interface for hfz.
//! - freq_count: Byte frequency count and the frequency table type.
//!
pub mod cli;
pub mod freq_count;
