//! Terminal rendering of resolver output.

pub mod table;
