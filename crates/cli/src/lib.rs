//! Plumbing shared by the Podlinks command line programs.

pub mod config;
