//! Command line handling for the `civ7` tool

pub mod commands;
