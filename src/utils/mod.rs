//! Shared helpers for paths, tool detection and terminal output

pub mod paths;
pub mod terminal;
pub mod tools;
