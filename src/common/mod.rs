//! Shared helpers used across commands

pub mod fs;
