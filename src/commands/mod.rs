//! Command implementations for the mac-latest-merge CLI

pub mod merge;
