//! Core library components.
//!
//! Parsing, path resolution, local gathering, remote probes and JSON output.
//! Nothing here prints to the terminal; the CLI layer owns presentation.

pub mod constants;
pub mod credentials;
pub mod gather;
pub mod json;
pub mod paths;
pub mod probe;
