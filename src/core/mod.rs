//! Filesystem plumbing shared by the command layer
//!
//! - `files`: platform directories and small read/write helpers
//! - `config`: locating and loading the rule set

pub mod config;
pub mod files;

pub use config::{load_rules, rules_path};
pub use files::{try_read_to_string, write_string};
