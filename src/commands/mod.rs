//! Command implementations for the Six Nations Fantasy CLI

pub mod advise;
pub mod common;
pub mod form;
pub mod rules;
pub mod score;
pub mod select;
pub mod validate;


pub use common::{build_squad, read_json, CommandContext, PoolData, SquadFile};
