//! Helpers shared by several days

pub mod hash_search;
pub mod lines;
