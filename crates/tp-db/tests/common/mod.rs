#![allow(dead_code)]

//! Shared test infrastructure for tp-db integration tests

pub mod fixtures;
pub mod test_db;

pub use fixtures::*;
pub use test_db::*;
