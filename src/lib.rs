//! Stratégos (workspace facade crate).
//!
//! Exposes `strategos::{core,input,term,types}`; the implementation lives in
//! dedicated crates under `crates/`.

pub mod cli;

pub use strategos_core as core;
pub use strategos_input as input;
pub use strategos_term as term;
pub use strategos_types as types;
