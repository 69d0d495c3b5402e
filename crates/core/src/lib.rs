//! Domain vocabulary shared by the storage and HTTP layers.
//!
//! Nothing in this crate performs I/O.

pub mod catalog;
pub mod error;
pub mod types;
pub mod validation;
