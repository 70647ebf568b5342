//! Domain layer for the Time Machines SDK
//!
//! Core types shared by every other crate in the workspace: the error
//! taxonomy, the capability adapter port, and the value objects used by
//! remote provider contracts. This crate has no I/O and no vendor
//! dependencies.

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result, ValidationIssue};
pub use ports::Adapter;
