//! Port traits implemented by the adapter layer

pub mod adapter;

pub use adapter::Adapter;
