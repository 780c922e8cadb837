//! Infrastructure implementations.
//!
//! Contains configuration loading and port trait implementations.

pub mod config;
pub mod ports;
pub mod random;
