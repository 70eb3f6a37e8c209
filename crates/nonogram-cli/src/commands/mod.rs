//! CLI command implementations.

pub mod bitmap;
pub mod convert;
pub mod inspect;
pub mod solve;
