//! Utility modules shared across the crate

pub mod arrow;
pub mod contact;
pub mod dates;
pub mod logging;
pub mod test;
