//! # Application Layer
//!
//! The backend interface and the use case coordinating retry and
//! answer normalization.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
