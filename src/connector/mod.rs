//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - HTTP transport to the question-answering backend (reqwest)

pub mod adapter;

pub use adapter::*;
