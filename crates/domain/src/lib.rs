//! Shared domain types for TutorBot: the error type, the QA-pair data
//! model flowing through the corpus pipeline, conversation turns, and the
//! full configuration tree.

pub mod config;
pub mod error;
pub mod qa;
pub mod turn;

pub use error::{Error, Result};
pub use qa::{QaPair, RawQaPair};
pub use turn::{Role, Turn};
