//! Offline corpus pipeline for TutorBot.
//!
//! Three stages feed the external fine-tuning step: the builder merges
//! intent JSON documents into flat QA pairs, the cleaner canonicalizes them,
//! and the projection renders the text corpus the trainer consumes. Each
//! stage is a pure transform over in-memory rows; file I/O lives in `io`.

pub mod builder;
pub mod cleaner;
pub mod io;
pub mod projection;

pub use builder::{build, intents_to_pairs, load_intents, IntentRecord};
pub use cleaner::clean;
pub use projection::{block, project};
