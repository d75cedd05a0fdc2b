//! The prompt/response contract between callers and the generative model.
//!
//! `encode` frames a user message into the two-marker turn format the model
//! was fine-tuned on; `decode` extracts a bounded answer span back out of a
//! raw generation. Every front end shares this one implementation — the
//! contract is small but bugs here directly cause wrong or leaking answers.

mod codec;
mod normalize;
mod postprocess;

pub use codec::{PromptCodec, BOT_MARKER, USER_MARKER};
