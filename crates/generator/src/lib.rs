//! Text generation behind a trait seam.
//!
//! The fine-tuned model is process-wide, read-only state owned by an
//! external inference server; this crate wraps it in the [`TextGenerator`]
//! trait so the serving path receives an explicitly constructed handle —
//! never a module-level global — and tests can substitute a scripted fake.

mod http;
mod traits;

pub use http::HttpGenerator;
pub use traits::{Generation, TextGenerator};
