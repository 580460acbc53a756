//! Application letter tooling: writing-style templates, prompt assembly,
//! the external text-generation collaborator, and the saved-letter
//! archive. The generation call is a black box that may fail; failures are
//! surfaced to the caller and never retried automatically.

pub mod archive;
pub mod client;
pub mod generator;
pub mod prompt;
pub mod template;

pub use archive::{LetterArchive, SavedLetter};
pub use client::HttpCompletionClient;
pub use generator::{
    CompletionClient, CompletionError, CompletionRequest, GeneratedLetter, LetterError,
    LetterGenerator, ScholarshipSelection,
};
pub use template::{default_templates, LetterTemplate};
