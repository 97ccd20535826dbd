//! Purpose: Library crate behind the `five-letter-words` refresh binary.
//! Exports: `core` (config, fetch, word collections, persistence, errors) plus top-level re-exports.
//! Role: Keeps the pipeline testable without the binary's fixed constants or network.
//! Invariants: Core modules prefer explicit inputs/outputs over hidden state.
//! Invariants: Library code never logs-and-swallows; errors propagate to the caller.
pub mod core;
pub(crate) mod json;

pub use crate::core::config::ExtractorConfig;
pub use crate::core::error::{DataAcquisitionError, error_chain};
pub use crate::core::extractor::{DictionaryExtractor, RunSummary};
pub use crate::core::words::{SourceDictionary, WordList, WordSet};
