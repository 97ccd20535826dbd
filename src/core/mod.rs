// Core modules implementing fetch, filtering, persistence, and error modeling.
pub mod config;
pub mod error;
pub mod extractor;
pub mod source;
pub mod words;
