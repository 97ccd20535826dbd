//! Purpose: Run the full fetch -> filter -> persist pipeline once.
//! Exports: `DictionaryExtractor`, `RunSummary`, `persist`.
//! Role: Library entry point driven by the binary and integration tests.
//! Invariants: Both documents are rendered before either file is opened.
//! Invariants: A failed fetch or decode writes nothing; a failed write is not rolled back.
//! Invariants: Each output is truncated and fully rewritten; parent dirs are not created.
use std::fs;
use std::path::Path;

use tracing::info;

use crate::core::config::ExtractorConfig;
use crate::core::error::DataAcquisitionError;
use crate::core::source::{decode_source, fetch_source};
use crate::core::words::{WordList, WordSet};
use crate::json::pretty::to_vec_pretty_ascii;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RunSummary {
    pub source_words: usize,
    pub selected_words: usize,
}

pub struct DictionaryExtractor {
    config: ExtractorConfig,
    agent: ureq::Agent,
}

impl DictionaryExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self {
            config,
            agent: ureq::AgentBuilder::new().build(),
        }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    pub fn run(&self) -> Result<RunSummary, DataAcquisitionError> {
        let body = fetch_source(&self.agent, self.config.source_url())?;
        let source = decode_source(&body)?;

        let list = WordList::from_source(&source, self.config.word_length());
        info!(
            source_words = source.len(),
            selected_words = list.len(),
            word_length = self.config.word_length(),
            "filtered source dictionary"
        );

        persist(
            &list,
            self.config.word_list_path(),
            self.config.word_set_path(),
        )?;

        Ok(RunSummary {
            source_words: source.len(),
            selected_words: list.len(),
        })
    }
}

/// Writes the list as a JSON array and its membership map as a JSON object.
pub fn persist(
    list: &WordList,
    word_list_path: &Path,
    word_set_path: &Path,
) -> Result<(), DataAcquisitionError> {
    let set = WordSet::from_list(list);
    let list_json = to_vec_pretty_ascii(list).map_err(|err| {
        DataAcquisitionError::new()
            .with_message("failed to encode word list")
            .with_source(err)
    })?;
    let set_json = to_vec_pretty_ascii(&set).map_err(|err| {
        DataAcquisitionError::new()
            .with_message("failed to encode word set")
            .with_source(err)
    })?;

    write_output(word_list_path, &list_json, "word list")?;
    write_output(word_set_path, &set_json, "word set")?;
    Ok(())
}

fn write_output(path: &Path, bytes: &[u8], what: &str) -> Result<(), DataAcquisitionError> {
    fs::write(path, bytes).map_err(|err| {
        DataAcquisitionError::new()
            .with_message(format!("failed to write {what}"))
            .with_path(path)
            .with_source(err)
    })?;
    info!(path = %path.display(), bytes = bytes.len(), "wrote {what}");
    Ok(())
}
