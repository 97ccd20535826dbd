//! Purpose: Fixed parameters for one extraction run.
//! Exports: `ExtractorConfig` and the default constants.
//! Role: The binary always runs with `ExtractorConfig::default()`; builders serve library callers.
//! Invariants: Defaults never read the environment or a config file.
use std::path::{Path, PathBuf};

pub const SOURCE_URL: &str =
    "https://raw.githubusercontent.com/dwyl/english-words/refs/heads/master/words_dictionary.json";
pub const WORD_LENGTH: usize = 5;
pub const WORD_LIST_PATH: &str = "public/five-letter-words.json";
pub const WORD_SET_PATH: &str = "public/five-letter-words-dict.json";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExtractorConfig {
    source_url: String,
    word_length: usize,
    word_list_path: PathBuf,
    word_set_path: PathBuf,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            source_url: SOURCE_URL.to_string(),
            word_length: WORD_LENGTH,
            word_list_path: PathBuf::from(WORD_LIST_PATH),
            word_set_path: PathBuf::from(WORD_SET_PATH),
        }
    }
}

impl ExtractorConfig {
    pub fn with_source_url(mut self, source_url: impl Into<String>) -> Self {
        self.source_url = source_url.into();
        self
    }

    pub fn with_word_length(mut self, word_length: usize) -> Self {
        self.word_length = word_length;
        self
    }

    pub fn with_output_paths(
        mut self,
        word_list_path: impl Into<PathBuf>,
        word_set_path: impl Into<PathBuf>,
    ) -> Self {
        self.word_list_path = word_list_path.into();
        self.word_set_path = word_set_path.into();
        self
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    pub fn word_length(&self) -> usize {
        self.word_length
    }

    pub fn word_list_path(&self) -> &Path {
        &self.word_list_path
    }

    pub fn word_set_path(&self) -> &Path {
        &self.word_set_path
    }
}
