//! Purpose: The single failure type for fetching, decoding, and persisting word data.
//! Exports: `DataAcquisitionError`, `error_chain`.
//! Role: Shared by every pipeline stage; only the binary decides what to do with it.
//! Invariants: There is exactly one error kind; context fields never split it into more.
//! Invariants: Display carries the message and context; `source()` carries the cause.
use std::error::Error as StdError;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Default)]
pub struct DataAcquisitionError {
    message: Option<String>,
    url: Option<String>,
    path: Option<PathBuf>,
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl DataAcquisitionError {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn path(&self) -> Option<&std::path::Path> {
        self.path.as_deref()
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for DataAcquisitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "data acquisition failed")?;
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        if let Some(url) = &self.url {
            write!(f, " (url: {url})")?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }
        Ok(())
    }
}

impl StdError for DataAcquisitionError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|source| source.as_ref() as &(dyn StdError + 'static))
    }
}

/// Renders an error followed by each of its causes, separated by `: `.
///
/// Stops at the first cause whose text is already present, since many
/// transport errors fold their own source into their `Display`.
pub fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut text = err.to_string();
    let mut current = err.source();
    while let Some(cause) = current {
        let cause_text = cause.to_string();
        if text.contains(&cause_text) {
            break;
        }
        text.push_str(": ");
        text.push_str(&cause_text);
        current = cause.source();
    }
    text
}
