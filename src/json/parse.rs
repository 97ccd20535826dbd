//! Purpose: Provide the internal JSON decode entrypoint and failure labels.
//! Exports: `from_slice`, `ParseFailureCategory`, `categorize_error`, `describe_error`.
//! Role: Parser boundary that centralizes serde_json usage details.
//! Invariants: Category labels are stable strings; new categories are additive.
//! Notes: Error wrapping is done by callsites so domain context stays explicit.

use serde::de::DeserializeOwned;
use serde_json::error::Category;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ParseFailureCategory {
    Io,
    Syntax,
    Data,
    Eof,
}

impl ParseFailureCategory {
    pub(crate) fn label(self) -> &'static str {
        match self {
            ParseFailureCategory::Io => "io",
            ParseFailureCategory::Syntax => "syntax",
            ParseFailureCategory::Data => "data",
            ParseFailureCategory::Eof => "eof",
        }
    }
}

pub(crate) fn from_slice<T: DeserializeOwned>(input: &[u8]) -> Result<T, serde_json::Error> {
    serde_json::from_slice(input)
}

pub(crate) fn categorize_error(err: &serde_json::Error) -> ParseFailureCategory {
    match err.classify() {
        Category::Io => ParseFailureCategory::Io,
        Category::Syntax => ParseFailureCategory::Syntax,
        Category::Data => ParseFailureCategory::Data,
        Category::Eof => ParseFailureCategory::Eof,
    }
}

pub(crate) fn describe_error(err: &serde_json::Error) -> String {
    format!(
        "parse category: {} (line {}, column {})",
        categorize_error(err).label(),
        err.line(),
        err.column()
    )
}
