// Error types for corpus, template, and configuration loading.
//
// Composition itself never fails (empty buckets fall back to placeholders),
// so errors only arise at the edges: reading files, parsing templates, and
// parsing JSON config.

use std::path::PathBuf;

/// A template string that could not be turned into a `Template`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    #[error("template has {found} lines, expected 3 separated by '|'")]
    LineCount { found: usize },
    #[error("unrecognized slot marker {marker:?} on line {line}")]
    UnknownMarker { marker: String, line: usize },
}

/// Top-level error for the haiku library.
#[derive(Debug, thiserror::Error)]
pub enum HaikuError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("template {index}: {source}")]
    Template {
        /// 1-based position of the template in its source file.
        index: usize,
        #[source]
        source: TemplateError,
    },
    #[error("invalid composer config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("placeholder unit {unit:?} does not count as one syllable per repeat")]
    Placeholder { unit: String },
    #[error("no templates available")]
    NoTemplates,
}
