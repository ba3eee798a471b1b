use std::process::ExitStatus;

use thiserror::Error;

/// Errors surfaced by the evaluation pipeline. All of them propagate straight
/// to the caller; nothing is retried.
#[derive(Debug, Error)]
pub enum RougeError {
    /// Invalid or incomplete run configuration, including mutually exclusive
    /// score-selection flags.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Peer and model summary sets must cover the same documents.
    #[error("summary set has {summary} documents but reference set has {reference}")]
    SizeMismatch { summary: usize, reference: usize },

    /// A document carries more reference variants than ROUGE model
    /// identifiers exist (A through G).
    #[error(
        "document {document} has {variants} reference variants but only {capacity} \
         model identifiers are available"
    )]
    ModelIdsExhausted {
        document: usize,
        variants: usize,
        capacity: usize,
    },

    /// Filesystem failure while staging the corpus or writing the descriptor.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// The scorer exited non-zero. Carries everything it printed.
    #[error("scorer exited with {status}; captured output:\n{output}")]
    Process { status: ExitStatus, output: String },

    /// The scorer outlived the configured timeout and was killed.
    #[error("scorer did not finish within {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// The scorer printed bytes that are not valid UTF-8.
    #[error("scorer output is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),
}

impl RougeError {
    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io { context: context.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, RougeError>;
