use std::time::Duration;

use crate::TokenSequence;

/// How long a "Copied!" indicator stays up after a successful copy.
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    CopyToClipboard {
        kind: CopyKind,
        tokens: TokenSequence,
    },
    ExportTokens(ExportRequest),
    ScheduleCopyFeedbackReset {
        kind: CopyKind,
        after: Duration,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CopyKind {
    /// Concatenated token texts.
    Text,
    /// JSON array of token ids.
    Ids,
}

/// Snapshot of everything an export needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    pub text: String,
    pub model: String,
    pub tokens: TokenSequence,
}
