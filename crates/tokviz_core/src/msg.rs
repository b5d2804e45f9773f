use crate::CopyKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the input text.
    TextChanged(String),
    /// User clicked one of the "Example N" buttons (zero-based).
    ExampleSelected(usize),
    /// User picked a model label.
    ModelSelected(String),
    /// User clicked Show IDs / Hide IDs.
    ToggleTokenIds,
    /// User clicked Clear.
    ClearClicked,
    /// User clicked Copy on the token view.
    CopyTextClicked,
    /// User clicked Copy IDs.
    CopyIdsClicked,
    /// User clicked Export.
    ExportClicked,
    /// Platform confirmed a clipboard write.
    CopySucceeded(CopyKind),
    /// Platform could not write the clipboard.
    CopyFailed(CopyKind),
    /// The "Copied!" indicator timed out.
    CopyFeedbackExpired(CopyKind),
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
