//! Tokviz engine: side effects around a segmentation result (clipboard
//! payloads, JSON export, file output).
mod clipboard;
mod copy;
mod export;
mod persist;

pub use clipboard::{Clipboard, ClipboardError, MemoryClipboard, SystemClipboard};
pub use copy::{copy_payload, format_ids};
pub use export::{
    write_export, ExportDocument, ExportError, ExportOptions, ExportStats, ExportSummary,
    DEFAULT_EXPORT_FILENAME,
};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
