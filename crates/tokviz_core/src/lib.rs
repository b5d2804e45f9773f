//! Tokviz core: the text segmenter, the pure session state machine and
//! view-model helpers.
mod catalog;
mod effect;
mod msg;
mod palette;
mod segment;
mod state;
mod update;
mod view_model;

pub use catalog::{
    model_display_name, ModelOption, DEFAULT_MODEL, MODEL_OPTIONS, SAMPLE_TEXTS,
};
pub use effect::{CopyKind, Effect, ExportRequest, COPY_FEEDBACK_DURATION};
pub use msg::Msg;
pub use palette::PaletteColor;
pub use segment::{
    is_space, segment, CharClass, Token, TokenId, TokenSequence, PUNCTUATION, WORD_CHUNK_LEN,
    WORD_CHUNK_THRESHOLD,
};
pub use state::AppState;
pub use update::update;
pub use view_model::{chip_label, AppViewModel, TokenChip};
