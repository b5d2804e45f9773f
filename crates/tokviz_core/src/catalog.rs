/// Model label used when nothing else has been selected.
pub const DEFAULT_MODEL: &str = "gpt-4";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelOption {
    pub id: &'static str,
    pub display_name: &'static str,
}

/// Labels offered by the model picker. The label is cosmetic; segmentation
/// is the same for every model.
pub const MODEL_OPTIONS: [ModelOption; 4] = [
    ModelOption {
        id: "gpt-4",
        display_name: "GPT-4",
    },
    ModelOption {
        id: "gpt-3.5-turbo",
        display_name: "GPT-3.5 Turbo",
    },
    ModelOption {
        id: "gpt-4-turbo",
        display_name: "GPT-4 Turbo",
    },
    ModelOption {
        id: "claude-3",
        display_name: "Claude 3",
    },
];

/// Canned inputs behind the "Example N" buttons.
pub const SAMPLE_TEXTS: [&str; 3] = [
    "Hello, how are you doing today?",
    "The quick brown fox jumps over the lazy dog.",
    "Artificial intelligence is transforming the world!",
];

/// Display name for a known model id, or the label itself for free text.
pub fn model_display_name(label: &str) -> &str {
    MODEL_OPTIONS
        .iter()
        .find(|option| option.id == label)
        .map_or(label, |option| option.display_name)
}
