use crate::{PaletteColor, Token, TokenId};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub text: String,
    pub model: String,
    pub model_display_name: String,
    pub show_token_ids: bool,
    pub token_count: usize,
    pub char_count: usize,
    pub chips: Vec<TokenChip>,
    pub ids: Vec<TokenId>,
    pub copied_text: bool,
    pub copied_ids: bool,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenChip {
    pub id: TokenId,
    pub text: String,
    /// `text` with newlines and spaces made visible.
    pub label: String,
    pub color: PaletteColor,
}

impl TokenChip {
    pub fn from_token(token: &Token) -> Self {
        Self {
            id: token.id,
            text: token.text.clone(),
            label: chip_label(&token.text),
            color: PaletteColor::for_id(token.id),
        }
    }
}

/// Shows `\n` as `↵`, `\r` as `␍` and a space as `·`. Other characters pass
/// through.
pub fn chip_label(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\n' => '↵',
            '\r' => '␍',
            ' ' => '·',
            other => other,
        })
        .collect()
}
