use crate::view_model::{AppViewModel, TokenChip};
use crate::{model_display_name, segment, CopyKind, ExportRequest, TokenSequence, DEFAULT_MODEL};

/// Session state. Lives only as long as the running application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    text: String,
    tokens: TokenSequence,
    model: String,
    show_token_ids: bool,
    copied_text: bool,
    copied_ids: bool,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            text: String::new(),
            tokens: TokenSequence::new(),
            model: DEFAULT_MODEL.to_string(),
            show_token_ids: false,
            copied_text: false,
            copied_ids: false,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session with a preselected model label and ID toggle.
    pub fn with_settings(model: impl Into<String>, show_token_ids: bool) -> Self {
        let model = model.into();
        let model = if model.trim().is_empty() {
            DEFAULT_MODEL.to_string()
        } else {
            model.trim().to_string()
        };
        Self {
            model,
            show_token_ids,
            ..Self::default()
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &TokenSequence {
        &self.tokens
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn show_token_ids(&self) -> bool {
        self.show_token_ids
    }

    pub fn is_copied(&self, kind: CopyKind) -> bool {
        match kind {
            CopyKind::Text => self.copied_text,
            CopyKind::Ids => self.copied_ids,
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            text: self.text.clone(),
            model: self.model.clone(),
            model_display_name: model_display_name(&self.model).to_string(),
            show_token_ids: self.show_token_ids,
            token_count: self.tokens.len(),
            char_count: self.text.chars().count(),
            chips: self.tokens.iter().map(TokenChip::from_token).collect(),
            ids: self.tokens.ids(),
            copied_text: self.copied_text,
            copied_ids: self.copied_ids,
            dirty: self.dirty,
        }
    }

    /// Returns whether a render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn export_request(&self) -> ExportRequest {
        ExportRequest {
            text: self.text.clone(),
            model: self.model.clone(),
            tokens: self.tokens.clone(),
        }
    }

    /// Replaces the text and re-segments it. Returns false if nothing changed.
    pub(crate) fn set_text(&mut self, text: String) -> bool {
        if text == self.text {
            return false;
        }
        self.tokens = segment(&text);
        self.text = text;
        self.mark_dirty();
        true
    }

    pub(crate) fn select_model(&mut self, label: &str) {
        if self.model != label {
            self.model = label.to_string();
            self.mark_dirty();
        }
    }

    pub(crate) fn toggle_token_ids(&mut self) {
        self.show_token_ids = !self.show_token_ids;
        self.mark_dirty();
    }

    pub(crate) fn clear(&mut self) {
        if !self.text.is_empty() || !self.tokens.is_empty() {
            self.text.clear();
            self.tokens = TokenSequence::new();
            self.mark_dirty();
        }
    }

    pub(crate) fn set_copied(&mut self, kind: CopyKind, copied: bool) {
        let flag = match kind {
            CopyKind::Text => &mut self.copied_text,
            CopyKind::Ids => &mut self.copied_ids,
        };
        if *flag != copied {
            *flag = copied;
            self.mark_dirty();
        }
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
