use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use tokviz_core::{CopyKind, Effect, Msg};
use tokviz_engine::{
    copy_payload, write_export, Clipboard, ExportOptions, MemoryClipboard, SystemClipboard,
};
use tokviz_logging::{tokviz_debug, tokviz_info, tokviz_warn};

use super::config::AppConfig;
use super::input::Command;

/// Outcome of an effect worth telling the user about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Exported { path: PathBuf, token_count: usize },
    ExportFailed(String),
    CopyFailed { kind: CopyKind, reason: String },
}

pub struct EffectRunner {
    clipboard: Option<Box<dyn Clipboard>>,
    export_dir: PathBuf,
    export_options: ExportOptions,
    msg_tx: mpsc::Sender<Command>,
}

impl EffectRunner {
    pub fn new(config: &AppConfig, msg_tx: mpsc::Sender<Command>) -> Self {
        let clipboard: Option<Box<dyn Clipboard>> = if config.use_system_clipboard {
            match SystemClipboard::new() {
                Ok(clipboard) => Some(Box::new(clipboard)),
                Err(err) => {
                    tokviz_warn!("System clipboard unavailable, copy is disabled: {}", err);
                    None
                }
            }
        } else {
            tokviz_info!("Using in-process clipboard");
            Some(Box::new(MemoryClipboard::new()))
        };

        Self::with_clipboard(clipboard, config, msg_tx)
    }

    pub fn with_clipboard(
        clipboard: Option<Box<dyn Clipboard>>,
        config: &AppConfig,
        msg_tx: mpsc::Sender<Command>,
    ) -> Self {
        Self {
            clipboard,
            export_dir: config.export_dir.clone(),
            export_options: ExportOptions {
                filename: config.export_filename.clone(),
            },
            msg_tx,
        }
    }

    /// Executes effects in order. Follow-up messages go back through the
    /// channel; anything the user should see is returned.
    pub fn run(&mut self, effects: Vec<Effect>) -> Vec<Notice> {
        let mut notices = Vec::new();
        for effect in effects {
            match effect {
                Effect::CopyToClipboard { kind, tokens } => {
                    let result = copy_payload(kind, &tokens)
                        .map_err(|e| e.to_string())
                        .and_then(|payload| self.copy(&payload));
                    match result {
                        Ok(()) => {
                            tokviz_debug!("Copied {:?} for {} tokens", kind, tokens.len());
                            self.send(Msg::CopySucceeded(kind));
                        }
                        Err(reason) => {
                            tokviz_warn!("Copy {:?} failed: {}", kind, reason);
                            self.send(Msg::CopyFailed(kind));
                            notices.push(Notice::CopyFailed { kind, reason });
                        }
                    }
                }
                Effect::ExportTokens(request) => {
                    match write_export(&self.export_dir, &request, &self.export_options) {
                        Ok(summary) => notices.push(Notice::Exported {
                            path: summary.output_path,
                            token_count: summary.token_count,
                        }),
                        Err(err) => {
                            tokviz_warn!("Export to {:?} failed: {}", self.export_dir, err);
                            notices.push(Notice::ExportFailed(err.to_string()));
                        }
                    }
                }
                Effect::ScheduleCopyFeedbackReset { kind, after } => {
                    let msg_tx = self.msg_tx.clone();
                    thread::spawn(move || {
                        thread::sleep(after);
                        // The loop may already be gone on quit.
                        let _ = msg_tx.send(Command::Dispatch(Msg::CopyFeedbackExpired(kind)));
                    });
                }
            }
        }
        notices
    }

    fn copy(&mut self, payload: &str) -> Result<(), String> {
        match self.clipboard.as_mut() {
            Some(clipboard) => clipboard.set_text(payload).map_err(|e| e.to_string()),
            None => Err("no clipboard available".to_string()),
        }
    }

    fn send(&self, msg: Msg) {
        let _ = self.msg_tx.send(Command::Dispatch(msg));
    }
}
