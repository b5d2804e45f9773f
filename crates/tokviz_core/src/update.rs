use tokviz_logging::{tokviz_debug, tokviz_trace};

use crate::{AppState, CopyKind, Effect, Msg, COPY_FEEDBACK_DURATION, SAMPLE_TEXTS};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    tokviz_trace!("update msg={:?}", msg);
    let effects = match msg {
        Msg::TextChanged(text) => {
            if state.set_text(text) {
                tokviz_debug!(
                    "re-segmented {} chars into {} tokens",
                    state.text().chars().count(),
                    state.tokens().len()
                );
            }
            Vec::new()
        }
        Msg::ExampleSelected(index) => {
            if let Some(sample) = SAMPLE_TEXTS.get(index) {
                state.set_text((*sample).to_string());
            }
            Vec::new()
        }
        Msg::ModelSelected(label) => {
            let label = label.trim();
            if !label.is_empty() {
                state.select_model(label);
            }
            Vec::new()
        }
        Msg::ToggleTokenIds => {
            state.toggle_token_ids();
            Vec::new()
        }
        Msg::ClearClicked => {
            state.clear();
            Vec::new()
        }
        Msg::CopyTextClicked => copy_effects(&state, CopyKind::Text),
        Msg::CopyIdsClicked => copy_effects(&state, CopyKind::Ids),
        Msg::ExportClicked => {
            // Export is only offered once there is something to export.
            if state.tokens().is_empty() {
                Vec::new()
            } else {
                vec![Effect::ExportTokens(state.export_request())]
            }
        }
        Msg::CopySucceeded(kind) => {
            state.set_copied(kind, true);
            vec![Effect::ScheduleCopyFeedbackReset {
                kind,
                after: COPY_FEEDBACK_DURATION,
            }]
        }
        Msg::CopyFeedbackExpired(kind) => {
            state.set_copied(kind, false);
            Vec::new()
        }
        Msg::CopyFailed(_) | Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn copy_effects(state: &AppState, kind: CopyKind) -> Vec<Effect> {
    if state.tokens().is_empty() {
        return Vec::new();
    }
    vec![Effect::CopyToClipboard {
        kind,
        tokens: state.tokens().clone(),
    }]
}
