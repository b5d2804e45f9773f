use std::io::{self, Write};

use crossterm::style::{Color, Stylize};
use tokviz_core::{AppViewModel, CopyKind, PaletteColor, TokenChip, MODEL_OPTIONS, SAMPLE_TEXTS};
use tokviz_engine::format_ids;

use crate::platform::effects::Notice;

const PROMPT: &str = "> ";

/// Chip background, black text on top.
fn chip_color(color: PaletteColor) -> Color {
    let (r, g, b) = match color {
        PaletteColor::Blue => (191, 219, 254),
        PaletteColor::Green => (187, 247, 208),
        PaletteColor::Purple => (233, 213, 255),
        PaletteColor::Pink => (251, 207, 232),
        PaletteColor::Yellow => (254, 240, 138),
        PaletteColor::Indigo => (199, 210, 254),
        PaletteColor::Orange => (254, 215, 170),
        PaletteColor::Teal => (153, 246, 228),
    };
    Color::Rgb { r, g, b }
}

fn copy_kind_label(kind: CopyKind) -> &'static str {
    match kind {
        CopyKind::Text => "text",
        CopyKind::Ids => "IDs",
    }
}

pub fn render(out: &mut impl Write, view: &AppViewModel) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{} {}   {} {}   {} {}",
        "Tokens:".bold(),
        view.token_count,
        "Characters:".bold(),
        view.char_count,
        "Model:".bold(),
        view.model_display_name
    )?;

    if view.chips.is_empty() {
        writeln!(out, "{}", "(type or paste text to see it tokenized)".dark_grey())?;
        return prompt(out);
    }

    for chip in &view.chips {
        write_chip(out, chip, view.show_token_ids)?;
    }
    writeln!(out)?;

    // Serializing a list of integers cannot fail in practice.
    let ids = format_ids(&view.ids).unwrap_or_default();
    writeln!(out, "{} {}", "Token IDs:".bold(), ids)?;

    let copy_state = |copied: bool, idle: &'static str| if copied { "Copied!" } else { idle };
    writeln!(
        out,
        "{}",
        format!(
            ":copy [{}]  :copy-ids [{}]  :export  :ids [{}]",
            copy_state(view.copied_text, "Copy"),
            copy_state(view.copied_ids, "Copy IDs"),
            if view.show_token_ids { "Hide IDs" } else { "Show IDs" },
        )
        .dark_grey()
    )?;
    prompt(out)
}

fn write_chip(out: &mut impl Write, chip: &TokenChip, show_id: bool) -> io::Result<()> {
    write!(
        out,
        "{}",
        chip.label.as_str().with(Color::Black).on(chip_color(chip.color))
    )?;
    if show_id {
        write!(out, "{}", format!("{}", chip.id).dark_grey())?;
    }
    // Keep the visual line structure of the input.
    if chip.text.contains('\n') {
        writeln!(out)?;
    }
    Ok(())
}

pub fn render_notices(out: &mut impl Write, notices: &[Notice]) -> io::Result<()> {
    for notice in notices {
        match notice {
            Notice::Exported { path, token_count } => writeln!(
                out,
                "{} {} tokens to {}",
                "Exported".green(),
                token_count,
                path.display()
            )?,
            Notice::ExportFailed(reason) => {
                writeln!(out, "{} {}", "Export failed:".red(), reason)?
            }
            Notice::CopyFailed { kind, reason } => writeln!(
                out,
                "{} {}",
                format!("Could not copy {}:", copy_kind_label(*kind)).red(),
                reason
            )?,
        }
    }
    Ok(())
}

pub fn render_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "Tokviz - see how text splits into tokens".bold())?;
    writeln!(out, "  <text>          replace the input text")?;
    writeln!(out, "  :paste ... :end enter multi-line text")?;
    writeln!(out, "  ::<text>        text starting with ':'")?;
    writeln!(
        out,
        "  :example <n>    load example 1-{}",
        SAMPLE_TEXTS.len()
    )?;
    writeln!(out, "  :model <label>  pick a model label (:models lists them)")?;
    writeln!(out, "  :ids            show/hide token IDs")?;
    writeln!(out, "  :copy           copy the token text")?;
    writeln!(out, "  :copy-ids       copy the token IDs as JSON")?;
    writeln!(out, "  :export         write the tokens to a JSON file")?;
    writeln!(out, "  :clear          clear the input")?;
    writeln!(out, "  :quit           exit")?;
    prompt(out)
}

pub fn render_models(out: &mut impl Write, current: &str) -> io::Result<()> {
    for option in MODEL_OPTIONS {
        let marker = if option.id == current { "*" } else { " " };
        writeln!(out, " {} {:<14} {}", marker, option.id, option.display_name)?;
    }
    prompt(out)
}

pub fn render_invalid(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{} (try :help)", message.red())?;
    prompt(out)
}

fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "{PROMPT}")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use tokviz_core::{update, AppState, Msg};

    use super::*;

    fn rendered(view: &AppViewModel) -> String {
        let mut buffer = Vec::new();
        render(&mut buffer, view).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn empty_view_shows_placeholder() {
        let output = rendered(&AppState::new().view());
        assert!(output.contains("Tokens:"));
        assert!(output.contains("type or paste text"));
        assert!(!output.contains("Token IDs:"));
    }

    #[test]
    fn chips_and_ids_are_rendered() {
        let (state, _) = update(AppState::new(), Msg::TextChanged("fish, chips".into()));
        let output = rendered(&state.view());

        assert!(output.contains("fish"));
        assert!(output.contains("chi"));
        assert!(output.contains("·"));
        assert!(output.contains("[0,1,2,3,4]"));
        assert!(output.contains("GPT-4"));
    }

    #[test]
    fn copied_flag_changes_button_label() {
        let (state, _) = update(AppState::new(), Msg::TextChanged("fish".into()));
        let (state, _) = update(state, Msg::CopySucceeded(CopyKind::Text));
        let output = rendered(&state.view());

        assert!(output.contains("Copied!"));
        assert!(output.contains("Copy IDs"));
    }

    #[test]
    fn models_list_marks_current() {
        let mut buffer = Vec::new();
        render_models(&mut buffer, "claude-3").unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert!(output.contains("* claude-3"));
        assert!(output.contains("  gpt-4 "));
    }
}
