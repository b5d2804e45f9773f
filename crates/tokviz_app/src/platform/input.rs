//! Turns stdin lines into front-end commands.
//!
//! A plain line replaces the input text. Lines starting with `:` are button
//! presses; `::` escapes a literal leading colon. `:paste` collects lines
//! until `:end` so multi-line text can be entered.

use tokviz_core::{Msg, SAMPLE_TEXTS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Msg),
    Help,
    ListModels,
    /// A `:` command that was not understood, or had a bad argument.
    Invalid(String),
    Quit,
}

#[derive(Debug, Default)]
pub struct LineParser {
    paste: Option<Vec<String>>,
}

impl LineParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_paste_mode(&self) -> bool {
        self.paste.is_some()
    }

    /// Feeds one line (without its terminator). Returns `None` while a paste
    /// block is still open.
    pub fn feed(&mut self, line: &str) -> Option<Command> {
        if let Some(buffer) = self.paste.as_mut() {
            if line.trim() == ":end" {
                let text = buffer.join("\n");
                self.paste = None;
                return Some(Command::Dispatch(Msg::TextChanged(text)));
            }
            buffer.push(line.to_string());
            return None;
        }

        if let Some(escaped) = line.strip_prefix("::") {
            return Some(Command::Dispatch(Msg::TextChanged(format!(":{escaped}"))));
        }
        let Some(command) = line.strip_prefix(':') else {
            return Some(Command::Dispatch(Msg::TextChanged(line.to_string())));
        };

        let (name, arg) = match command.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (command.trim(), ""),
        };
        let parsed = match name {
            "paste" => {
                self.paste = Some(Vec::new());
                return None;
            }
            "text" => Command::Dispatch(Msg::TextChanged(arg.to_string())),
            "example" => parse_example(arg),
            "model" if !arg.is_empty() => Command::Dispatch(Msg::ModelSelected(arg.to_string())),
            "model" => Command::Invalid(":model needs a label".to_string()),
            "models" => Command::ListModels,
            "ids" => Command::Dispatch(Msg::ToggleTokenIds),
            "copy" => Command::Dispatch(Msg::CopyTextClicked),
            "copy-ids" => Command::Dispatch(Msg::CopyIdsClicked),
            "export" => Command::Dispatch(Msg::ExportClicked),
            "clear" => Command::Dispatch(Msg::ClearClicked),
            "help" | "h" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            other => Command::Invalid(format!("unknown command :{other}")),
        };
        Some(parsed)
    }
}

fn parse_example(arg: &str) -> Command {
    match arg.parse::<usize>() {
        Ok(n) if (1..=SAMPLE_TEXTS.len()).contains(&n) => {
            Command::Dispatch(Msg::ExampleSelected(n - 1))
        }
        _ => Command::Invalid(format!(
            ":example takes a number from 1 to {}",
            SAMPLE_TEXTS.len()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(line: &str) -> Option<Command> {
        LineParser::new().feed(line)
    }

    #[test]
    fn plain_lines_replace_text() {
        assert_eq!(
            feed("Hello, world"),
            Some(Command::Dispatch(Msg::TextChanged("Hello, world".into())))
        );
        assert_eq!(
            feed(""),
            Some(Command::Dispatch(Msg::TextChanged(String::new())))
        );
    }

    #[test]
    fn double_colon_escapes_text() {
        assert_eq!(
            feed("::) smile"),
            Some(Command::Dispatch(Msg::TextChanged(":) smile".into())))
        );
    }

    #[test]
    fn buttons_map_to_messages() {
        assert_eq!(feed(":ids"), Some(Command::Dispatch(Msg::ToggleTokenIds)));
        assert_eq!(feed(":copy"), Some(Command::Dispatch(Msg::CopyTextClicked)));
        assert_eq!(
            feed(":copy-ids"),
            Some(Command::Dispatch(Msg::CopyIdsClicked))
        );
        assert_eq!(feed(":export"), Some(Command::Dispatch(Msg::ExportClicked)));
        assert_eq!(feed(":clear"), Some(Command::Dispatch(Msg::ClearClicked)));
        assert_eq!(feed(":q"), Some(Command::Quit));
        assert_eq!(feed(":models"), Some(Command::ListModels));
    }

    #[test]
    fn model_and_example_arguments() {
        assert_eq!(
            feed(":model  gpt-4-turbo "),
            Some(Command::Dispatch(Msg::ModelSelected("gpt-4-turbo".into())))
        );
        assert!(matches!(feed(":model"), Some(Command::Invalid(_))));
        assert_eq!(
            feed(":example 3"),
            Some(Command::Dispatch(Msg::ExampleSelected(2)))
        );
        assert!(matches!(feed(":example 0"), Some(Command::Invalid(_))));
        assert!(matches!(feed(":example x"), Some(Command::Invalid(_))));
        assert!(matches!(feed(":bogus"), Some(Command::Invalid(_))));
    }

    #[test]
    fn paste_block_joins_lines() {
        let mut parser = LineParser::new();
        assert_eq!(parser.feed(":paste"), None);
        assert!(parser.in_paste_mode());
        assert_eq!(parser.feed("first line"), None);
        assert_eq!(parser.feed(":ids"), None);
        assert_eq!(
            parser.feed(":end"),
            Some(Command::Dispatch(Msg::TextChanged("first line\n:ids".into())))
        );
        assert!(!parser.in_paste_mode());
    }
}
