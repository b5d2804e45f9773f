use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use tokviz_core::{update, AppState, Msg};
use tokviz_logging::{tokviz_debug, tokviz_info, tokviz_warn};

use super::config::{config_path, load_config, AppConfig};
use super::effects::EffectRunner;
use super::input::{Command, LineParser};
use super::ui;

pub fn run_app() -> anyhow::Result<()> {
    let path = config_path();
    let config = load_config(&path)?;
    tokviz_logging::initialize(
        config.log.destination.into(),
        config.log.level.into(),
        &config.log.file,
    );
    tokviz_info!("Starting tokviz with config {:?}", config);

    let (cmd_tx, cmd_rx) = mpsc::channel::<Command>();
    spawn_stdin_reader(cmd_tx.clone());

    let mut runner = EffectRunner::new(&config, cmd_tx);
    event_loop(&config, &mut runner, cmd_rx, &mut io::stdout())
}

/// Processes commands until `Quit` or until every sender is gone.
fn event_loop(
    config: &AppConfig,
    runner: &mut EffectRunner,
    cmd_rx: mpsc::Receiver<Command>,
    out: &mut impl io::Write,
) -> anyhow::Result<()> {
    let mut state = AppState::with_settings(config.default_model.as_str(), config.show_token_ids);
    ui::render::render_help(out).context("writing to terminal")?;

    for command in cmd_rx {
        match command {
            Command::Dispatch(msg) => {
                state = dispatch_msg(state, msg, runner, out)?;
            }
            Command::Help => ui::render::render_help(out)?,
            Command::ListModels => ui::render::render_models(out, state.model())?,
            Command::Invalid(message) => ui::render::render_invalid(out, &message)?,
            Command::Quit => {
                tokviz_info!("Quit requested");
                break;
            }
        }
    }
    Ok(())
}

fn dispatch_msg(
    state: AppState,
    msg: Msg,
    runner: &mut EffectRunner,
    out: &mut impl io::Write,
) -> anyhow::Result<AppState> {
    let (mut state, effects) = update(state, msg);
    if !effects.is_empty() {
        tokviz_debug!("Running {} effects", effects.len());
    }
    let notices = runner.run(effects);
    ui::render::render_notices(out, &notices)?;
    if state.consume_dirty() {
        ui::render::render(out, &state.view()).context("writing to terminal")?;
    }
    Ok(state)
}

fn spawn_stdin_reader(cmd_tx: mpsc::Sender<Command>) {
    thread::spawn(move || {
        let mut parser = LineParser::new();
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    tokviz_warn!("Failed to read stdin: {}", err);
                    break;
                }
            };
            if let Some(command) = parser.feed(&line) {
                if cmd_tx.send(command).is_err() {
                    return;
                }
            }
        }
        if parser.in_paste_mode() {
            tokviz_warn!("Input closed inside :paste block; discarding it");
        }
        let _ = cmd_tx.send(Command::Quit);
    });
}
