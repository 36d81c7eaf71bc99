use std::io;
use std::path::PathBuf;
use std::sync::mpsc;

use carousel::app::theme::detect_terminal_color_support;
use carousel::app::App;
use carousel::core::View;
use carousel::kernel::services::adapters::{ensure_settings_file, load_items, load_settings_from};
use carousel::models::sample_items;
use carousel::tui::crossterm::into_input_event;
use carousel::tui::terminal_guard::TerminalGuard;
use carousel::ui::backend::terminal::RatatuiTerminal;

mod logging;

fn main() -> io::Result<()> {
    let _logging = logging::init();

    let mut items_path: Option<PathBuf> = None;
    for arg in std::env::args().skip(1) {
        match arg.strip_prefix("--items=") {
            Some(value) => items_path = Some(PathBuf::from(value)),
            None => items_path = Some(PathBuf::from(arg)),
        }
    }

    let items = match items_path {
        Some(path) => load_items(&path)?,
        None => sample_items(),
    };

    let settings_path = match ensure_settings_file() {
        Ok(path) => Some(path),
        Err(err) => {
            tracing::warn!(error = %err, "settings file unavailable, using defaults");
            None
        }
    };
    let settings = settings_path
        .as_deref()
        .and_then(load_settings_from)
        .unwrap_or_default();

    let mut app = App::new(items, &settings).with_settings_path(settings_path);
    app.set_color_support(detect_terminal_color_support());

    let guard = TerminalGuard::new()?;
    let (signal_tx, signal_rx) = mpsc::channel();
    #[cfg(unix)]
    let _signals = carousel::tui::terminal_guard::install_termination_signals(
        guard.handle(),
        signal_tx,
    )?;
    #[cfg(not(unix))]
    drop(signal_tx);

    let mut terminal = RatatuiTerminal::new(io::stdout())?;
    let result = run(&mut app, &mut terminal, &signal_rx);

    drop(guard);
    result
}

fn run(
    app: &mut App,
    terminal: &mut RatatuiTerminal,
    signals: &mpsc::Receiver<carousel::tui::terminal_guard::TerminationSignal>,
) -> io::Result<()> {
    let mut dirty = true;

    loop {
        if let Ok(signal) = signals.try_recv() {
            tracing::info!(?signal, "shutting down");
            return Ok(());
        }

        dirty |= app.tick();
        if dirty {
            terminal.draw(|backend, area| app.render(backend, area))?;
            dirty = false;
        }

        if !crossterm::event::poll(app.frame_interval())? {
            continue;
        }

        // Drain everything queued so a burst of input costs one frame.
        loop {
            let event = into_input_event(crossterm::event::read()?);
            let result = app.handle_input(&event);
            if result.is_quit() {
                return Ok(());
            }
            dirty |= result.is_consumed();
            if !crossterm::event::poll(std::time::Duration::ZERO)? {
                break;
            }
        }
    }
}
