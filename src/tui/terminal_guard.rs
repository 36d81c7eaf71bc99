//! Terminal modes the carousel holds while it runs.
//!
//! [`TerminalGuard`] switches every [`HostMode`] on in order and back off in
//! reverse. Switching off happens once, from whichever of the guard's drop or
//! the signal thread gets there first.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostMode {
    Raw,
    AltScreen,
    MouseCapture,
    HiddenCursor,
}

impl HostMode {
    /// Enable order; disabling walks it backwards.
    pub const ALL: [HostMode; 4] = [
        HostMode::Raw,
        HostMode::AltScreen,
        HostMode::MouseCapture,
        HostMode::HiddenCursor,
    ];
}

pub trait ModeSwitch: Send + Sync + 'static {
    fn enable(&self, mode: HostMode) -> io::Result<()>;
    fn disable(&self, mode: HostMode) -> io::Result<()>;
}

#[derive(Debug, Default)]
pub struct CrosstermSwitch;

impl ModeSwitch for CrosstermSwitch {
    fn enable(&self, mode: HostMode) -> io::Result<()> {
        use crossterm::{cursor, event, execute, terminal};

        let mut out = io::stdout();
        match mode {
            HostMode::Raw => terminal::enable_raw_mode(),
            HostMode::AltScreen => execute!(out, terminal::EnterAlternateScreen),
            HostMode::MouseCapture => execute!(out, event::EnableMouseCapture),
            HostMode::HiddenCursor => execute!(out, cursor::Hide),
        }
    }

    fn disable(&self, mode: HostMode) -> io::Result<()> {
        use crossterm::{cursor, event, execute, terminal};

        let mut out = io::stdout();
        match mode {
            HostMode::Raw => terminal::disable_raw_mode(),
            HostMode::AltScreen => execute!(out, terminal::LeaveAlternateScreen),
            HostMode::MouseCapture => execute!(out, event::DisableMouseCapture),
            HostMode::HiddenCursor => execute!(out, cursor::Show),
        }
    }
}

/// Switches `modes` off in reverse; every mode is attempted, the first error wins.
fn disable_all(switch: &dyn ModeSwitch, modes: &[HostMode]) -> io::Result<()> {
    let mut first_err = None;
    for &mode in modes.iter().rev() {
        if let Err(err) = switch.disable(mode) {
            tracing::debug!(?mode, error = %err, "failed to leave terminal mode");
            first_err.get_or_insert(err);
        }
    }
    first_err.map_or(Ok(()), Err)
}

/// Shared handle that hands the terminal back to the shell.
#[derive(Clone)]
pub struct ReleaseHandle {
    released: Arc<AtomicBool>,
    switch: Arc<dyn ModeSwitch>,
}

impl ReleaseHandle {
    pub fn is_released(&self) -> bool {
        self.released.load(Ordering::SeqCst)
    }

    pub fn release(&self) -> io::Result<()> {
        if self.released.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        disable_all(self.switch.as_ref(), &HostMode::ALL)
    }
}

pub struct TerminalGuard {
    handle: ReleaseHandle,
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        Self::with_switch(Arc::new(CrosstermSwitch))
    }

    /// Enables every mode; if one fails, the ones already on are undone.
    pub fn with_switch(switch: Arc<dyn ModeSwitch>) -> io::Result<Self> {
        for (done, &mode) in HostMode::ALL.iter().enumerate() {
            if let Err(err) = switch.enable(mode) {
                let _ = disable_all(switch.as_ref(), &HostMode::ALL[..done]);
                return Err(err);
            }
        }
        Ok(Self {
            handle: ReleaseHandle {
                released: Arc::new(AtomicBool::new(false)),
                switch,
            },
        })
    }

    pub fn handle(&self) -> ReleaseHandle {
        self.handle.clone()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = self.handle.release() {
            tracing::warn!(error = %err, "terminal not fully restored");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    SigInt,
    SigTerm,
}

impl TerminationSignal {
    /// 128 + signal number.
    pub fn exit_code(self) -> i32 {
        match self {
            TerminationSignal::SigInt => 130,
            TerminationSignal::SigTerm => 143,
        }
    }
}

/// Passes the first SIGINT/SIGTERM to the draw loop. If the loop is still
/// running after [`SHUTDOWN_GRACE`], the terminal is released here and the
/// process exits.
#[cfg(unix)]
pub fn install_termination_signals(
    handle: ReleaseHandle,
    tx: std::sync::mpsc::Sender<TerminationSignal>,
) -> io::Result<std::thread::JoinHandle<()>> {
    use signal_hook::consts::signal::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;

    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    std::thread::Builder::new()
        .name("carousel-signals".into())
        .spawn(move || {
            let signal = signals.forever().find_map(|raw| match raw {
                SIGINT => Some(TerminationSignal::SigInt),
                SIGTERM => Some(TerminationSignal::SigTerm),
                _ => None,
            });
            let Some(signal) = signal else {
                return;
            };

            tracing::info!(?signal, "termination signal received");
            if tx.send(signal).is_err() {
                tracing::debug!("draw loop already gone");
            }
            std::thread::sleep(SHUTDOWN_GRACE);
            if !handle.is_released() {
                tracing::warn!(?signal, "draw loop did not stop, forcing exit");
            }
            let _ = handle.release();
            std::process::exit(signal.exit_code());
        })
}

#[cfg(unix)]
pub const SHUTDOWN_GRACE: std::time::Duration = std::time::Duration::from_secs(2);

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal_guard.rs"]
mod tests;
