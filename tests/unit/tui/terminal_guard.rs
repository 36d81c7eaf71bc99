use super::*;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct RecordingSwitch {
    log: Mutex<Vec<(bool, HostMode)>>,
    refuse: Option<HostMode>,
    stuck: Option<HostMode>,
}

impl RecordingSwitch {
    fn log(&self) -> Vec<(bool, HostMode)> {
        self.log.lock().unwrap().clone()
    }
}

impl ModeSwitch for RecordingSwitch {
    fn enable(&self, mode: HostMode) -> io::Result<()> {
        self.log.lock().unwrap().push((true, mode));
        if self.refuse == Some(mode) {
            return Err(io::Error::new(io::ErrorKind::Other, "not a tty"));
        }
        Ok(())
    }

    fn disable(&self, mode: HostMode) -> io::Result<()> {
        self.log.lock().unwrap().push((false, mode));
        if self.stuck == Some(mode) {
            return Err(io::Error::new(io::ErrorKind::Other, "stuck"));
        }
        Ok(())
    }
}

use HostMode::*;

#[test]
fn drop_leaves_modes_in_reverse_order() {
    let switch = Arc::new(RecordingSwitch::default());
    drop(TerminalGuard::with_switch(switch.clone()).unwrap());

    assert_eq!(
        switch.log(),
        vec![
            (true, Raw),
            (true, AltScreen),
            (true, MouseCapture),
            (true, HiddenCursor),
            (false, HiddenCursor),
            (false, MouseCapture),
            (false, AltScreen),
            (false, Raw),
        ]
    );
}

#[test]
fn release_happens_once_across_handles_and_drop() {
    let switch = Arc::new(RecordingSwitch::default());
    let guard = TerminalGuard::with_switch(switch.clone()).unwrap();
    let handle = guard.handle();
    let other = handle.clone();

    assert!(!handle.is_released());
    handle.release().unwrap();
    other.release().unwrap();
    assert!(other.is_released());
    drop(guard);

    let disables = switch.log().iter().filter(|(on, _)| !on).count();
    assert_eq!(disables, HostMode::ALL.len());
}

#[test]
fn failed_enable_undoes_earlier_modes() {
    let switch = Arc::new(RecordingSwitch {
        refuse: Some(MouseCapture),
        ..RecordingSwitch::default()
    });

    assert!(TerminalGuard::with_switch(switch.clone()).is_err());
    assert_eq!(
        switch.log(),
        vec![
            (true, Raw),
            (true, AltScreen),
            (true, MouseCapture),
            (false, AltScreen),
            (false, Raw),
        ]
    );
}

#[test]
fn stuck_mode_still_lets_raw_mode_go() {
    let switch = Arc::new(RecordingSwitch {
        stuck: Some(AltScreen),
        ..RecordingSwitch::default()
    });
    let guard = TerminalGuard::with_switch(switch.clone()).unwrap();

    assert!(guard.handle().release().is_err());
    assert_eq!(switch.log().last(), Some(&(false, Raw)));
}

#[test]
fn exit_codes_follow_shell_convention() {
    assert_eq!(TerminationSignal::SigInt.exit_code(), 130);
    assert_eq!(TerminationSignal::SigTerm.exit_code(), 143);
}
