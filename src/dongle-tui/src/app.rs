//! The interactive picker loop.

use std::sync::mpsc::Receiver;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use dongle_search::CandidateEntry;

use crate::error::PickerResult;
use crate::events::PickerEvent;
use crate::render;
use crate::session::PickerSession;
use crate::terminal::PickerTerminal;

/// How long one loop iteration waits for a key before draining the
/// background-event channel. Keeps scan completion latency bounded without
/// burning CPU.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// What a keystroke did to the session.
#[derive(Debug, PartialEq, Eq)]
enum KeyOutcome {
    /// Session state may have changed; keep looping.
    Continue,
    /// Enter: resolve the selection (possibly none) and stop.
    Accept,
    /// Escape or interrupt: stop with no selection.
    Cancel,
}

/// Runs the picker until the user accepts or cancels.
///
/// The foreground loop is the sole mutator of `session`; background tasks
/// deliver their results through `events`. Returns the chosen entry, or
/// `None` on cancellation or when accepting with an empty result list.
///
/// # Errors
///
/// Fails only on terminal acquisition or terminal I/O; scan and update
/// failures never reach this function.
pub fn run_picker(
    mut session: PickerSession,
    events: Receiver<PickerEvent>,
) -> PickerResult<Option<CandidateEntry>> {
    let mut terminal = PickerTerminal::new()?;

    let outcome = run_loop(&mut terminal, &mut session, &events);

    // Release the viewport on every exit path before surfacing the result.
    let cleared = terminal.clear();
    let outcome = outcome?;
    cleared?;

    Ok(outcome)
}

fn run_loop(
    terminal: &mut PickerTerminal,
    session: &mut PickerSession,
    events: &Receiver<PickerEvent>,
) -> PickerResult<Option<CandidateEntry>> {
    let mut dirty = true;

    loop {
        if dirty {
            terminal.draw(|frame| render::draw(frame, session))?;
            dirty = false;
        }

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    match handle_key(session, key) {
                        KeyOutcome::Continue => dirty = true,
                        KeyOutcome::Accept => return Ok(session.selected().cloned()),
                        KeyOutcome::Cancel => return Ok(None),
                    }
                }
                Event::Resize(..) => dirty = true,
                _ => {}
            }
        }

        // Background tasks hand off here; the loop stays the only mutator.
        while let Ok(picker_event) = events.try_recv() {
            match picker_event {
                PickerEvent::ScanComplete(candidates) => session.on_scan_complete(candidates),
                PickerEvent::UpdateAvailable(version) => session.on_update_available(version),
            }
            dirty = true;
        }
    }
}

/// Maps one keystroke onto the session.
fn handle_key(session: &mut PickerSession, key: KeyEvent) -> KeyOutcome {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Enter => return KeyOutcome::Accept,
        KeyCode::Esc => return KeyOutcome::Cancel,
        KeyCode::Char('c') | KeyCode::Char('g') if ctrl => return KeyOutcome::Cancel,

        KeyCode::Up | KeyCode::BackTab => session.move_up(),
        KeyCode::Char('p') if ctrl => session.move_up(),
        KeyCode::Down | KeyCode::Tab => session.move_down(),
        KeyCode::Char('n') if ctrl => session.move_down(),

        KeyCode::Backspace => session.backspace(),
        KeyCode::Char(ch) if !ctrl => session.insert_char(ch),
        _ => {}
    }

    KeyOutcome::Continue
}
