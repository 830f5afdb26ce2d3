use crate::config::{hotkeys::get_action_for_event, HotkeyAction, KeyContext};
use crate::state::{FormField, State};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                        if tx_clone.send(Event::Input(key)).is_err() {
                            break;
                        }
                    }
                    Ok(_) => (),
                    Err(e) => error!("Failed to read terminal event: {}", e),
                },
                Ok(false) => (),
                Err(e) => error!("Failed to poll terminal events: {}", e),
            }
            if tx_clone.send(Event::Tick).is_err() {
                break;
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(event) => Ok(handle_key(event, state)),
            Event::Tick => Ok(true),
        }
    }
}

/// Apply a single key press to the state. Returns false if exit was
/// requested.
///
pub fn handle_key(event: KeyEvent, state: &mut State) -> bool {
    if event.code == KeyCode::Char('c') && event.modifiers.contains(KeyModifiers::CONTROL) {
        debug!("Processing exit terminal event '{:?}'...", event);
        return false;
    }

    let context = state.key_context();
    let action = get_action_for_event(&event, context, state.get_hotkeys());
    match context {
        KeyContext::DeleteConfirmation => match action {
            Some(HotkeyAction::DeleteConfirm) => {
                state.confirm_delete();
            }
            Some(HotkeyAction::DeleteCancel) => {
                state.cancel_delete();
            }
            _ => (),
        },
        KeyContext::Search => match (action, event.code) {
            (Some(HotkeyAction::SearchModeExit), _) => {
                state.exit_search_mode();
            }
            (Some(HotkeyAction::ClearSearch), _) => {
                state.clear_search();
                state.exit_search_mode();
            }
            (_, KeyCode::Backspace) => {
                state.remove_search_char();
            }
            (_, KeyCode::Char(c)) if is_text_input(&event) => {
                state.add_search_char(c);
            }
            _ => (),
        },
        KeyContext::Form => match action {
            Some(HotkeyAction::NextField) => {
                state.next_form_field();
            }
            Some(HotkeyAction::SubmitForm) => {
                state.submit_form();
            }
            Some(HotkeyAction::CancelForm) => {
                state.cancel_form();
            }
            _ => handle_form_input(event, state),
        },
        KeyContext::Browse => return handle_browse(action, event, state),
    }
    true
}

fn handle_form_input(event: KeyEvent, state: &mut State) {
    match state.get_form_field() {
        FormField::Title => match event.code {
            KeyCode::Char(c) if is_text_input(&event) => {
                state.add_form_title_char(c);
            }
            KeyCode::Backspace => {
                state.remove_form_title_char();
            }
            KeyCode::Enter => {
                state.next_form_field();
            }
            _ => (),
        },
        FormField::Description => {
            state.input_description(event);
        }
    }
}

fn handle_browse(action: Option<HotkeyAction>, event: KeyEvent, state: &mut State) -> bool {
    match action {
        Some(HotkeyAction::Quit) => {
            debug!("Processing exit terminal event '{:?}'...", event);
            return false;
        }
        Some(HotkeyAction::NavigateNext) => {
            state.next_todo();
        }
        Some(HotkeyAction::NavigatePrev) => {
            state.previous_todo();
        }
        Some(HotkeyAction::AddTodo) => {
            state.start_create();
        }
        Some(HotkeyAction::EditTodo) => {
            state.start_edit_selected();
        }
        Some(HotkeyAction::DeleteTodo) => {
            state.request_delete_selected();
        }
        Some(HotkeyAction::ToggleComplete) => {
            state.toggle_selected();
        }
        Some(HotkeyAction::SwitchTab) => {
            state.switch_tab();
        }
        Some(HotkeyAction::EnterSearch) => {
            state.enter_search_mode();
        }
        Some(HotkeyAction::ClearSearch) => {
            state.clear_search();
        }
        Some(HotkeyAction::ToggleLog) => {
            state.toggle_log();
        }
        _ => match event.code {
            KeyCode::Down => {
                state.next_todo();
            }
            KeyCode::Up => {
                state.previous_todo();
            }
            _ => (),
        },
    }
    true
}

fn is_text_input(event: &KeyEvent) -> bool {
    event.modifiers == KeyModifiers::NONE || event.modifiers == KeyModifiers::SHIFT
}
