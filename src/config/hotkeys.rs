//! Hotkey configuration management.
//!
//! This module defines the hotkey system for the application, including action types,
//! hotkey bindings, and default configurations per input context.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

/// Represents all possible actions that can be bound to hotkeys.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HotkeyAction {
    // Table actions
    NavigateNext,
    NavigatePrev,
    AddTodo,
    EditTodo,
    DeleteTodo,
    ToggleComplete,
    SwitchTab,
    EnterSearch,
    ClearSearch,
    ToggleLog,
    Quit,

    // Form actions
    NextField,
    SubmitForm,
    CancelForm,

    // Special mode actions
    SearchModeExit,
    DeleteConfirm,
    DeleteCancel,
}

/// Represents a key combination (KeyCode + modifiers).
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hotkey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Hotkey {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Hotkey { code, modifiers }
    }

    /// Key without modifiers.
    ///
    pub fn plain(code: KeyCode) -> Self {
        Hotkey::new(code, KeyModifiers::empty())
    }
}

/// Custom deserialization for Hotkey.
///
impl<'de> Deserialize<'de> for Hotkey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct HotkeyHelper {
            code: KeyCodeSerde,
            #[serde(default)]
            char: Option<char>,
            #[serde(default)]
            modifiers: KeyModifiersSerde,
        }

        let helper = HotkeyHelper::deserialize(deserializer)?;
        let code = match helper.code {
            KeyCodeSerde::Char => match helper.char {
                Some(c) => KeyCode::Char(c),
                None => {
                    return Err(serde::de::Error::custom(
                        "Char key code requires 'char' field",
                    ))
                }
            },
            KeyCodeSerde::Esc => KeyCode::Esc,
            KeyCodeSerde::Enter => KeyCode::Enter,
            KeyCodeSerde::Backspace => KeyCode::Backspace,
            KeyCodeSerde::Tab => KeyCode::Tab,
            KeyCodeSerde::Delete => KeyCode::Delete,
            KeyCodeSerde::Up => KeyCode::Up,
            KeyCodeSerde::Down => KeyCode::Down,
            KeyCodeSerde::Left => KeyCode::Left,
            KeyCodeSerde::Right => KeyCode::Right,
        };
        Ok(Hotkey {
            code,
            modifiers: helper.modifiers.into(),
        })
    }
}

/// Key codes accepted in the configuration file.
///
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
enum KeyCodeSerde {
    Char,
    Esc,
    Enter,
    Backspace,
    Tab,
    Delete,
    Up,
    Down,
    Left,
    Right,
}

/// Modifier flags accepted in the configuration file.
///
#[derive(Debug, Clone, Default, Deserialize)]
struct KeyModifiersSerde {
    #[serde(default)]
    control: bool,
    #[serde(default)]
    shift: bool,
    #[serde(default)]
    alt: bool,
}

impl From<KeyModifiersSerde> for KeyModifiers {
    fn from(serde: KeyModifiersSerde) -> Self {
        let mut result = KeyModifiers::empty();
        if serde.control {
            result |= KeyModifiers::CONTROL;
        }
        if serde.shift {
            result |= KeyModifiers::SHIFT;
        }
        if serde.alt {
            result |= KeyModifiers::ALT;
        }
        result
    }
}

/// Specifying which hotkey table handles the next key press.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    Browse,
    Form,
    Search,
    DeleteConfirmation,
}

/// Maps hotkey actions to their key bindings for each input context.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewHotkeys {
    pub browse: HashMap<HotkeyAction, Hotkey>,
    pub form: HashMap<HotkeyAction, Hotkey>,
    pub search: HashMap<HotkeyAction, Hotkey>,
    pub delete_confirmation: HashMap<HotkeyAction, Hotkey>,
}

impl Default for ViewHotkeys {
    fn default() -> Self {
        default_hotkeys()
    }
}

impl ViewHotkeys {
    /// Rebind the actions named in `overrides`, keeping every other binding.
    ///
    pub fn apply(&mut self, overrides: HotkeyOverrides) {
        self.browse.extend(overrides.browse);
        self.form.extend(overrides.form);
        self.search.extend(overrides.search);
        self.delete_confirmation.extend(overrides.delete_confirmation);
    }

    pub fn for_context(&self, context: KeyContext) -> &HashMap<HotkeyAction, Hotkey> {
        match context {
            KeyContext::Browse => &self.browse,
            KeyContext::Form => &self.form,
            KeyContext::Search => &self.search,
            KeyContext::DeleteConfirmation => &self.delete_confirmation,
        }
    }
}

/// Bindings read from the configuration file. Each context lists only the
/// actions being rebound.
///
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HotkeyOverrides {
    pub browse: HashMap<HotkeyAction, Hotkey>,
    pub form: HashMap<HotkeyAction, Hotkey>,
    pub search: HashMap<HotkeyAction, Hotkey>,
    pub delete_confirmation: HashMap<HotkeyAction, Hotkey>,
}

/// Returns default hotkey mappings for all contexts.
///
pub fn default_hotkeys() -> ViewHotkeys {
    let browse = HashMap::from([
        (HotkeyAction::NavigateNext, Hotkey::plain(KeyCode::Char('j'))),
        (HotkeyAction::NavigatePrev, Hotkey::plain(KeyCode::Char('k'))),
        (HotkeyAction::AddTodo, Hotkey::plain(KeyCode::Char('n'))),
        (HotkeyAction::EditTodo, Hotkey::plain(KeyCode::Char('e'))),
        (HotkeyAction::DeleteTodo, Hotkey::plain(KeyCode::Char('d'))),
        (HotkeyAction::ToggleComplete, Hotkey::plain(KeyCode::Char(' '))),
        (HotkeyAction::SwitchTab, Hotkey::plain(KeyCode::Tab)),
        (HotkeyAction::EnterSearch, Hotkey::plain(KeyCode::Char('/'))),
        (HotkeyAction::ClearSearch, Hotkey::plain(KeyCode::Esc)),
        (HotkeyAction::ToggleLog, Hotkey::plain(KeyCode::Char('l'))),
        (HotkeyAction::Quit, Hotkey::plain(KeyCode::Char('q'))),
    ]);

    let form = HashMap::from([
        (HotkeyAction::NextField, Hotkey::plain(KeyCode::Tab)),
        (
            HotkeyAction::SubmitForm,
            Hotkey::new(KeyCode::Char('s'), KeyModifiers::CONTROL),
        ),
        (HotkeyAction::CancelForm, Hotkey::plain(KeyCode::Esc)),
    ]);

    let search = HashMap::from([
        (HotkeyAction::SearchModeExit, Hotkey::plain(KeyCode::Enter)),
        (HotkeyAction::ClearSearch, Hotkey::plain(KeyCode::Esc)),
    ]);

    let delete_confirmation = HashMap::from([
        (HotkeyAction::DeleteConfirm, Hotkey::plain(KeyCode::Enter)),
        (HotkeyAction::DeleteCancel, Hotkey::plain(KeyCode::Esc)),
    ]);

    ViewHotkeys {
        browse,
        form,
        search,
        delete_confirmation,
    }
}

/// Checks if a KeyEvent matches a Hotkey.
///
pub fn matches_hotkey(event: &KeyEvent, hotkey: &Hotkey) -> bool {
    event.code == hotkey.code && event.modifiers == hotkey.modifiers
}

/// Gets the action for a KeyEvent in a specific context.
///
pub fn get_action_for_event(
    event: &KeyEvent,
    context: KeyContext,
    hotkeys: &ViewHotkeys,
) -> Option<HotkeyAction> {
    hotkeys
        .for_context(context)
        .iter()
        .find(|(_, hotkey)| matches_hotkey(event, hotkey))
        .map(|(action, _)| *action)
}

/// Builds a footer text string from hotkey configurations.
/// Takes a list of tuples: (action, description, optional_second_action_for_paired_keys)
///
pub fn build_footer_text(
    hotkeys: &HashMap<HotkeyAction, Hotkey>,
    actions: &[(HotkeyAction, &str, Option<HotkeyAction>)],
) -> String {
    let parts: Vec<String> = actions
        .iter()
        .filter_map(|(action, description, paired_action)| {
            let hotkey = hotkeys.get(action)?;
            let keys = match paired_action.and_then(|paired| hotkeys.get(&paired)) {
                Some(paired_hotkey) => format!(
                    "{}/{}",
                    format_hotkey_display(hotkey),
                    format_hotkey_display(paired_hotkey)
                ),
                None => format_hotkey_display(hotkey),
            };
            Some(format!(" {}: {}", keys, description))
        })
        .collect();
    parts.join(",")
}

/// Formats a hotkey for display in the footer.
///
pub fn format_hotkey_display(hotkey: &Hotkey) -> String {
    let mut parts = Vec::new();
    if hotkey.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl");
    }
    if hotkey.modifiers.contains(KeyModifiers::SHIFT) {
        parts.push("Shift");
    }
    if hotkey.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt");
    }

    let key_str = match &hotkey.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Delete => "Del".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        _ => "Unknown".to_string(),
    };

    if parts.is_empty() {
        key_str
    } else {
        format!("{}+{}", parts.join("+"), key_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_matches_hotkey() {
        let hotkey = Hotkey::plain(KeyCode::Char('j'));
        assert!(matches_hotkey(&key(KeyCode::Char('j'), KeyModifiers::NONE), &hotkey));
        assert!(!matches_hotkey(&key(KeyCode::Char('k'), KeyModifiers::NONE), &hotkey));
        assert!(!matches_hotkey(&key(KeyCode::Char('j'), KeyModifiers::CONTROL), &hotkey));
    }

    #[test]
    fn test_get_action_for_event() {
        let hotkeys = default_hotkeys();
        let esc = key(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(
            Some(HotkeyAction::ClearSearch),
            get_action_for_event(&esc, KeyContext::Browse, &hotkeys)
        );
        assert_eq!(
            Some(HotkeyAction::CancelForm),
            get_action_for_event(&esc, KeyContext::Form, &hotkeys)
        );
        assert_eq!(
            Some(HotkeyAction::DeleteCancel),
            get_action_for_event(&esc, KeyContext::DeleteConfirmation, &hotkeys)
        );
        let ctrl_s = key(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(
            Some(HotkeyAction::SubmitForm),
            get_action_for_event(&ctrl_s, KeyContext::Form, &hotkeys)
        );
        assert_eq!(None, get_action_for_event(&ctrl_s, KeyContext::Browse, &hotkeys));
    }

    #[test]
    fn test_default_hotkeys() {
        let hotkeys = default_hotkeys();
        assert_eq!(11, hotkeys.browse.len());
        assert_eq!(3, hotkeys.form.len());
        assert_eq!(2, hotkeys.search.len());
        assert_eq!(2, hotkeys.delete_confirmation.len());
    }

    #[test]
    fn test_default_browse_keys_are_distinct() {
        let hotkeys = default_hotkeys();
        let mut keys: Vec<&Hotkey> = hotkeys.browse.values().collect();
        let total = keys.len();
        keys.sort_by_key(|h| format_hotkey_display(h));
        keys.dedup();
        assert_eq!(total, keys.len());
    }

    #[test]
    fn test_hotkey_deserialization() {
        let hotkey: Hotkey =
            serde_yaml::from_str("code: Char\nchar: s\nmodifiers:\n  control: true\n").unwrap();
        assert_eq!(Hotkey::new(KeyCode::Char('s'), KeyModifiers::CONTROL), hotkey);
        let tab: Hotkey = serde_yaml::from_str("code: Tab\n").unwrap();
        assert_eq!(Hotkey::plain(KeyCode::Tab), tab);
    }

    #[test]
    fn test_overrides_keep_other_bindings() {
        let mut hotkeys = default_hotkeys();
        let overrides: HotkeyOverrides = serde_yaml::from_str(
            "browse:\n  quit: { code: Char, char: x }\nform:\n  submit_form: { code: Enter }\n",
        )
        .unwrap();
        hotkeys.apply(overrides);
        assert_eq!(11, hotkeys.browse.len());
        assert_eq!(Hotkey::plain(KeyCode::Char('x')), hotkeys.browse[&HotkeyAction::Quit]);
        assert_eq!(Hotkey::plain(KeyCode::Char('n')), hotkeys.browse[&HotkeyAction::AddTodo]);
        assert_eq!(Hotkey::plain(KeyCode::Enter), hotkeys.form[&HotkeyAction::SubmitForm]);
        assert_eq!(Hotkey::plain(KeyCode::Esc), hotkeys.form[&HotkeyAction::CancelForm]);
        assert_eq!(default_hotkeys().search, hotkeys.search);
    }

    #[test]
    fn test_char_requires_char_field() {
        let result: Result<Hotkey, _> = serde_yaml::from_str("code: Char\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_format_hotkey_display() {
        assert_eq!("Space", format_hotkey_display(&Hotkey::plain(KeyCode::Char(' '))));
        assert_eq!(
            "Ctrl+s",
            format_hotkey_display(&Hotkey::new(KeyCode::Char('s'), KeyModifiers::CONTROL))
        );
        assert_eq!("Tab", format_hotkey_display(&Hotkey::plain(KeyCode::Tab)));
    }

    #[test]
    fn test_build_footer_text() {
        let hotkeys = default_hotkeys();
        let text = build_footer_text(
            &hotkeys.browse,
            &[
                (
                    HotkeyAction::NavigateNext,
                    "navigate",
                    Some(HotkeyAction::NavigatePrev),
                ),
                (HotkeyAction::AddTodo, "add", None),
                (HotkeyAction::SubmitForm, "missing", None),
            ],
        );
        assert_eq!(" j/k: navigate, n: add", text);
    }
}
