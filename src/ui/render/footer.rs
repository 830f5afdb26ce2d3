use super::Frame;
use crate::config::hotkeys::build_footer_text;
use crate::config::{HotkeyAction, KeyContext};
use crate::state::State;
use crate::ui::ColorSpec;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Format hotkeys for the current input context as a display string.
///
fn format_hotkeys_for_context(context: KeyContext, state: &State) -> String {
    let hotkeys = state.get_hotkeys().for_context(context);
    match context {
        KeyContext::Browse => {
            let edit = match state.get_selected_todo() {
                Some(todo) if todo.completed => None,
                _ => Some((HotkeyAction::EditTodo, "edit", None)),
            };
            let mut actions = vec![
                (
                    HotkeyAction::NavigateNext,
                    "navigate",
                    Some(HotkeyAction::NavigatePrev),
                ),
                (HotkeyAction::AddTodo, "add", None),
            ];
            actions.extend(edit);
            actions.extend([
                (HotkeyAction::DeleteTodo, "delete", None),
                (HotkeyAction::ToggleComplete, "complete", None),
                (HotkeyAction::SwitchTab, "switch tab", None),
                (HotkeyAction::EnterSearch, "search", None),
                (HotkeyAction::ClearSearch, "clear search", None),
                (HotkeyAction::ToggleLog, "log", None),
                (HotkeyAction::Quit, "quit", None),
            ]);
            build_footer_text(hotkeys, &actions)
        }
        KeyContext::Search => {
            let text = build_footer_text(
                hotkeys,
                &[
                    (HotkeyAction::SearchModeExit, "done", None),
                    (HotkeyAction::ClearSearch, "clear", None),
                ],
            );
            format!(" Type to search,{}", text)
        }
        KeyContext::Form => {
            let text = build_footer_text(
                hotkeys,
                &[
                    (HotkeyAction::NextField, "next field", None),
                    (HotkeyAction::SubmitForm, "submit", None),
                    (HotkeyAction::CancelForm, "cancel", None),
                ],
            );
            format!(" Type to edit,{}", text)
        }
        KeyContext::DeleteConfirmation => build_footer_text(
            hotkeys,
            &[
                (HotkeyAction::DeleteConfirm, "confirm delete", None),
                (HotkeyAction::DeleteCancel, "cancel", None),
            ],
        ),
    }
}

/// Render footer widget with the mode badge and the bindings in effect.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let context = state.key_context();
    let (label, color): (&str, &ColorSpec) = match context {
        KeyContext::Browse => ("TODOS", &theme.primary),
        KeyContext::Search => ("SEARCH", &theme.footer_search),
        KeyContext::Form => ("FORM", &theme.footer_edit),
        KeyContext::DeleteConfirmation => ("DELETE", &theme.footer_delete),
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", label),
            Style::default()
                .fg(theme.footer_normal.to_color())
                .bg(color.to_color())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format_hotkeys_for_context(context, state),
            Style::default().fg(theme.text_muted.to_color()),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), size);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browse_footer_lists_edit_for_active_records() {
        let state = State::default();
        let text = format_hotkeys_for_context(KeyContext::Browse, &state);
        assert!(text.contains("e: edit"));
        assert!(text.contains("Space: complete"));
        assert!(text.contains("q: quit"));
    }

    #[test]
    fn browse_footer_hides_edit_for_completed_records() {
        let mut state = State::default();
        state.toggle_selected();
        state.switch_tab();
        let text = format_hotkeys_for_context(KeyContext::Browse, &state);
        assert!(!text.contains("edit"));
    }

    #[test]
    fn form_footer() {
        let state = State::default();
        let text = format_hotkeys_for_context(KeyContext::Form, &state);
        assert_eq!(" Type to edit, Tab: next field, Ctrl+s: submit, Esc: cancel", text);
    }

    #[test]
    fn delete_footer() {
        let state = State::default();
        let text = format_hotkeys_for_context(KeyContext::DeleteConfirmation, &state);
        assert_eq!(" Enter: confirm delete, Esc: cancel", text);
    }
}
