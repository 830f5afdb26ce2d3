use super::Frame;
use crate::config::{hotkeys::format_hotkey_display, HotkeyAction};
use crate::state::{FormField, FormMode, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the create/edit form: title line, multi-line description and the
/// submit/cancel controls.
///
pub fn form(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme().clone();
    let mode = state.get_form_mode();
    let heading = match mode {
        FormMode::Edit(id) => format!("Edit Todo {}", id),
        _ => "New Todo".to_string(),
    };
    let outer = Block::default()
        .title(Span::styled(heading, styling::active_block_title_style()))
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style(&theme));
    let inner = outer.inner(size);
    frame.render_widget(outer, size);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(3),    // Description
            Constraint::Length(1), // Controls
        ])
        .split(inner);

    let focused = state.get_form_field();
    let title_active = focused == FormField::Title;
    let mut title_spans = vec![Span::styled(
        state.get_form_title().to_string(),
        styling::normal_text_style(&theme),
    )];
    if title_active {
        title_spans.push(Span::styled("_", styling::muted_text_style(&theme)));
    }
    let title =
        Paragraph::new(Line::from(title_spans)).block(field_block("Title", title_active, &theme));
    frame.render_widget(title, chunks[0]);

    let description_active = focused == FormField::Description;
    let editor = state.get_description_editor();
    editor.set_block(field_block("Description", description_active, &theme));
    editor.set_style(styling::normal_text_style(&theme));
    editor.set_cursor_line_style(Style::default());
    editor.set_cursor_style(if description_active {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    });
    frame.render_widget(&*editor, chunks[1]);

    let hotkeys = &state.get_hotkeys().form;
    let key = |action: HotkeyAction| {
        hotkeys
            .get(&action)
            .map(format_hotkey_display)
            .unwrap_or_default()
    };
    let controls = Line::from(vec![
        Span::styled(
            format!(" [{}] ", key(HotkeyAction::SubmitForm)),
            styling::muted_text_style(&theme),
        ),
        Span::styled(
            mode.submit_label(),
            Style::default()
                .fg(theme.primary.to_color())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("   [{}] ", key(HotkeyAction::CancelForm)),
            styling::muted_text_style(&theme),
        ),
        Span::styled("Cancel", styling::normal_text_style(&theme)),
        Span::styled(
            format!("   [{}] switch field", key(HotkeyAction::NextField)),
            styling::muted_text_style(&theme),
        ),
    ]);
    frame.render_widget(Paragraph::new(controls), chunks[2]);
}

fn field_block(label: &str, active: bool, theme: &crate::ui::Theme) -> Block<'static> {
    let block = Block::default().borders(Borders::ALL);
    if active {
        block
            .title(Span::styled(label.to_string(), styling::active_block_title_style()))
            .border_style(Style::default().fg(theme.warning.to_color()))
    } else {
        block
            .title(label.to_string())
            .border_style(styling::normal_block_border_style(theme))
    }
}
