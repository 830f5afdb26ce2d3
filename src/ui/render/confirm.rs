use super::Frame;
use crate::config::{hotkeys::format_hotkey_display, HotkeyAction};
use crate::state::State;
use crate::utils::text::truncate;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

const PROMPT: &str = "Are you sure you want to delete this todo?";
const MAX_TITLE_CHARS: usize = 45;

/// Render the blocking delete confirmation dialog on top of the page.
///
pub fn delete_confirmation(frame: &mut Frame, size: Rect, state: &State) {
    let popup_area = centered_rect(60, 30, size);
    frame.render_widget(Clear, popup_area);

    let theme = state.get_theme();
    let todo_title = state
        .get_pending_delete()
        .map(|t| truncate(&t.title, MAX_TITLE_CHARS))
        .unwrap_or_else(|| "this todo".to_string());

    let hotkeys = &state.get_hotkeys().delete_confirmation;
    let confirm = hotkeys
        .get(&HotkeyAction::DeleteConfirm)
        .map(format_hotkey_display)
        .unwrap_or_default();
    let cancel = hotkeys
        .get(&HotkeyAction::DeleteCancel)
        .map(format_hotkey_display)
        .unwrap_or_default();

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            PROMPT,
            Style::default()
                .fg(theme.text.to_color())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("\"{}\"", todo_title),
            Style::default().fg(theme.warning.to_color()),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{}: confirm, {}: cancel", confirm, cancel),
            Style::default().fg(theme.text_muted.to_color()),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(
                    "Confirm Delete",
                    Style::default()
                        .fg(theme.error.to_color())
                        .add_modifier(Modifier::BOLD),
                ))
                .border_style(
                    Style::default()
                        .fg(theme.error.to_color())
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, popup_area);
}

/// Helper function to create a centered rectangle (ratatui modal pattern)
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_inside() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(60, 30, area);
        assert_eq!(60, popup.width);
        assert_eq!(15, popup.height);
        assert_eq!(20, popup.x);
        assert!(popup.y > 0 && popup.bottom() < area.bottom());
    }
}
