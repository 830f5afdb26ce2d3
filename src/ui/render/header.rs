use super::Frame;
use crate::config::{hotkeys::format_hotkey_display, HotkeyAction};
use crate::state::State;
use crate::ui::widgets::styling;
use crate::ui::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const BANNER: &str = "Todo List";

/// Render the banner, the search box and the add hint.
///
pub fn header(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(15),
            Constraint::Min(10),
            Constraint::Length(20),
        ])
        .split(size);

    let banner = Paragraph::new(Span::styled(BANNER, styling::banner_style(theme)))
        .alignment(Alignment::Center)
        .block(bordered(theme));
    frame.render_widget(banner, chunks[0]);

    let mut search_block = Block::default()
        .title("Search")
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));
    let query = state.get_search_query();
    let search_line = if state.is_search_mode() {
        search_block = search_block
            .border_style(styling::active_block_border_style(theme))
            .title(Span::styled("Search", styling::active_block_title_style()));
        Line::from(vec![
            Span::styled(format!("/{}", query), styling::normal_text_style(theme)),
            Span::styled("_", styling::muted_text_style(theme)),
        ])
    } else if query.is_empty() {
        Line::from(Span::styled("Search...", styling::muted_text_style(theme)))
    } else {
        Line::from(Span::styled(query.to_string(), styling::normal_text_style(theme)))
    };
    frame.render_widget(Paragraph::new(search_line).block(search_block), chunks[1]);

    let add_key = state
        .get_hotkeys()
        .browse
        .get(&HotkeyAction::AddTodo)
        .map(format_hotkey_display)
        .unwrap_or_default();
    let add = Paragraph::new(Line::from(vec![
        Span::styled(format!("{} ", add_key), styling::muted_text_style(theme)),
        Span::styled(
            "Add Todo",
            styling::active_block_title_style().fg(theme.primary.to_color()),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(bordered(theme));
    frame.render_widget(add, chunks[2]);
}

fn bordered(theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme))
}
