use super::Frame;
use crate::state::{State, Tab};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
};

/// Render the active/completed tab bar with record counts.
///
pub fn tabs(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let (active, completed) = state.store().counts();
    let titles = vec![
        Line::from(format!(" {} ({}) ", Tab::Active.title(), active)),
        Line::from(format!(" {} ({}) ", Tab::Completed.title(), completed)),
    ];

    let tabs = Tabs::new(titles)
        .select(state.current_tab().index())
        .style(styling::muted_text_style(theme))
        .highlight_style(
            Style::default()
                .fg(theme.primary.to_color())
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider("|")
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styling::normal_block_border_style(theme)),
        );
    frame.render_widget(tabs, size);
}
