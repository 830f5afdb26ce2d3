use super::Frame;
use crate::state::State;
use crate::todo::Todo;
use crate::ui::widgets::styling;
use crate::utils::text::single_line;
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    text::Span,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

const EMPTY_MESSAGE: &str = "No todos found.";
const HEADERS: [&str; 5] = ["ID", "Title", "Description", "Date Created/Updated", "Action"];

/// Render the todo table for the current tab and search.
///
pub fn table(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme().clone();
    let focused = !state.is_form_visible() && !state.is_search_mode();
    let block = if focused {
        Block::default()
            .borders(Borders::ALL)
            .border_style(styling::active_block_border_style(&theme))
            .title(Span::styled(
                state.current_tab().title(),
                styling::active_block_title_style(),
            ))
    } else {
        Block::default()
            .borders(Borders::ALL)
            .border_style(styling::normal_block_border_style(&theme))
            .title(state.current_tab().title())
    };

    let rows: Vec<Row> = state.get_visible_todos().into_iter().map(row).collect();
    if rows.is_empty() {
        let inner = block.inner(size);
        frame.render_widget(block, size);
        let header_height = 1.min(inner.height);
        let header = Row::new(HEADERS).style(styling::header_style(&theme));
        frame.render_widget(
            Table::new(vec![header], widths()),
            Rect { height: header_height, ..inner },
        );
        let message = Paragraph::new(Span::styled(EMPTY_MESSAGE, styling::muted_text_style(&theme)))
            .alignment(Alignment::Center);
        let body = Rect {
            y: inner.y + header_height,
            height: inner.height - header_height,
            ..inner
        };
        frame.render_widget(message, body);
        return;
    }

    let table = Table::new(rows, widths())
        .header(Row::new(HEADERS).style(styling::header_style(&theme)))
        .style(styling::normal_text_style(&theme))
        .highlight_style(styling::selected_row_style(&theme))
        .highlight_symbol("> ")
        .column_spacing(1)
        .block(block);
    frame.render_stateful_widget(table, size, state.get_table_state());
}

fn widths() -> [Constraint; 5] {
    [
        Constraint::Length(13),
        Constraint::Percentage(20),
        Constraint::Min(20),
        Constraint::Length(28),
        Constraint::Length(35),
    ]
}

fn row(todo: &Todo) -> Row<'static> {
    Row::new(vec![
        Cell::from(todo.id.to_string()),
        Cell::from(todo.title.clone()),
        Cell::from(single_line(&todo.description)),
        Cell::from(todo.formatted_date()),
        Cell::from(actions(todo)),
    ])
}

/// Controls offered for a record. Completed records cannot be edited.
///
fn actions(todo: &Todo) -> &'static str {
    if todo.completed {
        "[Delete] [Mark as Todo]"
    } else {
        "[Edit] [Delete] [Mark as Completed]"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::initial_todos;

    #[test]
    fn actions_hide_edit_for_completed() {
        let mut todo = initial_todos().remove(0);
        assert!(actions(&todo).contains("[Edit]"));
        assert!(actions(&todo).contains("Mark as Completed"));
        todo.completed = true;
        assert!(!actions(&todo).contains("[Edit]"));
        assert!(actions(&todo).contains("Mark as Todo"));
    }
}
