use super::*;
use crate::state::State;
use ratatui::layout::{Constraint, Direction, Layout};

const HEADER_HEIGHT: u16 = 3;
const TABS_HEIGHT: u16 = 3;
const FORM_HEIGHT: u16 = 11;
const LOG_HEIGHT: u16 = 8;
const FOOTER_HEIGHT: u16 = 1;

/// Render the whole page according to state.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let size = frame.size();

    let mut constraints = vec![
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(TABS_HEIGHT),
    ];
    if state.is_form_visible() {
        constraints.push(Constraint::Length(FORM_HEIGHT));
    }
    constraints.push(Constraint::Min(5));
    if state.is_log_visible() {
        constraints.push(Constraint::Length(LOG_HEIGHT));
    }
    constraints.push(Constraint::Length(FOOTER_HEIGHT));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    let mut next = chunks.iter().copied();
    let mut take = || next.next().unwrap_or_default();

    header(frame, take(), state);
    tabs(frame, take(), state);
    if state.is_form_visible() {
        form(frame, take(), state);
    }
    table(frame, take(), state);
    if state.is_log_visible() {
        log(frame, take(), state);
    }
    footer(frame, take(), state);

    // Modal goes last so it draws over everything else
    if state.has_delete_confirmation() {
        delete_confirmation(frame, size, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn draw(state: &mut State, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| all(frame, state)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buffer.get(x, y).symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn renders_seed_table() {
        let mut state = State::default();
        let screen = draw(&mut state, 160, 30);
        assert!(screen.contains("Todo List"));
        assert!(screen.contains("Todos (5)"));
        assert!(screen.contains("Completed (0)"));
        assert!(screen.contains("Date Created/Updated"));
        assert!(screen.contains("Pay Utility Bills"));
        assert!(screen.contains("1700445601"));
        assert!(screen.contains("November 20, 2025, 09:23 PM"));
        assert!(!screen.contains("Update Todo"));
    }

    #[test]
    fn renders_empty_message() {
        let mut state = State::default();
        state.switch_tab();
        let screen = draw(&mut state, 160, 30);
        assert!(screen.contains("No todos found."));
    }

    #[test]
    fn renders_edit_form() {
        let mut state = State::default();
        state.start_edit_selected();
        let screen = draw(&mut state, 160, 40);
        assert!(screen.contains("Update Todo"));
        assert!(screen.contains("Grocery Shopping"));
        assert!(screen.contains("Pick up milk"));
    }

    #[test]
    fn renders_create_form() {
        let mut state = State::default();
        state.start_create();
        let screen = draw(&mut state, 160, 40);
        assert!(screen.contains("Add Todo"));
        assert!(screen.contains("Description"));
    }

    #[test]
    fn renders_delete_confirmation() {
        let mut state = State::default();
        state.request_delete_selected();
        let screen = draw(&mut state, 160, 40);
        assert!(screen.contains("Are you sure you want to delete this todo?"));
    }

    #[test]
    fn renders_search_query() {
        let mut state = State::default();
        state.enter_search_mode();
        for c in "bills".chars() {
            state.add_search_char(c);
        }
        let screen = draw(&mut state, 160, 30);
        assert!(screen.contains("bills"));
        assert!(screen.contains("Pay Utility Bills"));
        assert!(!screen.contains("Grocery Shopping"));
    }

    #[test]
    fn renders_log_panel() {
        let mut state = State::default();
        state.set_log_visible(true);
        let screen = draw(&mut state, 160, 30);
        assert!(screen.contains("Log"));
    }

    #[test]
    fn survives_tiny_terminal() {
        let mut state = State::default();
        state.start_create();
        state.request_delete_selected();
        draw(&mut state, 20, 6);
    }
}
