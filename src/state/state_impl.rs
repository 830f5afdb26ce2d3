use crate::config::{KeyContext, ViewHotkeys};
use crate::logger::LogBuffer;
use crate::todo::{Environment, Todo, TodoId};
use crossterm::event::KeyEvent;
use log::*;
use ratatui::layout::Rect;
use ratatui::widgets::TableState;
use tui_textarea::TextArea;

use super::form::{FormField, FormMode};
use super::navigation::{Mode, Tab};
use super::reducer::{reduce, Action};
use super::store::TodoState;

/// Houses data representative of application state.
///
/// The todo data lives in the immutable `TodoState` store and only changes
/// through `dispatch`. Everything else here is widget state derived from or
/// feeding into the store.
pub struct State {
    store: TodoState,
    env: Environment,
    mode: Mode,
    form_field: FormField,
    description_editor: TextArea<'static>, // Multi-line editor mirroring form.description
    table_state: TableState,
    terminal_size: Rect,
    show_log: bool,
    log: LogBuffer,
    theme: crate::ui::Theme,
    hotkeys: ViewHotkeys,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State::new(
            TodoState::default(),
            Environment::default(),
            crate::ui::Theme::default(),
            ViewHotkeys::default(),
            LogBuffer::default(),
        )
    }
}

impl State {
    pub fn new(
        store: TodoState,
        env: Environment,
        theme: crate::ui::Theme,
        hotkeys: ViewHotkeys,
        log: LogBuffer,
    ) -> Self {
        let mut state = State {
            description_editor: description_editor(&store.form.description),
            store,
            env,
            mode: Mode::Browse,
            form_field: FormField::Title,
            table_state: TableState::default(),
            terminal_size: Rect::default(),
            show_log: false,
            log,
            theme,
            hotkeys,
        };
        state.clamp_selection();
        state
    }

    /// Apply an action to the store, then bring widget state in line with the
    /// new snapshot.
    ///
    pub fn dispatch(&mut self, action: Action) -> &mut Self {
        debug!("Dispatching {:?}", action);
        self.store = reduce(&self.store, action, &self.env);
        if editor_text(&self.description_editor) != self.store.form.description {
            self.description_editor = description_editor(&self.store.form.description);
        }
        if !self.store.form_mode.is_open() && self.mode == Mode::Form {
            self.mode = Mode::Browse;
        }
        self.clamp_selection();
        self
    }

    /// Returns the current store snapshot.
    ///
    pub fn store(&self) -> &TodoState {
        &self.store
    }

    pub fn get_theme(&self) -> &crate::ui::Theme {
        &self.theme
    }

    pub fn get_hotkeys(&self) -> &ViewHotkeys {
        &self.hotkeys
    }

    pub fn set_terminal_size(&mut self, size: Rect) -> &mut Self {
        self.terminal_size = size;
        self
    }

    pub fn get_terminal_size(&self) -> Rect {
        self.terminal_size
    }

    pub fn current_mode(&self) -> Mode {
        self.mode
    }

    /// Returns which hotkey table applies to the next key press.
    ///
    pub fn key_context(&self) -> KeyContext {
        if self.has_delete_confirmation() {
            return KeyContext::DeleteConfirmation;
        }
        match self.mode {
            Mode::Browse => KeyContext::Browse,
            Mode::Search => KeyContext::Search,
            Mode::Form => KeyContext::Form,
        }
    }

    pub fn current_tab(&self) -> Tab {
        self.store.tab
    }

    /// Switch between the active and completed tabs.
    ///
    pub fn switch_tab(&mut self) -> &mut Self {
        let tab = self.store.tab.toggled();
        self.dispatch(Action::SelectTab(tab));
        self.table_state.select(if self.store.visible().is_empty() {
            None
        } else {
            Some(0)
        });
        self
    }

    /// Records on the current tab matching the current search.
    ///
    pub fn get_visible_todos(&self) -> Vec<&Todo> {
        self.store.visible()
    }

    pub fn get_table_state(&mut self) -> &mut TableState {
        &mut self.table_state
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.table_state.selected()
    }

    pub fn get_selected_todo(&self) -> Option<&Todo> {
        let index = self.table_state.selected()?;
        self.store.visible().into_iter().nth(index)
    }

    fn selected_id(&self) -> Option<TodoId> {
        self.get_selected_todo().map(|t| t.id)
    }

    /// Select the next visible record, wrapping to the first.
    ///
    pub fn next_todo(&mut self) -> &mut Self {
        let len = self.store.visible().len();
        if len > 0 {
            let next = match self.table_state.selected() {
                Some(i) if i + 1 < len => i + 1,
                _ => 0,
            };
            self.table_state.select(Some(next));
        }
        self
    }

    /// Select the previous visible record, wrapping to the last.
    ///
    pub fn previous_todo(&mut self) -> &mut Self {
        let len = self.store.visible().len();
        if len > 0 {
            let prev = match self.table_state.selected() {
                Some(i) if i > 0 => i - 1,
                _ => len - 1,
            };
            self.table_state.select(Some(prev));
        }
        self
    }

    fn clamp_selection(&mut self) {
        let len = self.store.visible().len();
        let selected = match self.table_state.selected() {
            _ if len == 0 => None,
            Some(i) => Some(i.min(len - 1)),
            None => Some(0),
        };
        self.table_state.select(selected);
    }

    // Search

    pub fn is_search_mode(&self) -> bool {
        self.mode == Mode::Search
    }

    pub fn get_search_query(&self) -> &str {
        &self.store.search
    }

    pub fn enter_search_mode(&mut self) -> &mut Self {
        self.mode = Mode::Search;
        self
    }

    /// Leave search mode keeping the query.
    ///
    pub fn exit_search_mode(&mut self) -> &mut Self {
        self.mode = Mode::Browse;
        self
    }

    /// Clear the query and leave search mode.
    ///
    pub fn clear_search(&mut self) -> &mut Self {
        self.mode = Mode::Browse;
        self.dispatch(Action::SetSearch(String::new()))
    }

    pub fn add_search_char(&mut self, c: char) -> &mut Self {
        let search = format!("{}{}", self.store.search, c);
        self.table_state.select(Some(0));
        self.dispatch(Action::SetSearch(search))
    }

    pub fn remove_search_char(&mut self) -> &mut Self {
        let mut search = self.store.search.clone();
        search.pop();
        self.dispatch(Action::SetSearch(search))
    }

    // Form

    pub fn is_form_visible(&self) -> bool {
        self.store.form_visible()
    }

    pub fn get_form_mode(&self) -> FormMode {
        self.store.form_mode
    }

    pub fn get_form_field(&self) -> FormField {
        self.form_field
    }

    pub fn get_form_title(&self) -> &str {
        &self.store.form.title
    }

    pub fn get_form_description(&self) -> &str {
        &self.store.form.description
    }

    pub fn get_description_editor(&mut self) -> &mut TextArea<'static> {
        &mut self.description_editor
    }

    /// Open an empty create form and focus its title.
    ///
    pub fn start_create(&mut self) -> &mut Self {
        self.dispatch(Action::OpenCreateForm);
        self.mode = Mode::Form;
        self.form_field = FormField::Title;
        self
    }

    /// Open the edit form for the selected record. Completed records have no
    /// edit affordance.
    ///
    pub fn start_edit_selected(&mut self) -> &mut Self {
        match self.get_selected_todo().map(|t| (t.id, t.completed)) {
            Some((id, false)) => {
                self.dispatch(Action::StartEdit(id));
                self.mode = Mode::Form;
                self.form_field = FormField::Title;
            }
            Some(_) => debug!("Completed todos cannot be edited"),
            None => {}
        }
        self
    }

    pub fn next_form_field(&mut self) -> &mut Self {
        self.form_field = self.form_field.next();
        self
    }

    pub fn add_form_title_char(&mut self, c: char) -> &mut Self {
        let title = format!("{}{}", self.store.form.title, c);
        self.dispatch(Action::SetTitle(title))
    }

    pub fn remove_form_title_char(&mut self) -> &mut Self {
        let mut title = self.store.form.title.clone();
        title.pop();
        self.dispatch(Action::SetTitle(title))
    }

    /// Forward a key press to the description editor and publish its text.
    ///
    pub fn input_description(&mut self, key: KeyEvent) -> &mut Self {
        if self.description_editor.input(key) {
            let description = editor_text(&self.description_editor);
            self.dispatch(Action::SetDescription(description));
        }
        self
    }

    /// Submit the form. Blank fields leave the form open.
    ///
    pub fn submit_form(&mut self) -> &mut Self {
        let mode = self.store.form_mode;
        let before = self.store.todos.len();
        self.dispatch(Action::Submit);
        if self.store.form_mode.is_open() {
            debug!("Ignoring submit with an empty title or description");
            return self;
        }
        match mode {
            FormMode::Edit(id) => info!("Updated todo {}", id),
            _ if self.store.todos.len() > before => {
                let id = self.store.todos[0].id;
                info!("Created todo {}", id);
                // Follow the new record when the current search shows it.
                if let Some(index) = self.store.visible().iter().position(|t| t.id == id) {
                    self.table_state.select(Some(index));
                }
            }
            _ => {}
        }
        self
    }

    pub fn cancel_form(&mut self) -> &mut Self {
        self.dispatch(Action::CancelForm)
    }

    // Completion and deletion

    pub fn toggle_selected(&mut self) -> &mut Self {
        if let Some(id) = self.selected_id() {
            self.dispatch(Action::ToggleComplete(id));
            info!("Toggled completion of todo {}", id);
        }
        self
    }

    pub fn request_delete_selected(&mut self) -> &mut Self {
        if let Some(id) = self.selected_id() {
            self.dispatch(Action::RequestDelete(id));
        }
        self
    }

    pub fn has_delete_confirmation(&self) -> bool {
        self.store.pending_delete.is_some()
    }

    /// Returns the record awaiting delete confirmation.
    ///
    pub fn get_pending_delete(&self) -> Option<&Todo> {
        self.store.pending_delete.and_then(|id| self.store.get(id))
    }

    pub fn confirm_delete(&mut self) -> &mut Self {
        if let Some(id) = self.store.pending_delete {
            self.dispatch(Action::ResolveDelete(true));
            info!("Deleted todo {}", id);
        }
        self
    }

    pub fn cancel_delete(&mut self) -> &mut Self {
        self.dispatch(Action::ResolveDelete(false))
    }

    // Log panel

    pub fn is_log_visible(&self) -> bool {
        self.show_log
    }

    pub fn set_log_visible(&mut self, visible: bool) -> &mut Self {
        self.show_log = visible;
        self
    }

    pub fn toggle_log(&mut self) -> &mut Self {
        self.show_log = !self.show_log;
        self
    }

    pub fn get_log_entries(&self) -> Vec<String> {
        self.log.entries()
    }
}

fn description_editor(text: &str) -> TextArea<'static> {
    TextArea::from(text.split('\n').map(str::to_owned).collect::<Vec<_>>())
}

fn editor_text(editor: &TextArea) -> String {
    editor.lines().join("\n")
}
