use super::filter::visible_todos;
use super::form::{FormMode, PendingForm};
use super::navigation::Tab;
use crate::todo::{initial_todos, Todo, TodoId};

/// Immutable snapshot of everything the todo page shows. Transitions go
/// through `reduce`, which returns a new snapshot.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TodoState {
    pub todos: Vec<Todo>,
    pub search: String,
    pub tab: Tab,
    pub form_mode: FormMode,
    pub form: PendingForm,
    pub pending_delete: Option<TodoId>,
}

impl Default for TodoState {
    fn default() -> Self {
        TodoState::with_todos(initial_todos())
    }
}

impl TodoState {
    /// Return a fresh state over the given records.
    ///
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        TodoState {
            todos,
            search: String::new(),
            tab: Tab::Active,
            form_mode: FormMode::Hidden,
            form: PendingForm::default(),
            pending_delete: None,
        }
    }

    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    pub fn exists(&self, id: TodoId) -> bool {
        self.get(id).is_some()
    }

    pub fn editing_id(&self) -> Option<TodoId> {
        self.form_mode.edit_target()
    }

    /// Records shown on the current tab for the current search.
    ///
    pub fn visible(&self) -> Vec<&Todo> {
        visible_todos(&self.todos, self.tab, &self.search)
    }

    /// The form is only drawn on the active tab.
    ///
    pub fn form_visible(&self) -> bool {
        self.form_mode.is_open() && self.tab == Tab::Active
    }

    /// Returns (active, completed) record counts.
    ///
    pub fn counts(&self) -> (usize, usize) {
        let completed = self.todos.iter().filter(|t| t.completed).count();
        (self.todos.len() - completed, completed)
    }
}
