//! State transitions for the todo page.
//!
//! Every user interaction maps to one `Action`. `reduce` is a pure function of
//! the current state, the action and the environment: it never mutates its
//! input and returns the next state.

use super::form::{FormMode, PendingForm};
use super::navigation::Tab;
use super::store::TodoState;
use crate::todo::{Environment, Todo, TodoId};

/// Specifying every transition the page supports.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    SelectTab(Tab),
    SetSearch(String),
    /// Open an empty create form on the active tab.
    OpenCreateForm,
    StartEdit(TodoId),
    SetTitle(String),
    SetDescription(String),
    /// Create or update from the pending form.
    Submit,
    CancelForm,
    ToggleComplete(TodoId),
    /// First step of a delete: ask for confirmation.
    RequestDelete(TodoId),
    /// Second step of a delete: apply it if confirmed, drop it otherwise.
    ResolveDelete(bool),
}

/// Compute the state following `action`.
///
#[must_use]
pub fn reduce(state: &TodoState, action: Action, env: &Environment) -> TodoState {
    let mut next = state.clone();
    match action {
        Action::SelectTab(tab) => next.tab = tab,
        Action::SetSearch(search) => next.search = search,
        Action::OpenCreateForm => {
            next.form_mode = FormMode::Create;
            next.form = PendingForm::default();
            next.tab = Tab::Active;
        }
        Action::StartEdit(id) => {
            if let Some(todo) = state.get(id) {
                next.form_mode = FormMode::Edit(id);
                next.form = PendingForm::new(&todo.title, &todo.description);
                next.tab = Tab::Active;
            }
        }
        Action::SetTitle(title) => next.form.title = title,
        Action::SetDescription(description) => next.form.description = description,
        Action::Submit => return submit(state, env),
        Action::CancelForm => close_form(&mut next),
        Action::ToggleComplete(id) => {
            let now = env.clock.now();
            for todo in next.todos.iter_mut().filter(|t| t.id == id) {
                todo.completed = !todo.completed;
                todo.date = now;
            }
        }
        Action::RequestDelete(id) => {
            if state.exists(id) {
                next.pending_delete = Some(id);
            }
        }
        Action::ResolveDelete(confirmed) => {
            next.pending_delete = None;
            if let (true, Some(id)) = (confirmed, state.pending_delete) {
                next.todos.retain(|t| t.id != id);
                if state.editing_id() == Some(id) {
                    close_form(&mut next);
                }
            }
        }
    }
    next
}

fn submit(state: &TodoState, env: &Environment) -> TodoState {
    let Some((title, description)) = state.form.trimmed() else {
        return state.clone();
    };
    let now = env.clock.now();
    let mut next = state.clone();
    match state.form_mode.edit_target() {
        Some(id) => {
            for todo in next.todos.iter_mut().filter(|t| t.id == id) {
                todo.title = title.to_owned();
                todo.description = description.to_owned();
                todo.date = now;
            }
        }
        None => {
            let id = env.ids.next_id(now, &state.todos);
            next.todos.insert(0, Todo::new(id, title, description, now));
        }
    }
    close_form(&mut next);
    next
}

fn close_form(state: &mut TodoState) {
    state.form_mode = FormMode::Hidden;
    state.form = PendingForm::default();
}
