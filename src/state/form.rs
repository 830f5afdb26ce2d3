//! Form editing state types.
//!
//! This module contains the pending create/edit values and the form's
//! visibility state machine.

use crate::todo::TodoId;

/// In-progress title and description not yet submitted.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PendingForm {
    pub title: String,
    pub description: String,
}

impl PendingForm {
    pub fn new(title: &str, description: &str) -> Self {
        PendingForm {
            title: title.to_owned(),
            description: description.to_owned(),
        }
    }

    /// Returns the trimmed values if both are non-empty.
    ///
    pub fn trimmed(&self) -> Option<(&str, &str)> {
        let title = self.title.trim();
        let description = self.description.trim();
        if title.is_empty() || description.is_empty() {
            None
        } else {
            Some((title, description))
        }
    }
}

/// Specifying the form region state. `Edit` carries the edit target.
///
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum FormMode {
    #[default]
    Hidden,
    Create,
    Edit(TodoId),
}

impl FormMode {
    pub fn edit_target(self) -> Option<TodoId> {
        match self {
            FormMode::Edit(id) => Some(id),
            _ => None,
        }
    }

    pub fn is_open(self) -> bool {
        self != FormMode::Hidden
    }

    /// Label of the submit control.
    ///
    pub fn submit_label(self) -> &'static str {
        match self {
            FormMode::Edit(_) => "Update Todo",
            _ => "Add Todo",
        }
    }
}

/// Specifying which form field receives typed characters.
///
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum FormField {
    #[default]
    Title,
    Description,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::Title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trimmed_strips_whitespace() {
        let form = PendingForm::new("  Title ", "\n Description\t");
        assert_eq!(Some(("Title", "Description")), form.trimmed());
    }

    #[test]
    fn trimmed_rejects_blank_fields() {
        assert_eq!(None, PendingForm::new("   ", "Description").trimmed());
        assert_eq!(None, PendingForm::new("Title", " \n ").trimmed());
        assert_eq!(None, PendingForm::default().trimmed());
    }

    #[test]
    fn edit_target() {
        assert_eq!(Some(5), FormMode::Edit(5).edit_target());
        assert_eq!(None, FormMode::Create.edit_target());
        assert_eq!(None, FormMode::Hidden.edit_target());
    }

    #[test]
    fn is_open() {
        assert!(!FormMode::Hidden.is_open());
        assert!(FormMode::Create.is_open());
        assert!(FormMode::Edit(1).is_open());
    }

    #[test]
    fn submit_label() {
        assert_eq!("Add Todo", FormMode::Create.submit_label());
        assert_eq!("Update Todo", FormMode::Edit(1).submit_label());
    }

    #[test]
    fn form_field_cycles() {
        assert_eq!(FormField::Description, FormField::Title.next());
        assert_eq!(FormField::Title, FormField::Description.next());
    }
}
